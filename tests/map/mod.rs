mod engine;
mod pipeline;
