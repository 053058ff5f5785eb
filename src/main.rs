//! shannon-map CLI - local Shannon entropy maps of images
//!
//! Computes the normalized Shannon entropy of the square window around every
//! pixel and writes one text file per input image.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use shannon_map::logging::{default_level, init_tracing, init_tracing_json};
use shannon_map::{run_batch, MapConfig, MapError};
use tracing::{info, warn};

/// Calculate normalized Shannon entropy of grayscale or RGB images.
///
/// Grayscale pixel values are used directly as intensities. For RGB images
/// a 15-bit value is formed by stacking each channel's five most significant
/// bits. Each output file holds one line per row of pixels with
/// space-separated values, where 0 means a uniform window and 1 a window of
/// all-distinct values.
#[derive(Parser, Debug)]
#[command(name = "shannon-map")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    Entropy with a 9x9 window, results in output_dir:
        shannon-map -p 4 -o output_dir image1.png image2.jpg

    This writes output_dir/image1_entropy_9x9.txt and
    output_dir/image2_entropy_9x9.txt; 9x9 is the window size 1+2*padding.

EXIT CODES:
    0 - Every image processed (or help/version shown)
    1 - At least one image failed
    2 - Unusable configuration")]
struct Cli {
    /// Input images (PNG, JPEG, and other formats the image crate decodes)
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,

    /// Single-sided padding of the pixel window [default: 4]
    #[arg(short, long, value_name = "PIXELS")]
    padding: Option<usize>,

    /// Output directory (defaults to the parent directory of each input file)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Verbose mode (debug diagnostics, including each map's entropy range)
    #[arg(short, long)]
    verbose: bool,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Significant digits per output value [default: 10]
    #[arg(long, value_name = "DIGITS")]
    precision: Option<usize>,

    /// Stop at the first image that fails instead of skipping it
    #[arg(long)]
    fail_fast: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Print a JSON report of the batch to stdout
    #[arg(long)]
    report: bool,
}

/// Parses the command line. Unknown options and options with a malformed or
/// missing value are reported on stderr and dropped, so the remaining
/// arguments are still processed; a dropped value falls back to the
/// configuration or the default.
fn parse_args() -> Cli {
    let mut args: Vec<OsString> = std::env::args_os().collect();
    loop {
        let err = match Cli::try_parse_from(&args) {
            Ok(cli) => return cli,
            Err(err) => err,
        };
        let offender = match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => Some(arg.clone()),
            _ => None,
        };
        let Some(offender) = offender else {
            err.exit();
        };
        let dropped = match err.kind() {
            ErrorKind::UnknownArgument => drop_unknown(&mut args, &offender),
            ErrorKind::InvalidValue | ErrorKind::ValueValidation | ErrorKind::NoEquals => {
                match find_option(&offender) {
                    Some((long, short)) => drop_option(&mut args, long.as_deref(), short),
                    None => false,
                }
            }
            _ => false,
        };
        if !dropped {
            err.exit();
        }
        let rendered = err.to_string();
        let summary = rendered.lines().next().unwrap_or_default();
        eprintln!("{}; ignored", summary.trim_start_matches("error: "));
    }
}

/// Long and short spelling of the option clap renders as `rendered`
/// (e.g. `--padding <PIXELS>`).
fn find_option(rendered: &str) -> Option<(Option<String>, Option<char>)> {
    let name = rendered.split([' ', '=']).next()?;
    let command = Cli::command();
    let arg = command.get_arguments().find(|arg| match name.strip_prefix("--") {
        Some(long) => arg.get_long() == Some(long),
        None => {
            let mut chars = name.strip_prefix('-').unwrap_or_default().chars();
            let short = chars.next();
            chars.next().is_none() && short.is_some() && arg.get_short() == short
        }
    })?;
    Some((arg.get_long().map(str::to_string), arg.get_short()))
}

/// Removes every occurrence of an option together with its value, in the
/// `--name value`, `--name=value`, `-n value` and `-nvalue` forms. A trailing
/// option without a value is removed alone.
fn drop_option(args: &mut Vec<OsString>, long: Option<&str>, short: Option<char>) -> bool {
    let long = long.map(|name| format!("--{name}"));
    let short = short.map(|c| format!("-{c}"));
    let mut dropped = false;
    let mut index = 1;
    while index < args.len() {
        let Some(arg) = args[index].to_str() else {
            index += 1;
            continue;
        };
        let separate = Some(arg) == long.as_deref() || Some(arg) == short.as_deref();
        let attached = long
            .as_deref()
            .is_some_and(|long| arg.strip_prefix(long).is_some_and(|rest| rest.starts_with('=')))
            || short
                .as_deref()
                .is_some_and(|short| arg.len() > short.len() && arg.starts_with(short));

        if separate {
            args.remove(index);
            let has_value = args
                .get(index)
                .is_some_and(|value| !value.to_string_lossy().starts_with('-'));
            if has_value {
                args.remove(index);
            }
        } else if attached {
            args.remove(index);
        } else {
            index += 1;
            continue;
        }
        dropped = true;
    }
    dropped
}

/// Removes an unknown option. A short flag inside a combined group such as
/// `-vx` is stripped from the group, keeping the known flags.
fn drop_unknown(args: &mut Vec<OsString>, unknown: &str) -> bool {
    let exact = args.iter().skip(1).position(|arg| {
        arg.as_os_str() == OsStr::new(unknown)
            || arg
                .to_str()
                .and_then(|arg| arg.strip_prefix(unknown))
                .is_some_and(|rest| unknown.starts_with("--") && rest.starts_with('='))
    });
    if let Some(index) = exact {
        args.remove(index + 1);
        return true;
    }

    let mut chars = unknown.strip_prefix('-').unwrap_or_default().chars();
    let Some(flag) = chars.next().filter(|&c| c != '-' && chars.next().is_none()) else {
        return false;
    };
    for index in 1..args.len() {
        let Some(group) = args[index].to_str() else {
            continue;
        };
        let Some(flags) = group.strip_prefix('-').filter(|f| !f.starts_with('-')) else {
            continue;
        };
        if flags.contains(flag) {
            let rest: String = flags.chars().filter(|&c| c != flag).collect();
            if rest.is_empty() {
                args.remove(index);
            } else {
                args[index] = format!("-{rest}").into();
            }
            return true;
        }
    }
    false
}

fn resolve_config(cli: &Cli) -> anyhow::Result<MapConfig> {
    let mut config = match &cli.config {
        Some(path) => MapConfig::from_json_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => MapConfig::default(),
    };
    if let Some(padding) = cli.padding {
        config.padding = padding;
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = Some(dir.clone());
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }
    if cli.fail_fast {
        config.on_error = shannon_map::ErrorPolicy::Abort;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = resolve_config(cli)?;
    info!(
        padding = config.padding,
        window = config.window_size(),
        "Configuration resolved"
    );
    if cli.images.is_empty() {
        warn!("No input images given");
    }

    match run_batch(&cli.images, &config) {
        Ok(report) => {
            if cli.report {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Err(err) => {
            if let MapError::Batch { report, .. } = &err {
                if cli.report {
                    println!("{}", serde_json::to_string_pretty(report)?);
                }
                eprintln!("error: {err}");
                return Ok(ExitCode::from(1));
            }
            Err(err.into())
        }
    }
}

fn main() -> ExitCode {
    let cli = parse_args();

    let level = default_level(cli.verbose);
    if cli.json_logs {
        init_tracing_json(level);
    } else {
        init_tracing(level);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
