//! Boustrophedon (serpentine) traversal of a field.
//!
//! The scan sweeps right along row 0, steps down, sweeps left along row 1,
//! steps down, and so on. Every move after the first shifts the position by
//! exactly one column or one row, which is what lets a sliding window be
//! updated with a single row or column of changes.

/// How the scan arrived at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// First position, `(0, 0)`; no previous window.
    Start,
    /// One column to the right.
    Right,
    /// One column to the left.
    Left,
    /// One row down.
    Down,
}

/// A visited position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub x: usize,
    pub y: usize,
    pub movement: Move,
}

/// Horizontal sweep direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Right,
    Left,
}

impl Sweep {
    fn reversed(self) -> Self {
        match self {
            Sweep::Right => Sweep::Left,
            Sweep::Left => Sweep::Right,
        }
    }
}

/// Scan state: what the next call to `next` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing visited yet.
    Init,
    /// Next move is one column right.
    SweepRight,
    /// Next move is one column left.
    SweepLeft,
    /// Next move is one row down, after which sweeping resumes in `next`.
    StepDown { next: Sweep },
    /// Every position has been visited.
    Done,
}

/// Iterator over every position of a `width x height` field in serpentine
/// order, each visited exactly once.
#[derive(Debug, Clone)]
pub struct Boustrophedon {
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    phase: Phase,
}

impl Boustrophedon {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            x: 0,
            y: 0,
            phase: Phase::Init,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Phase after arriving at the current position while sweeping in
    /// `sweep`: keep sweeping, step down at the row's end, or stop on the
    /// last row.
    fn settle(&self, sweep: Sweep) -> Phase {
        let at_edge = match sweep {
            Sweep::Right => self.x + 1 == self.width,
            Sweep::Left => self.x == 0,
        };
        if !at_edge {
            match sweep {
                Sweep::Right => Phase::SweepRight,
                Sweep::Left => Phase::SweepLeft,
            }
        } else if self.y + 1 == self.height {
            Phase::Done
        } else {
            Phase::StepDown {
                next: sweep.reversed(),
            }
        }
    }
}

impl Iterator for Boustrophedon {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let movement = match self.phase {
            Phase::Done => return None,
            Phase::Init => {
                if self.width == 0 || self.height == 0 {
                    self.phase = Phase::Done;
                    return None;
                }
                self.phase = self.settle(Sweep::Right);
                Move::Start
            }
            Phase::SweepRight => {
                self.x += 1;
                self.phase = self.settle(Sweep::Right);
                Move::Right
            }
            Phase::SweepLeft => {
                self.x -= 1;
                self.phase = self.settle(Sweep::Left);
                Move::Left
            }
            Phase::StepDown { next } => {
                self.y += 1;
                self.phase = self.settle(next);
                Move::Down
            }
        };
        Some(Step {
            x: self.x,
            y: self.y,
            movement,
        })
    }
}
