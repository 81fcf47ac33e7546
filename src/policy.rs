use std::fmt::{Debug, Display};

use crate::{Direction, Error};

/// Straight run towards `dir` of `min_steps..=max_steps` cells, continuing a run of `prior_run`.
///
/// Landing after `k` cells leaves a run length of `prior_run + k`. Only cells inside the grid
/// are ever walked, so `max_steps` may be far larger than the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub dir: Direction,
    pub min_steps: usize,
    pub max_steps: usize,
    pub prior_run: usize,
}

impl Move {
    pub fn new(dir: Direction, min_steps: usize, max_steps: usize, prior_run: usize) -> Self {
        Self {
            dir,
            min_steps,
            max_steps,
            prior_run,
        }
    }

    pub fn single(dir: Direction, prior_run: usize) -> Self {
        Self::new(dir, 1, 1, prior_run)
    }

    pub fn run_len_after(&self, steps: usize) -> usize {
        self.prior_run.saturating_add(steps)
    }
}

/// Decides which moves are legal given the current heading and run length.
///
/// `heading` is `None` before the first move, in which case `run_len` is 0.
pub trait MovePolicy: Debug {
    fn moves(&self, heading: Option<Direction>, run_len: usize) -> Vec<Move>;
}

/// Moves one cell at a time, at most `max_run` cells in a row before turning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleStep {
    max_run: usize,
}

impl Default for SingleStep {
    fn default() -> Self {
        Self { max_run: 3 }
    }
}

impl Display for SingleStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at most {} straight step(s)", self.max_run)
    }
}

impl SingleStep {
    pub fn new(max_run: usize) -> Result<Self, Error> {
        if max_run == 0 {
            return Err(Error::InvalidRunBounds(1, max_run));
        }

        Ok(Self { max_run })
    }

    pub fn max_run(&self) -> usize {
        self.max_run
    }
}

impl MovePolicy for SingleStep {
    fn moves(&self, heading: Option<Direction>, run_len: usize) -> Vec<Move> {
        Direction::all_dirs()
            .iter()
            .filter_map(|&dir| match heading {
                Some(cur_dir) if dir == cur_dir.reverse() => None,
                Some(cur_dir) if dir == cur_dir => {
                    Some(Move::single(dir, run_len)).filter(|_| run_len < self.max_run)
                }
                _ => Some(Move::single(dir, 0)),
            })
            .collect()
    }
}

/// Every move is a whole straight run of `min_run..=max_run` cells, followed by a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leap {
    min_run: usize,
    max_run: usize,
}

impl Default for Leap {
    fn default() -> Self {
        Self {
            min_run: 4,
            max_run: 10,
        }
    }
}

impl Display for Leap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "straight runs of {} to {} cell(s)",
            self.min_run, self.max_run
        )
    }
}

impl Leap {
    pub fn new(min_run: usize, max_run: usize) -> Result<Self, Error> {
        if min_run == 0 || min_run > max_run {
            return Err(Error::InvalidRunBounds(min_run, max_run));
        }

        Ok(Self { min_run, max_run })
    }

    pub fn min_run(&self) -> usize {
        self.min_run
    }

    pub fn max_run(&self) -> usize {
        self.max_run
    }
}

impl MovePolicy for Leap {
    fn moves(&self, heading: Option<Direction>, _run_len: usize) -> Vec<Move> {
        Direction::all_dirs()
            .iter()
            .filter(|&&dir| match heading {
                Some(cur_dir) => dir != cur_dir && dir != cur_dir.reverse(),
                None => true,
            })
            .map(|&dir| Move::new(dir, self.min_run, self.max_run, 0))
            .collect()
    }
}
