use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

mod frontier;
mod grid;
mod policy;
mod search;

pub use frontier::BucketFrontier;
pub use grid::{CostGrid, Direction, Position};
pub use policy::{Leap, Move, MovePolicy, SingleStep};
pub use search::{Leg, Route, SearchState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidCharForCost(char),
    CostCountMismatch(usize, usize),
    OutOfBounds(Position),
    NoPathFound(Position, Position),
    InvalidRunBounds(usize, usize),
    UnsupportedMinRun(usize),
    NoCommaInPositionText,
    InvalidCoordinateText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForCost(c) => {
                write!(f, "Invalid character({}) for cost, expect a digit.", c)
            }
            Error::CostCountMismatch(expect_n, this_n) => write!(
                f,
                "Expect {} cost(s) to fill the grid, given {}.",
                expect_n, this_n
            ),
            Error::OutOfBounds(pos) => write!(f, "Position {} is outside of the grid.", pos),
            Error::NoPathFound(from, to) => {
                write!(f, "There's no legal path from {} to {}.", from, to)
            }
            Error::InvalidRunBounds(min_run, max_run) => write!(
                f,
                "Invalid run length bounds [{}, {}], expect 1 <= min <= max.",
                min_run, max_run
            ),
            Error::UnsupportedMinRun(min_run) => write!(
                f,
                "Single step moves don't take a minimum run length, given {}.",
                min_run
            ),
            Error::NoCommaInPositionText => write!(
                f,
                "Expect a comma to separate coordinates of position in text."
            ),
            Error::InvalidCoordinateText(s) => {
                write!(f, "Invalid text({}) for coordinate of position.", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Start position as "x,y", top left corner by default.
    #[arg(long, value_parser = parse_position)]
    pub start: Option<Position>,
    /// Goal position as "x,y", bottom right corner by default.
    #[arg(long, value_parser = parse_position)]
    pub goal: Option<Position>,
    /// Minimum straight run before turning, leap moves only.
    #[arg(long)]
    pub min_run: Option<usize>,
    /// Maximum straight run before turning.
    #[arg(long)]
    pub max_run: Option<usize>,
    /// Print the grid with the least cost route drawn on it.
    #[arg(long)]
    pub show_path: bool,
}

impl CLIArgs {
    pub fn endpoints(&self, grid: &CostGrid) -> Result<(Position, Position)> {
        let start = self.start.unwrap_or(Position::new(0, 0));
        let goal = match self.goal {
            Some(goal) => goal,
            None => grid
                .bottom_right()
                .context("Given grid is empty, there's no default goal position.")?,
        };

        Ok((start, goal))
    }

    pub fn single_step_policy(&self) -> Result<SingleStep, Error> {
        if let Some(min_run) = self.min_run {
            return Err(Error::UnsupportedMinRun(min_run));
        }

        match self.max_run {
            Some(max_run) => SingleStep::new(max_run),
            None => Ok(SingleStep::default()),
        }
    }

    pub fn leap_policy(&self) -> Result<Leap, Error> {
        let default = Leap::default();
        Leap::new(
            self.min_run.unwrap_or(default.min_run()),
            self.max_run.unwrap_or(default.max_run()),
        )
    }
}

fn parse_position(text: &str) -> std::result::Result<Position, Error> {
    text.parse()
}

pub fn report<P: Display>(route: &Route, grid: &CostGrid, args: &CLIArgs, policy: &P) {
    println!(
        "The least heat loss from {} to {} moving {} is {}.",
        route.start(),
        route.end(),
        policy,
        route.cost()
    );
    if args.show_path {
        println!("{}", route.render(grid));
    }
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<CostGrid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        lines.push(line);
    }

    Ok(CostGrid::from_lines(lines.iter().map(String::as_str))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_step_policy_rejects_min_run() {
        let args = CLIArgs::parse_from(["part1", "inputs.txt", "--min-run", "4"]);
        assert_eq!(args.single_step_policy(), Err(Error::UnsupportedMinRun(4)));

        let args = CLIArgs::parse_from(["part1", "inputs.txt", "--max-run", "5"]);
        assert_eq!(args.single_step_policy(), SingleStep::new(5));
    }

    #[test]
    fn leap_policy_fills_missing_bounds_with_defaults() {
        let args = CLIArgs::parse_from(["part2", "inputs.txt", "--max-run", "7"]);
        assert_eq!(args.leap_policy(), Leap::new(4, 7));

        let args = CLIArgs::parse_from(["part2", "inputs.txt", "--min-run", "11"]);
        assert_eq!(args.leap_policy(), Err(Error::InvalidRunBounds(11, 10)));
    }
}
