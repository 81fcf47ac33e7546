use anyhow::{Context, Result};
use clap::Parser;
use day17::CLIArgs;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let grid = day17::read_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read cost grid from given file({}).",
            args.input_path.display()
        )
    })?;

    let (start, goal) = args.endpoints(&grid)?;
    let policy = args
        .single_step_policy()
        .context("Failed to build single step policy from given arguments.")?;
    let route = grid
        .least_cost_route(&start, &goal, &policy)
        .with_context(|| format!("Failed to find route from {} to {}.", start, goal))?;
    day17::report(&route, &grid, &args, &policy);

    Ok(())
}
