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
        .leap_policy()
        .context("Failed to build leap policy from given arguments.")?;
    match grid.least_cost_route(&start, &goal, &policy) {
        Ok(route) => day17::report(&route, &grid, &args, &policy),
        Err(day17::Error::NoPathFound(from, to)) => eprintln!(
            "There's no way from {} to {} moving {}.",
            from, to, policy
        ),
        Err(e) => return Err(e).context("Failed to search least cost route."),
    }

    Ok(())
}
