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
    let single_step = day17::SingleStep::default();
    let leap = day17::Leap::default();
    let (single_step_route, leap_route) = rayon::join(
        || grid.least_cost_route(&start, &goal, &single_step),
        || grid.least_cost_route(&start, &goal, &leap),
    );

    for (route, policy) in [
        (single_step_route, &single_step as &dyn std::fmt::Display),
        (leap_route, &leap as &dyn std::fmt::Display),
    ] {
        match route {
            Ok(route) => day17::report(&route, &grid, &args, &policy),
            Err(e) => eprintln!("Failed to search route moving {}: {}", policy, e),
        }
    }

    Ok(())
}
