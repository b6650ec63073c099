use anyhow::{bail, Context, Result};
use clap::Parser;
use penplot::builder::PlotterBuilder;
use penplot::config::{DrawingConfig, PlotterConfig, TraceTarget};
use penplot::core::{polygon_commands, Command, LineColor, PlotterState, Position};
use penplot::effects::{Printer, StdoutPrinter, TracingPrinter};
use penplot::validation::{validate_polygon, CommandViolation, ValidationBuilder};
use std::path::PathBuf;
use stillwater::validation::Validation;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "penplot")]
#[command(about = "Run the reference pen plotter drawing")]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("penplot=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("penplot=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Triangle, then a red square starting at (10, 10).
fn reference_program(drawing: &DrawingConfig) -> Vec<Command> {
    let mut program = polygon_commands(3, 120.0, drawing.triangle_side);
    program.push(Command::SetPosition(Position::new(10.0, 10.0)));
    program.push(Command::SetColor(LineColor::Red));
    program.extend(polygon_commands(4, 90.0, drawing.square_side));
    program
}

fn report(violations: impl IntoIterator<Item = CommandViolation>) -> usize {
    let mut count = 0;
    for violation in violations {
        tracing::error!("{violation}");
        count += 1;
    }
    count
}

/// Reject the configured drawing before any command runs.
fn check_program(config: &PlotterConfig, program: &[Command], start: &PlotterState) -> Result<()> {
    let shapes = Validation::all_vec(vec![
        validate_polygon(3, config.drawing.triangle_side),
        validate_polygon(4, config.drawing.square_side),
    ]);
    if let Validation::Failure(errors) = shapes {
        let count = report(errors.iter().cloned());
        bail!("drawing rejected with {count} violation(s)");
    }

    let mut rules = ValidationBuilder::new();
    if let Some(max) = config.max_commands {
        rules = rules.max_commands(max);
    }
    if let Some(bounds) = config.bounds {
        rules = rules.bounds(bounds);
    }

    match rules.build().validate(program, start) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => {
            let count = report(errors.iter().cloned());
            bail!("program rejected with {count} violation(s)")
        }
    }
}

fn run<P: Printer>(config: &PlotterConfig, printer: P) -> Result<()> {
    let program = reference_program(&config.drawing);

    let mut plotter = PlotterBuilder::new()
        .position(config.initial.position)
        .angle(config.initial.angle)
        .color(config.initial.color)
        .pen(config.initial.pen)
        .printer(printer)
        .build()
        .context("invalid initial plotter state")?;

    check_program(config, &program, &plotter.state())?;
    plotter.run(&program);

    let state = plotter.state();
    info!(
        steps = plotter.history().len(),
        lines = plotter.history().lines().len(),
        "drawing complete"
    );
    info!("final state: {state}");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = match &args.config {
        Some(path) => PlotterConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PlotterConfig::default(),
    };

    match config.trace.target {
        TraceTarget::Stdout => run(&config, StdoutPrinter),
        TraceTarget::Tracing => run(&config, TracingPrinter),
    }
}
