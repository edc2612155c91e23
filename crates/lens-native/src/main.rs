use anyhow::Context;
use clap::Parser;
use lens_core::svg::render_diagram;
use lens_core::{AppState, DiagramFrame, OpticalInputs, ViewMode, Viewport};

mod cli;
mod report;

use cli::Args;

fn init_logger(level: log::LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());
    print!("{}", run(&args)?);
    Ok(())
}

/// Validate the arguments and produce the report or SVG text.
fn run(args: &Args) -> anyhow::Result<String> {
    // Reject rather than clamp: the CLI has no slider to fall back on
    let inputs = OpticalInputs::new(args.object, args.focal, args.screen)
        .context("invalid lens setup")?;
    log::info!(
        "solving a={} f={} screen={}",
        inputs.object_distance_cm,
        inputs.focal_length_cm,
        inputs.screen_distance_cm
    );

    let state = AppState {
        object_distance_cm: inputs.object_distance_cm,
        screen_distance_cm: inputs.screen_distance_cm,
        focal_length_cm: inputs.focal_length_cm,
        view_mode: if args.detail {
            ViewMode::Detail
        } else {
            ViewMode::Simple
        },
        show_rays: !args.no_rays,
        ..AppState::default()
    };
    let viewport = Viewport::default();
    let frame = DiagramFrame::compute(&state, &viewport);
    let labels = lens_core::Locale::from(args.locale).labels();

    Ok(if args.svg {
        render_diagram(&frame, &state, &viewport, labels)
    } else {
        report::render(&state, &frame, labels)
    })
}
