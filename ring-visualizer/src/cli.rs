use clap::Parser;
use log::info;
use ring_lib::color::Rgba;
use ring_lib::{Result, RingLayout};

use crate::args::Args;
use crate::save_svg;

pub fn run() -> Result<()> {
    let args = Args::parse();
    run_with(&args)
}

/// Validates everything up front so a bad argument never leaves a file behind.
pub fn run_with(args: &Args) -> Result<()> {
    let color: Rgba = args.color.parse()?;
    let layout = RingLayout::new(
        args.start_radius,
        args.end_radius,
        args.interval,
        args.num_arcs,
        color,
        args.angles(),
    )?;

    info!(
        "{} rings of width {} from radius {} to {}, color {color}",
        layout.num_arcs(),
        layout.arc_width(),
        args.start_radius,
        layout.end_radius(),
    );

    save_svg(&args.output, layout.rings(), args.style)
}
