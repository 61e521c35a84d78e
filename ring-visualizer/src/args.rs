use clap::Parser;
use ring_lib::AngleConfig;
use std::path::PathBuf;

use crate::ArcStyle;

/// Draws concentric arc rings on a black disc and saves them as SVG.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Radial gap between neighbouring rings.
    #[arg(allow_negative_numbers = true)]
    pub interval: i64,

    /// Number of rings.
    #[arg(allow_negative_numbers = true)]
    pub num_arcs: i64,

    /// Arc color as #RRGGBB or #RRGGBBAA.
    #[arg(short, long, default_value = "#DEDEDE")]
    pub color: String,

    /// Inner edge of the innermost ring.
    #[arg(short, long = "start_radius", allow_negative_numbers = true, default_value_t = 85)]
    pub start_radius: i64,

    /// Outer edge of the outermost ring.
    #[arg(short, long = "end_radius", allow_negative_numbers = true, default_value_t = 185)]
    pub end_radius: i64,

    /// Path of the SVG file to write.
    #[arg(short, long, default_value = "output.svg")]
    pub output: PathBuf,

    /// How arcs are drawn.
    #[arg(long, value_enum, default_value_t = ArcStyle::Stroke)]
    pub style: ArcStyle,

    /// Where the first arc of every ring starts, in degrees.
    #[arg(long = "start_deg", allow_negative_numbers = true, default_value_t = AngleConfig::default().start_deg)]
    pub start_deg: i64,

    /// Span of each arc, in degrees.
    #[arg(long = "arc_deg", default_value_t = AngleConfig::default().arc_deg)]
    pub arc_deg: i64,

    /// Gap between the two arcs of a ring, in degrees.
    #[arg(long = "interval_deg", default_value_t = AngleConfig::default().interval_deg)]
    pub interval_deg: i64,
}

impl Args {
    pub fn angles(&self) -> AngleConfig {
        AngleConfig {
            start_deg: self.start_deg,
            arc_deg: self.arc_deg,
            interval_deg: self.interval_deg,
        }
    }
}
