use log::info;

use crate::angle::{ccw_distance, normalize};
use crate::color::Rgba;
use crate::layout::RingSpec;

/// A stroked arc at a fixed radius, running counter-clockwise from
/// `start_deg` to `end_deg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcShape {
    pub radius: i64,
    pub start_deg: i64,
    pub end_deg: i64,
    pub span_deg: i64,
    pub stroke_width: i64,
    pub color: Rgba,
}

impl ArcShape {
    fn new(spec: &RingSpec, start_deg: i64, end_deg: i64) -> Self {
        Self {
            radius: spec.radius,
            start_deg,
            end_deg,
            span_deg: spec.arc_deg,
            stroke_width: spec.stroke_width,
            color: spec.color,
        }
    }

    /// Whether the arc covers the angle `deg`, endpoints included.
    pub fn contains(&self, deg: i64) -> bool {
        ccw_distance(self.start_deg, deg) <= self.span_deg
    }
}

/// Splits a ring into its two arcs, the second starting `interval_deg`
/// after the first ends.
pub fn render_ring(spec: &RingSpec) -> [ArcShape; 2] {
    let start_deg1 = normalize(spec.start_deg);
    let end_deg1 = normalize(start_deg1 + spec.arc_deg);
    let start_deg2 = normalize(end_deg1 + spec.interval_deg);
    let end_deg2 = normalize(start_deg2 + spec.arc_deg);

    info!("arc stroke width: {}", spec.stroke_width);
    info!("arc 1 at {}: {start_deg1} to {end_deg1}", spec.radius);
    info!("arc 2 at {}: {start_deg2} to {end_deg2}", spec.radius);

    [
        ArcShape::new(spec, start_deg1, end_deg1),
        ArcShape::new(spec, start_deg2, end_deg2),
    ]
}
