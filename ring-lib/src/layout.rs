use log::debug;
use num_integer::Integer;

use crate::angle::FULL_TURN;
use crate::color::Rgba;
use crate::error::{Error, Result};

/// Angular placement shared by every ring of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleConfig {
    /// Where the first arc begins, counter-clockwise from the positive x axis.
    pub start_deg: i64,
    /// Span of each of the two arcs.
    pub arc_deg: i64,
    /// Gap between the end of the first arc and the start of the second.
    pub interval_deg: i64,
}

impl Default for AngleConfig {
    fn default() -> Self {
        Self {
            start_deg: 155,
            arc_deg: 120,
            interval_deg: 60,
        }
    }
}

impl AngleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.arc_deg <= 0 || self.arc_deg >= FULL_TURN {
            return Err(Error::InvalidArgument(format!(
                "arc span must be between 1 and 359 degrees, got {}",
                self.arc_deg
            )));
        }
        if self.interval_deg < 0 {
            return Err(Error::InvalidArgument(format!(
                "arc interval must not be negative, got {}",
                self.interval_deg
            )));
        }
        // both arcs plus one gap have to fit in a turn or the second arc runs into the first
        if self.interval_deg > FULL_TURN - 2 * self.arc_deg {
            return Err(Error::InvalidArgument(format!(
                "two {}° arcs with a {}° interval overlap",
                self.arc_deg, self.interval_deg
            )));
        }
        Ok(())
    }
}

fn overflow() -> Error {
    Error::InvalidArgument("ring dimensions overflow".to_string())
}

/// One ring of the drawing: two arcs at a single radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingSpec {
    pub radius: i64,
    pub start_deg: i64,
    pub arc_deg: i64,
    pub interval_deg: i64,
    pub stroke_width: i64,
    pub color: Rgba,
}

/// Evenly spaced rings filling the band between two radii.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingLayout {
    start_radius: i64,
    end_radius: i64,
    interval: i64,
    num_arcs: i64,
    color: Rgba,
    angles: AngleConfig,
    arc_width: i64,
    pitch: i64,
}

impl RingLayout {
    pub fn new(
        start_radius: i64,
        end_radius: i64,
        interval: i64,
        num_arcs: i64,
        color: Rgba,
        angles: AngleConfig,
    ) -> Result<Self> {
        if num_arcs <= 0 {
            return Err(Error::InvalidArgument(format!(
                "number of arcs must be at least 1, got {num_arcs}"
            )));
        }
        if interval < 0 {
            return Err(Error::InvalidArgument(format!(
                "ring interval must not be negative, got {interval}"
            )));
        }
        if start_radius < 0 {
            return Err(Error::InvalidArgument(format!(
                "start radius must not be negative, got {start_radius}"
            )));
        }
        angles.validate()?;

        let spare_width = end_radius
            .checked_sub(start_radius)
            .zip(interval.checked_mul(num_arcs - 1))
            .and_then(|(total_width, interval_width)| total_width.checked_sub(interval_width))
            .ok_or_else(overflow)?;
        let arc_width = Integer::div_ceil(&spare_width, &num_arcs);
        if arc_width <= 0 {
            return Err(Error::InvalidArgument(format!(
                "{num_arcs} rings {interval} apart leave no room between radius {start_radius} and {end_radius}"
            )));
        }

        // a lone ring has no neighbour, so the interval never enters its radius
        let pitch = if num_arcs == 1 {
            arc_width
        } else {
            arc_width.checked_add(interval).ok_or_else(overflow)?
        };
        // the outermost centerline bounds every radius the iterator computes
        (num_arcs - 1)
            .checked_mul(pitch)
            .and_then(|offset| offset.checked_add(arc_width / 2))
            .and_then(|offset| offset.checked_add(start_radius))
            .ok_or_else(overflow)?;

        Ok(Self {
            start_radius,
            end_radius,
            interval,
            num_arcs,
            color,
            angles,
            arc_width,
            pitch,
        })
    }

    pub fn arc_width(&self) -> i64 {
        self.arc_width
    }

    pub fn num_arcs(&self) -> usize {
        self.num_arcs as usize
    }

    pub fn end_radius(&self) -> i64 {
        self.end_radius
    }

    /// Distance between the centerlines of neighbouring rings.
    pub fn pitch(&self) -> i64 {
        self.pitch
    }

    /// Rings from innermost to outermost. Every call starts over.
    pub fn rings(&self) -> Rings<'_> {
        Rings {
            layout: self,
            next: 0,
        }
    }
}

/// Iterator over the rings of a [`RingLayout`].
#[derive(Debug, Clone)]
pub struct Rings<'a> {
    layout: &'a RingLayout,
    next: usize,
}

impl Iterator for Rings<'_> {
    type Item = RingSpec;

    fn next(&mut self) -> Option<Self::Item> {
        let layout = self.layout;
        if self.next >= layout.num_arcs() {
            return None;
        }
        let half_width = layout.arc_width / 2;
        let radius = layout.start_radius + half_width + self.next as i64 * layout.pitch();
        self.next += 1;

        debug!("ring {} of {} at radius {radius}", self.next, layout.num_arcs);
        Some(RingSpec {
            radius,
            start_deg: layout.angles.start_deg,
            arc_deg: layout.angles.arc_deg,
            interval_deg: layout.angles.interval_deg,
            stroke_width: layout.arc_width,
            color: layout.color,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.layout.num_arcs() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rings<'_> {}

/// Lays out `num_arcs` rings between two radii with the default angles.
pub fn generate_rings(
    start_radius: i64,
    end_radius: i64,
    interval: i64,
    num_arcs: i64,
    color: &str,
) -> Result<RingLayout> {
    RingLayout::new(
        start_radius,
        end_radius,
        interval,
        num_arcs,
        color.parse()?,
        AngleConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::{iproduct, Itertools};

    fn radii(layout: &RingLayout) -> Vec<i64> {
        layout.rings().map(|r| r.radius).collect_vec()
    }

    #[test]
    fn test_three_rings_no_interval() {
        let layout = generate_rings(85, 185, 0, 3, "#DEDEDE").unwrap();
        assert_eq!(layout.arc_width(), 34);
        assert_eq!(radii(&layout), vec![102, 136, 170]);
        for ring in layout.rings() {
            assert_eq!(ring.stroke_width, 34);
            assert_eq!(ring.color, Rgba([0xDE, 0xDE, 0xDE, 0xFF]));
            assert_eq!((ring.start_deg, ring.arc_deg, ring.interval_deg), (155, 120, 60));
        }
    }

    #[test]
    fn test_interval_between_rings() {
        // (100 - 2 * 5) / 3 = 30
        let layout = generate_rings(85, 185, 5, 3, "#DEDEDE").unwrap();
        assert_eq!(layout.arc_width(), 30);
        assert_eq!(radii(&layout), vec![100, 135, 170]);
    }

    #[test]
    fn test_single_ring_ignores_interval() {
        let a = generate_rings(85, 185, 0, 1, "#DEDEDE").unwrap();
        let b = generate_rings(85, 185, 40, 1, "#DEDEDE").unwrap();
        assert_eq!(a.arc_width(), 100);
        assert_eq!(radii(&a), vec![135]);
        assert_eq!(radii(&a), radii(&b));
    }

    #[test]
    fn test_rejects_non_positive_count() {
        for n in [0, -1, -10] {
            assert!(matches!(
                generate_rings(85, 185, 0, n, "#DEDEDE"),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_rejects_no_room() {
        // intervals eat the whole band
        assert!(matches!(
            generate_rings(85, 185, 50, 3, "#DEDEDE"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_rings(185, 85, 0, 3, "#DEDEDE"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_rings(85, 85, 0, 1, "#DEDEDE"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(generate_rings(85, 185, -1, 3, "#DEDEDE").is_err());
        assert!(generate_rings(-5, 185, 0, 3, "#DEDEDE").is_err());
        assert!(generate_rings(85, 185, 0, 3, "grey").is_err());
    }

    #[test]
    fn test_rejects_overlapping_angles() {
        let color = Rgba::BLACK;
        for (arc_deg, interval_deg) in [(0, 60), (360, 0), (120, -1), (150, 61), (180, 1)] {
            let angles = AngleConfig {
                start_deg: 0,
                arc_deg,
                interval_deg,
            };
            assert!(
                RingLayout::new(85, 185, 0, 3, color, angles).is_err(),
                "{arc_deg}/{interval_deg} should be rejected"
            );
        }
        let touching = AngleConfig {
            start_deg: -90,
            arc_deg: 180,
            interval_deg: 0,
        };
        assert!(RingLayout::new(85, 185, 0, 3, color, touching).is_ok());
    }

    #[test]
    fn test_restartable() {
        let layout = generate_rings(10, 250, 3, 7, "#FF000080").unwrap();
        let first = layout.rings().collect_vec();
        let second = layout.rings().collect_vec();
        assert_eq!(first, second);
        assert_eq!(first, generate_rings(10, 250, 3, 7, "#FF000080").unwrap().rings().collect_vec());
    }

    #[test]
    fn test_count_and_spacing() {
        let mut checked = 0;
        let mut rejected = 0;
        for (start, width, interval, n) in
            iproduct!([0, 17, 85], [40, 100, 171, 256], [0, 1, 4, 9], 1..=12)
        {
            let layout = match generate_rings(start, start + width, interval, n, "#DEDEDE") {
                Ok(layout) => layout,
                Err(e) => {
                    // only rings squeezed out by their intervals may be refused
                    assert!(matches!(e, Error::InvalidArgument(_)));
                    assert!(interval * (n - 1) >= width, "{start}/{width}/{interval}/{n}: {e}");
                    rejected += 1;
                    continue;
                }
            };
            checked += 1;
            let rings = layout.rings();
            assert_eq!(rings.len(), n as usize);
            let radii = radii(&layout);
            assert_eq!(radii.len(), n as usize);
            assert_eq!(radii[0], start + layout.arc_width() / 2);
            for (a, b) in radii.iter().tuple_windows() {
                assert!(b > a);
                assert_eq!(b - a, layout.arc_width() + interval);
            }
        }
        assert_eq!(checked + rejected, 3 * 4 * 4 * 12);
        assert!(checked > rejected, "{checked} checked, {rejected} rejected");
    }

    #[test]
    fn test_extreme_radii_rejected() {
        let angles = AngleConfig::default();
        let color = Rgba::BLACK;
        assert!(matches!(
            RingLayout::new(i64::MAX - 10, i64::MAX, 0, 6, color, angles),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            RingLayout::new(0, i64::MAX, i64::MAX / 2, 3, color, angles),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            RingLayout::new(0, 100, i64::MAX, 2, color, angles),
            Err(Error::InvalidArgument(_))
        ));

        // a single ring right at the limit still fits
        let layout = RingLayout::new(i64::MAX - 10, i64::MAX, i64::MAX, 1, color, angles).unwrap();
        assert_eq!(radii(&layout), vec![i64::MAX - 5]);
    }

    #[test]
    fn test_huge_angle_interval_rejected() {
        for interval_deg in [i64::MAX, i64::MAX - 119, 121] {
            let angles = AngleConfig {
                start_deg: 0,
                arc_deg: 120,
                interval_deg,
            };
            assert!(matches!(angles.validate(), Err(Error::InvalidArgument(_))));
            assert!(matches!(
                RingLayout::new(85, 185, 0, 3, Rgba::BLACK, angles),
                Err(Error::InvalidArgument(_))
            ));
        }
        let widest = AngleConfig {
            start_deg: i64::MIN,
            arc_deg: 120,
            interval_deg: 120,
        };
        assert!(widest.validate().is_ok());
    }
}
