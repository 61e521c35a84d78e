use clap::ValueEnum;
use log::info;
use ring_lib::angle::to_radians;
use ring_lib::color::Rgba;
use ring_lib::{render_ring, ArcShape, RingSpec};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};
use svg::Document;

/// How an arc is turned into SVG. Both draw the same band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ArcStyle {
    /// An open arc stroked at the ring radius.
    #[default]
    Stroke,
    /// A closed, filled ring segment between the band's two edges.
    Band,
}

fn get_position(radius: f64, deg: i64) -> (f64, f64) {
    let (sin, cos) = to_radians(deg).sin_cos();
    // svg's y axis points down, flip it so angles run counter-clockwise on screen
    (cos * radius, -sin * radius)
}

fn large_arc_flag(span_deg: i64) -> i32 {
    i32::from(span_deg > 180)
}

fn with_color(path: Path, attribute: &str, color: &Rgba) -> Path {
    let path = path.set(attribute, color.to_rgb_hex());
    if color.is_opaque() {
        path
    } else {
        path.set(format!("{attribute}-opacity"), color.opacity())
    }
}

fn make_stroke(arc: &ArcShape) -> Path {
    let radius = arc.radius as f64;
    let p1 = get_position(radius, arc.start_deg);
    let p2 = get_position(radius, arc.end_deg);

    let data = Data::new().move_to(p1).elliptical_arc_to((
        radius,
        radius,
        0,
        large_arc_flag(arc.span_deg),
        0,
        p2.0,
        p2.1,
    ));

    with_color(Path::new(), "stroke", &arc.color)
        .set("stroke-width", arc.stroke_width)
        .set("fill", "none")
        .set("d", data)
}

fn make_band(arc: &ArcShape) -> Path {
    let half = arc.stroke_width as f64 / 2.0;
    let outer_radius = arc.radius as f64 + half;
    let inner_radius = (arc.radius as f64 - half).max(0.0);
    let large_arc = large_arc_flag(arc.span_deg);

    let c1 = get_position(outer_radius, arc.start_deg);
    let c2 = get_position(outer_radius, arc.end_deg);
    let c3 = get_position(inner_radius, arc.end_deg);
    let c4 = get_position(inner_radius, arc.start_deg);

    let data = Data::new()
        .move_to(c1)
        .elliptical_arc_to((outer_radius, outer_radius, 0, large_arc, 0, c2.0, c2.1))
        .line_to(c3)
        .elliptical_arc_to((inner_radius, inner_radius, 0, large_arc, 1, c4.0, c4.1))
        .close();

    with_color(Path::new(), "fill", &arc.color)
        .set("stroke", "none")
        .set("d", data)
}

pub fn make_arc(arc: &ArcShape, style: ArcStyle) -> Path {
    match style {
        ArcStyle::Stroke => make_stroke(arc),
        ArcStyle::Band => make_band(arc),
    }
}

fn make_background(radius: f64) -> Circle {
    Circle::new()
        .set("cx", 0)
        .set("cy", 0)
        .set("r", radius)
        .set("fill", Rgba::BLACK.to_rgb_hex())
}

/// Draws every ring on top of a black disc, innermost ring first.
pub fn make_document<I>(rings: I, size: f64, style: ArcStyle) -> Document
where
    I: IntoIterator<Item = RingSpec>,
{
    let half = size / 2.0;
    let background = Document::new()
        .set("width", size)
        .set("height", size)
        .set("viewBox", (-half, -half, size, size))
        .add(make_background(half));

    rings.into_iter().fold(background, |doc, ring| {
        info!("generating ring at {}", ring.radius);
        render_ring(&ring)
            .iter()
            .fold(doc, |doc, arc| doc.add(make_arc(arc, style)))
    })
}
