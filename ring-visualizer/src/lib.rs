mod code;

pub mod args;
pub mod cli;

pub use code::{make_arc, make_document, ArcStyle};
use log::info;
use ring_lib::{Result, RingSpec};

pub const CANVAS_SIZE: f64 = 512.0;

pub fn save_svg<T, I>(path: T, rings: I, style: ArcStyle) -> Result<()>
where
    T: std::convert::AsRef<std::path::Path>,
    I: IntoIterator<Item = RingSpec>,
{
    let document = make_document(rings, CANVAS_SIZE, style);

    info!("saving svg to {}", path.as_ref().display());
    svg::save(path, &document)?;
    Ok(())
}
