pub mod angle;
pub mod color;
pub mod error;
pub mod layout;
pub mod render;

pub use error::{Error, Result};
pub use layout::{generate_rings, AngleConfig, RingLayout, RingSpec};
pub use render::{render_ring, ArcShape};
