pub mod brighten;
pub mod color;
pub mod constants;
pub mod geometry;
pub mod scene;
pub mod svg;
pub mod time;
pub mod trail;

pub use brighten::*;
pub use color::*;
pub use constants::*;
pub use geometry::*;
pub use scene::*;
pub use svg::*;
pub use time::*;
pub use trail::*;
