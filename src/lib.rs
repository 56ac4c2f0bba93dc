pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod plot;
pub mod plotters_ext;
pub mod robot;

pub mod prelude {
    pub use crate::canvas::*;
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::geometry::*;
    pub use crate::plot::*;
    pub use crate::plotters_ext::*;
    pub use crate::robot::*;
}
