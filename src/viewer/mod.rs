//! Native window that plays a directory of photos through a [`Carousel`](crate::Carousel).

pub mod engine;
pub mod slide;
pub mod texture_loader;
pub mod wall;

pub use engine::{CarouselEngine, Engine};
