pub mod booking;
pub mod carousel;
pub mod cli;
pub mod constants;
pub mod gallery;
pub mod nav;
pub mod simulate;
#[cfg(feature = "gui")]
pub mod viewer;

pub use carousel::{Carousel, CarouselConfig, Navigation, SlideView};
