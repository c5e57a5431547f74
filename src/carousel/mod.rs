//! Rotation state machine over a fixed set of slides.
//!
//! The controller owns the current index and the auto-advance timer; the
//! [`SlideView`] owns the slides. Time only moves when the owner calls
//! [`Carousel::update`], so a window loop and a test drive it the same way.

pub mod config;
pub mod controller;
pub mod state;
pub mod view;

pub use config::CarouselConfig;
pub use controller::Carousel;
pub use state::{TimerId, normalize};
pub use view::{Navigation, SlideView};
