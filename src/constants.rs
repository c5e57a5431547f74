use std::time::Duration;

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000); // Time between automatic advances
pub const ENTER_DELAY: Duration = Duration::from_millis(10);             // Delay before a shown slide is marked entered

pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const FADE_DURATION: f32 = 0.5;           // Duration of the fade-in once a slide is entered (seconds)

pub const MOBILE_BREAKPOINT: u32 = 768;       // Widest viewport (px) that still uses the collapsed menu
