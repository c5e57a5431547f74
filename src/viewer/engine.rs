use std::path::PathBuf;
use std::time::Duration;
use raylib::prelude::*;
use tracing::warn;

use crate::carousel::{Carousel, CarouselConfig};
use crate::viewer::texture_loader::load_texture_with_exif_rotation;
use crate::viewer::wall::PhotoWall;

pub trait Engine {
    fn new(config: CarouselConfig) -> Self;
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> bool;
    fn frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool;
    fn shutdown(&mut self);
}

pub struct CarouselEngine {
    config: CarouselConfig,
    carousel: Option<Carousel<PhotoWall>>,
}

impl Engine for CarouselEngine {
    fn new(config: CarouselConfig) -> Self {
        Self { config, carousel: None }
    }

    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> bool {
        let mut wall = PhotoWall::new();
        for path in paths {
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(image) => wall.add_image(image),
                Err(e) => warn!("Failed to load image: {:#}", e),
            }
        }

        let carousel = Carousel::mount(wall, self.config);
        let active = carousel.is_active();
        self.carousel = Some(carousel);
        active
    }

    fn frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool {
        let Some(carousel) = self.carousel.as_mut().filter(|c| c.is_active()) else {
            return false;
        };

        if let Some(navigation) = carousel.view().poll_navigation(rl) {
            carousel.navigate(navigation);
        }
        carousel.update(Duration::from_secs_f32(dt));
        carousel.view_mut().update(dt);

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);
        carousel.view().draw(&mut d);

        true
    }

    fn shutdown(&mut self) {
        if let Some(mut carousel) = self.carousel.take() {
            carousel.teardown();
        }
    }
}
