use raylib::prelude::*;

use crate::carousel::{Navigation, SlideView};
use crate::viewer::slide::PhotoSlide;

const BUTTON_SIZE: f32 = 56.0;
const BUTTON_MARGIN: f32 = 24.0;
const BUTTON_FONT_SIZE: i32 = 40;

/// Previous/next buttons at the left and right screen edges.
#[derive(Debug, Clone, Copy)]
pub struct Controls {
    pub prev: Rectangle,
    pub next: Rectangle,
}

impl Controls {
    pub fn layout(screen_width: f32, screen_height: f32) -> Self {
        let y = (screen_height - BUTTON_SIZE) * 0.5;
        Self {
            prev: Rectangle::new(BUTTON_MARGIN, y, BUTTON_SIZE, BUTTON_SIZE),
            next: Rectangle::new(screen_width - BUTTON_MARGIN - BUTTON_SIZE, y, BUTTON_SIZE, BUTTON_SIZE),
        }
    }

    pub fn hit(&self, point: Vector2) -> Option<Navigation> {
        if contains(&self.prev, point) {
            Some(Navigation::Previous)
        } else if contains(&self.next, point) {
            Some(Navigation::Next)
        } else {
            None
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        for (rect, label) in [(self.prev, "<"), (self.next, ">")] {
            d.draw_rectangle_rec(rect, Color::new(0, 0, 0, 140));
            // Default font glyphs are roughly half as wide as they are tall
            let text_width = BUTTON_FONT_SIZE as f32 * 0.5;
            d.draw_text(
                label,
                (rect.x + (rect.width - text_width) * 0.5) as i32,
                (rect.y + (rect.height - BUTTON_FONT_SIZE as f32) * 0.5) as i32,
                BUTTON_FONT_SIZE,
                Color::WHITE,
            );
        }
    }
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// The photos the carousel rotates through.
#[derive(Default)]
pub struct PhotoWall {
    pub slides: Vec<PhotoSlide>,
    controls_attached: bool,
}

impl PhotoWall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_image(&mut self, image: Texture2D) {
        self.slides.push(PhotoSlide::new(image));
    }

    /// Button click or arrow key pressed this frame.
    pub fn poll_navigation(&self, rl: &RaylibHandle) -> Option<Navigation> {
        if !self.controls_attached {
            return None;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            return Some(Navigation::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            return Some(Navigation::Previous);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let controls = Controls::layout(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            return controls.hit(rl.get_mouse_position());
        }
        None
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        for slide in self.slides.iter() {
            slide.draw(d, sw, sh);
        }
        if self.controls_attached {
            Controls::layout(sw, sh).draw(d);
        }
    }
}

impl SlideView for PhotoWall {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        self.slides[index].set_visible(visible);
    }

    fn set_entered(&mut self, index: usize, entered: bool) {
        self.slides[index].set_entered(entered);
    }

    fn attach_controls(&mut self) {
        self.controls_attached = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wall_has_no_slides_or_controls() {
        let wall = PhotoWall::default();
        assert_eq!(wall.slide_count(), 0);
        assert!(!wall.controls_attached);
    }

    #[test]
    fn controls_hit_the_screen_edges() {
        let controls = Controls::layout(1280.0, 720.0);
        assert_eq!(controls.hit(Vector2::new(50.0, 360.0)), Some(Navigation::Previous));
        assert_eq!(controls.hit(Vector2::new(1230.0, 360.0)), Some(Navigation::Next));
        assert_eq!(controls.hit(Vector2::new(640.0, 360.0)), None);
    }
}
