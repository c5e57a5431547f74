use raylib::prelude::*;
use crate::constants::*;

/// One photo of the wall.
pub struct PhotoSlide {
    image: Texture2D,

    pub visible: bool,
    pub entered: bool,

    opacity: f32,
}

impl PhotoSlide {
    pub fn new(image: Texture2D) -> Self {
        Self {
            image,
            visible: false,
            entered: false,
            opacity: 0.0,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.opacity = 0.0;
        }
    }

    /// Clearing the marker rewinds the fade so the next entry starts from black.
    pub fn set_entered(&mut self, entered: bool) {
        self.entered = entered;
        if !entered {
            self.opacity = 0.0;
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.visible && self.entered && self.opacity < 1.0 {
            self.opacity = (self.opacity + dt / FADE_DURATION).min(1.0);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen_width: f32, screen_height: f32) {
        if !self.visible || self.opacity <= 0.0 {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        // Scale too big images to fit the screen
        let scale = (screen_width * 0.9 / tex_width)
            .min(screen_height * 0.9 / tex_height)
            .min(1.0);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height), // Source rect uses original texture size
            Rectangle::new(
                (screen_width - scaled_width) * 0.5,
                (screen_height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (self.opacity * 255.0) as u8),
        );
    }
}
