use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::debug;

use crate::gallery::{orientation_for, Orientation};

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {:?}", image_path))?;

    let orientation = orientation_for(image_path, &file_bytes);

    // Extension hint for loading from memory
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("Failed to load image data for {:?}: {}", image_path, e))?;

    match orientation {
        Orientation::Rotate180 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Orientation::Rotate90Cw => image.rotate_cw(),
        Orientation::Rotate90Ccw => image.rotate_ccw(),
        Orientation::Normal => {}
    }
    debug!(path = ?image_path, ?orientation, "Loaded photo");

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("Failed to create texture for {:?}: {}", image_path, e))?;

    // CPU copy is no longer needed once uploaded
    drop(image);

    Ok(texture)
}
