use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use exif::{In, Reader, Tag, Value};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Failed to read directory {path:?}: {source}")]
    ReadDir { path: PathBuf, source: std::io::Error },
    #[error("No image files found in directory: {0:?}")]
    Empty(PathBuf),
}

/// How a photo has to be turned to display upright.
///
/// Only the pure rotations are honoured; mirrored EXIF orientations are shown
/// as stored.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Orientation {
    Normal,
    Rotate180,
    Rotate90Cw,
    Rotate90Ccw,
}

impl Orientation {
    pub fn from_exif(value: u16) -> Self {
        match value {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate90Cw,
            8 => Orientation::Rotate90Ccw,
            _ => Orientation::Normal,
        }
    }
}

pub fn is_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => matches!(
            ext.to_lowercase().as_str(),
            "png" | "jpg" | "jpeg" | "bmp" | "gif"
        ),
        None => false,
    }
}

/// Image files directly inside `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>, GalleryError> {
    let read_err = |source| GalleryError::ReadDir { path: dir.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(GalleryError::Empty(dir.to_path_buf()));
    }
    debug!(count = paths.len(), dir = ?dir, "Found images");
    Ok(paths)
}

/// Orientation recorded in the EXIF block of a JPEG file.
///
/// Anything without readable EXIF data is treated as upright.
pub fn read_orientation(file_bytes: &[u8]) -> Orientation {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            warn!("Could not read EXIF data: {}", e);
            return Orientation::Normal;
        }
    };

    match exif.get_field(Tag::Orientation, In::PRIMARY).map(|field| &field.value) {
        Some(Value::Short(values)) if !values.is_empty() => Orientation::from_exif(values[0]),
        _ => Orientation::Normal,
    }
}

/// EXIF is only looked for in JPEG files.
pub fn orientation_for(path: &Path, file_bytes: &[u8]) -> Orientation {
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    if extension == "jpg" || extension == "jpeg" {
        read_orientation(file_bytes)
    } else {
        Orientation::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_images_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.JPG", "a.png", "notes.txt", "c.gif", "noext"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("d.jpg")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.gif"]);
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), b"x").unwrap();
        assert!(matches!(load_sorted_image_paths(dir.path()), Err(GalleryError::Empty(_))));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(load_sorted_image_paths(&missing), Err(GalleryError::ReadDir { .. })));
    }

    #[test]
    fn exif_orientation_codes() {
        assert_eq!(Orientation::from_exif(1), Orientation::Normal);
        assert_eq!(Orientation::from_exif(3), Orientation::Rotate180);
        assert_eq!(Orientation::from_exif(6), Orientation::Rotate90Cw);
        assert_eq!(Orientation::from_exif(8), Orientation::Rotate90Ccw);
        assert_eq!(Orientation::from_exif(2), Orientation::Normal);
    }

    #[test]
    fn garbage_bytes_are_upright() {
        assert_eq!(read_orientation(b"not a jpeg"), Orientation::Normal);
        assert_eq!(orientation_for(Path::new("x.png"), b"whatever"), Orientation::Normal);
    }
}
