//! Output directory handling, file naming, and PNG saving.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::TemplateError;
use crate::template::sanitize_name;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "templates";

/// Filename of the original variant: `<name>.png`.
#[must_use]
pub fn template_filename(name: &str) -> String {
    format!("{}.png", sanitize_name(name))
}

/// Filename of the rotated variant: `<name>_rotated.png`.
#[must_use]
pub fn rotated_filename(name: &str) -> String {
    format!("{}_rotated.png", sanitize_name(name))
}

/// Create the output directory if it does not exist.
///
/// Re-running against an existing directory is not an error.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<(), TemplateError> {
    std::fs::create_dir_all(dir).map_err(TemplateError::Io)
}

/// Save a raster as PNG at `dir/<filename>` and return the full path.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn save_png(image: &RgbImage, dir: &Path, filename: &str) -> Result<PathBuf, TemplateError> {
    let path = dir.join(filename);
    image.save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_from_name() {
        assert_eq!(template_filename("logo_pecho"), "logo_pecho.png");
        assert_eq!(rotated_filename("logo_pecho"), "logo_pecho_rotated.png");
    }

    #[test]
    fn filenames_sanitize() {
        assert_eq!(template_filename("My Logo!"), "my-logo.png");
    }

    #[test]
    fn ensure_output_dir_is_idempotent() {
        let dir = std::env::temp_dir().join("logogen_output_dir_test");
        let _ = std::fs::remove_dir_all(&dir);

        ensure_output_dir(&dir).unwrap();
        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_png_writes_decodable_file() {
        let dir = std::env::temp_dir().join("logogen_save_png_test");
        std::fs::create_dir_all(&dir).unwrap();

        let image = RgbImage::from_pixel(8, 8, image::Rgb([1, 2, 3]));
        let path = save_png(&image, &dir, "tiny.png").unwrap();

        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(reloaded.dimensions(), (8, 8));
        assert_eq!(*reloaded.get_pixel(0, 0), image::Rgb([1, 2, 3]));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
