use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use log::{debug, info};

use crate::errors::{CaptureError, Result};

/// Check that `path` names an existing regular file.
///
/// `field` is the option name reported back in validation errors.
pub fn validate_input_path(field: &str, path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| CaptureError::from_io(path, "stat", e))?;
    if metadata.is_dir() {
        return Err(CaptureError::validation(
            field,
            format!("the path '{}' is a directory, not a file", path.display()),
        ));
    }

    Ok(())
}

/// Decode the image at `path`. The container format is sniffed from the
/// file's magic bytes; the extension is never consulted.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    info!("loading file '{}'", path.display());
    let file = File::open(path).map_err(|e| CaptureError::from_io(path, "open", e))?;
    info!("loading the file was successful");

    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| CaptureError::from_io(path, "read", e))?;
    debug!("detected format {:?} for '{}'", reader.format(), path.display());

    let image = reader.decode().map_err(|source| CaptureError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "decoded '{}': {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image)
}

/// Encode `image` as PNG at `path`, creating or truncating the file.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    // PNG has no float samples
    let image = match image {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16()))
        }
        _ => Cow::Borrowed(image),
    };

    let file = File::create(path).map_err(|source| CaptureError::FileSystem {
        path: path.to_path_buf(),
        operation: "create output file".to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|source| CaptureError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|source| CaptureError::FileSystem {
        path: path.to_path_buf(),
        operation: "flush output file".to_string(),
        source,
    })?;

    Ok(())
}
