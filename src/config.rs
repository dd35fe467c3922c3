use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use std::path::PathBuf;

use crate::errors::{CaptureError, Result};

/// Overlay location the tool originally shipped with. Only used when neither
/// `--overlay` nor `CAPTURE_OVERLAY` is given.
pub const DEFAULT_OVERLAY_PATH: &str = "/Users/roryjacob/develop/photo-manipulation/ghost2.jpg";

/// Opacity of the overlay in the blend. Fixed; not exposed on the command line.
pub const BLEND_OPACITY: f32 = 0.5;

#[derive(Parser, Clone, Debug)]
#[command(name = "capture", version, about = "Blend a photo with a ghost overlay", long_about = None)]
pub struct Config {
    /// the full file path for the image
    #[arg(short = 'f', long = "filePath", value_parser = path_value())]
    pub file_path: PathBuf,

    /// the name of the output file (always written as PNG)
    #[arg(short = 'o', long = "outputFile", value_parser = path_value())]
    pub output_file: PathBuf,

    /// image blended over the input
    #[arg(
        long,
        env = "CAPTURE_OVERLAY",
        default_value = DEFAULT_OVERLAY_PATH,
        value_parser = path_value()
    )]
    pub overlay: PathBuf,
}

impl Config {
    pub fn new(
        file_path: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
        overlay: impl Into<PathBuf>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            output_file: output_file.into(),
            overlay: overlay.into(),
        }
    }

    /// 空のオプションを拒否する（パーサーは空文字列をそのまま通す）
    pub fn validate(&self) -> Result<()> {
        if self.file_path.as_os_str().is_empty() {
            return Err(CaptureError::validation(
                "filePath",
                "was empty. Must be a valid filepath",
            ));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(CaptureError::validation(
                "outputFile",
                "was empty. Must be a valid name",
            ));
        }
        if self.overlay.as_os_str().is_empty() {
            return Err(CaptureError::validation(
                "overlay",
                "was empty. Must be a valid filepath",
            ));
        }
        Ok(())
    }
}

/// Like clap's `PathBuf` parser but lets empty values through, so they end up
/// as a `Validation` error from [`Config::validate`] instead of a usage error.
fn path_value() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}
