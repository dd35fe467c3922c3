pub mod config;
pub mod effect;
pub mod errors;
pub mod imageops;
pub mod io;
pub mod traits;

pub mod mocks;

use std::path::Path;

use image::DynamicImage;
use log::info;

pub use config::{Config, BLEND_OPACITY, DEFAULT_OVERLAY_PATH};
pub use effect::{OpacityBlend, RegionHighlight};
pub use errors::{CaptureError, Result};
pub use imageops::Region;
pub use traits::*;

#[cfg(test)]
pub use mocks::*;

/// Runs one effect over a single image and writes the result as PNG.
pub struct ImageProcessor<E: ImageEffect> {
    effect: E,
}

impl<E: ImageEffect> ImageProcessor<E> {
    pub const fn new(effect: E) -> Self {
        Self { effect }
    }

    /// Check and decode `input`, apply the effect, write to `output`.
    pub fn process(&self, input: &Path, output: &Path) -> Result<()> {
        io::validate_input_path("filePath", input)?;
        let image = io::load_image(input)?;
        self.process_image(&image, output)
    }

    /// Apply the effect to an already decoded image and write the result.
    ///
    /// `output` is only touched once the effect has succeeded.
    pub fn process_image(&self, image: &DynamicImage, output: &Path) -> Result<()> {
        info!("applying {}", self.effect.name());
        let result = self.effect.apply(image)?;

        info!(
            "writing {}x{} PNG to '{}'",
            result.width(),
            result.height(),
            output.display()
        );
        io::save_png(&result, output)
    }
}

/// Full command-line pipeline: validate, load input, load overlay, blend, write.
pub fn run(config: &Config) -> Result<()> {
    info!("starting image processing!");
    config.validate()?;

    info!("input file path {}", config.file_path.display());
    info!("output file {}", config.output_file.display());
    info!("overlay {}", config.overlay.display());

    io::validate_input_path("filePath", &config.file_path)?;
    let image = io::load_image(&config.file_path)?;

    let blend = OpacityBlend::from_path(&config.overlay, BLEND_OPACITY)?;
    ImageProcessor::new(blend).process_image(&image, &config.output_file)?;

    info!("finished writing {}", config.output_file.display());
    Ok(())
}
