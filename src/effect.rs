use std::path::Path;

use image::{DynamicImage, GenericImageView, Rgba};
use log::{debug, info, warn};

use crate::errors::Result;
use crate::imageops::{blend, blend_images, region, Region};
use crate::io::{load_image, validate_input_path};
use crate::traits::ImageEffect;

/// Cross-fades a fixed overlay image onto every input.
pub struct OpacityBlend {
    overlay: DynamicImage,
    opacity: f32,
}

impl OpacityBlend {
    pub const fn new(overlay: DynamicImage, opacity: f32) -> Self {
        Self { overlay, opacity }
    }

    /// Load the overlay from disk. Fails the same way an input image would.
    pub fn from_path(path: &Path, opacity: f32) -> Result<Self> {
        validate_input_path("overlay", path)?;
        let overlay = load_image(path)?;
        Ok(Self::new(overlay, opacity))
    }
}

impl ImageEffect for OpacityBlend {
    fn name(&self) -> &str {
        "opacity blend"
    }

    fn apply(&self, img: &DynamicImage) -> Result<DynamicImage> {
        let base_dims = img.dimensions();
        let overlay_dims = self.overlay.dimensions();
        if base_dims != overlay_dims {
            let (width, height) = blend::common_bounds(base_dims, overlay_dims);
            warn!(
                "image is {}x{} but overlay is {}x{}, cropping result to {}x{}",
                base_dims.0, base_dims.1, overlay_dims.0, overlay_dims.1, width, height
            );
        }

        info!("attempting to merge image with overlay at opacity {}", self.opacity);
        Ok(blend_images(img, &self.overlay, self.opacity)?)
    }
}

/// Draws a coloured frame around each region.
///
/// Only draws; finding the regions is up to the caller.
#[derive(Debug, Clone)]
pub struct RegionHighlight {
    regions: Vec<Region>,
    color: Rgba<u8>,
    thickness: u32,
}

impl RegionHighlight {
    pub const DEFAULT_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
    pub const DEFAULT_THICKNESS: u32 = 5;

    pub fn new(regions: Vec<Region>) -> Self {
        Self {
            regions,
            color: Self::DEFAULT_COLOR,
            thickness: Self::DEFAULT_THICKNESS,
        }
    }

    pub fn with_color(mut self, color: Rgba<u8>) -> Self {
        self.color = color;
        self
    }

    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl ImageEffect for RegionHighlight {
    fn name(&self) -> &str {
        "region highlight"
    }

    fn apply(&self, img: &DynamicImage) -> Result<DynamicImage> {
        let mut canvas = img.to_rgba8();
        for r in &self.regions {
            debug!("highlighting {r:?}");
            let mask = region::frame_mask(canvas.dimensions(), r, self.thickness);
            region::fill_masked(&mut canvas, &mask, self.color)?;
        }
        Ok(DynamicImage::ImageRgba8(canvas))
    }
}
