use anyhow::{ensure, Result};
use image::{GrayImage, ImageBuffer, Luma, Pixel};

/// Axis-aligned rectangle in pixel coordinates. May extend past the image;
/// everything outside the image is ignored when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region covering the whole image shrunk by `margin` on every side.
    pub fn inside_margin(dimensions: (u32, u32), margin: u32) -> Option<Self> {
        Self::new(0, 0, dimensions.0, dimensions.1).inset(margin)
    }

    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x.saturating_add(self.width)
            && y < self.y.saturating_add(self.height)
    }

    /// Shrink by `by` pixels on every side. `None` once nothing is left.
    pub fn inset(&self, by: u32) -> Option<Self> {
        let width = self.width.checked_sub(by.checked_mul(2)?)?;
        let height = self.height.checked_sub(by.checked_mul(2)?)?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self::new(
            self.x.saturating_add(by),
            self.y.saturating_add(by),
            width,
            height,
        ))
    }
}

/// Mask that is set on the border band of `region`: the region minus the
/// region inset by `thickness`.
pub fn frame_mask(dimensions: (u32, u32), region: &Region, thickness: u32) -> GrayImage {
    let (width, height) = dimensions;
    let inner = region.inset(thickness);

    ImageBuffer::from_fn(width, height, |x, y| {
        let on_frame = region.contains(x, y) && !inner.is_some_and(|inner| inner.contains(x, y));
        if on_frame {
            Luma([u8::MAX])
        } else {
            Luma([0])
        }
    })
}

/// Paint `color` onto every pixel where `mask` is non-zero.
pub fn fill_masked<P>(
    image: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    mask: &GrayImage,
    color: P,
) -> Result<()>
where
    P: Pixel,
{
    ensure!(
        image.dimensions() == mask.dimensions(),
        "Image and mask dimensions do not match"
    );

    image
        .pixels_mut()
        .zip(mask.pixels())
        .filter(|(_, Luma([m]))| *m > 0)
        .for_each(|(pixel, _)| *pixel = color);

    Ok(())
}
