use anyhow::{ensure, Result};
use image::{DynamicImage, ImageBuffer, Pixel, Primitive, Rgba};
use num_traits::AsPrimitive;

use crate::imageops::{get_max_value, is_floating_point};

/// Linear cross-fade of `overlay` onto `base`:
/// `out = base * (1 - amount) + overlay * amount`, per channel including alpha.
///
/// The result covers the region both images share, anchored at the origin.
/// Integer channels are rounded to nearest and clamped to the channel range.
pub fn opacity<S>(
    base: &ImageBuffer<Rgba<S>, Vec<S>>,
    overlay: &ImageBuffer<Rgba<S>, Vec<S>>,
    amount: f32,
) -> Result<ImageBuffer<Rgba<S>, Vec<S>>>
where
    Rgba<S>: Pixel<Subpixel = S>,
    S: Primitive + AsPrimitive<f32> + 'static,
    f32: AsPrimitive<S>,
{
    ensure!(
        (0.0..=1.0).contains(&amount),
        "Opacity must be within 0.0..=1.0, got {amount}"
    );

    let (width, height) = common_bounds(base.dimensions(), overlay.dimensions());
    let max: f32 = get_max_value::<S>().as_();
    let integral = !is_floating_point::<S>();

    let mix = |b: S, o: S| -> S {
        let value = b.as_() * (1.0 - amount) + o.as_() * amount;
        if integral {
            value.round().clamp(0.0, max).as_()
        } else {
            value.as_()
        }
    };

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        base.get_pixel(x, y).map2(overlay.get_pixel(x, y), mix)
    }))
}

/// Blend two decoded images at whatever precision the wider of the two needs.
///
/// Float inputs blend in `Rgba32F`, 16-bit inputs in `Rgba16`, everything
/// else in `Rgba8`.
pub fn blend_images(
    base: &DynamicImage,
    overlay: &DynamicImage,
    amount: f32,
) -> Result<DynamicImage> {
    let depth = channel_depth(base).max(channel_depth(overlay));

    let blended = match depth {
        4.. => DynamicImage::ImageRgba32F(opacity(
            &base.to_rgba32f(),
            &overlay.to_rgba32f(),
            amount,
        )?),
        2..=3 => DynamicImage::ImageRgba16(opacity(
            &base.to_rgba16(),
            &overlay.to_rgba16(),
            amount,
        )?),
        _ => DynamicImage::ImageRgba8(opacity(&base.to_rgba8(), &overlay.to_rgba8(), amount)?),
    };

    Ok(blended)
}

/// Width and height of the region shared by two images placed at the origin.
pub fn common_bounds(a: (u32, u32), b: (u32, u32)) -> (u32, u32) {
    (a.0.min(b.0), a.1.min(b.1))
}

/// Bytes per channel of the image's native colour type.
fn channel_depth(image: &DynamicImage) -> u8 {
    let color = image.color();
    color.bytes_per_pixel() / color.channel_count().max(1)
}
