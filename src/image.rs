use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Bytes per pixel in a raw dump: red, green, blue, alpha.
pub const RGBA_CHANNELS: usize = 4;

/// Length in bytes of a raw dump for a `size`x`size` icon.
pub fn raw_len(size: u32) -> usize {
    size as usize * size as usize * RGBA_CHANNELS
}

/// Decodes the bitmap at `path`, converting whatever channel layout it has
/// (RGB, grayscale, indexed, 16-bit) into 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Decoded {} as {}x{} {:?}",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.to_rgba8())
}

/// Returns `img` at exactly `size`x`size`. An image that already has those
/// dimensions is handed back untouched, anything else goes through Lanczos3
/// without keeping the aspect ratio.
///
/// Resampling happens on premultiplied alpha so the color of fully
/// transparent pixels never bleeds into visible edges.
pub fn fit_square(img: RgbaImage, size: u32) -> RgbaImage {
    if img.dimensions() == (size, size) {
        return img;
    }

    debug!(
        "Resizing {}x{} to {size}x{size}",
        img.width(),
        img.height()
    );
    let resized = imageops::resize(&premultiply(&img), size, size, FilterType::Lanczos3);
    unpremultiply(&resized)
}

fn premultiply(img: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

fn unpremultiply(img: &Rgba32FImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let alpha = to_channel(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        let a = a.min(1.0);
        Rgba([to_channel(r / a), to_channel(g / a), to_channel(b / a), alpha])
    })
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Row-major pixel bytes, RGBA order, no header.
pub fn to_raw_rgba(img: &RgbaImage) -> Vec<u8> {
    img.as_raw().clone()
}

/// Reads a raw dump back into an image, the way the icon consumer embeds it
/// as a fixed `size * size * 4` array.
///
/// Handy for checking a freshly written asset before it gets baked in:
///
/// ```no_run
/// use std::path::Path;
/// use icon_rasterizer::image::read_raw_rgba;
///
/// let icon = read_raw_rgba(Path::new("assets/icon/muse16.bin"), 16)?;
/// assert_eq!(icon.dimensions(), (16, 16));
/// # Ok::<(), icon_rasterizer::error::Error>(())
/// ```
pub fn read_raw_rgba(path: &Path, size: u32) -> Result<RgbaImage> {
    let data = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let expected = raw_len(size);
    let actual = data.len();

    RgbaImage::from_raw(size, size, data)
        .filter(|_| actual == expected)
        .ok_or_else(|| Error::LengthMismatch {
            path: path.to_path_buf(),
            expected,
            actual,
        })
}
