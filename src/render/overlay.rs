//! Optional overlay ("trap") image decoding.
//!
//! Decoding is kept free of GPU types so it can fail gracefully before
//! any texture exists; the renderer uploads the result. Load failure is
//! non-fatal: the viewer runs without an overlay.

use std::path::Path;

use image::RgbaImage;
use image::imageops::FilterType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("failed to load overlay image: {0}")]
    Image(#[from] image::ImageError),
}

/// A decoded overlay image with its full mip chain, level 0 first.
pub struct OverlayImage {
    mip_levels: Vec<RgbaImage>,
}

/// Decodes the image at `path`, flipped vertically to match the quad's
/// texture-coordinate orientation.
pub fn decode_overlay_image(path: &Path) -> Result<OverlayImage, OverlayError> {
    Ok(OverlayImage::from_dynamic(image::open(path)?))
}

impl OverlayImage {
    #[must_use]
    pub fn from_dynamic(image: image::DynamicImage) -> Self {
        Self {
            mip_levels: build_mip_chain(image.flipv().to_rgba8()),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.mip_levels[0].width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.mip_levels[0].height()
    }

    #[must_use]
    pub fn mip_level_count(&self) -> u32 {
        self.mip_levels.len() as u32
    }

    #[must_use]
    pub fn mip_levels(&self) -> &[RgbaImage] {
        &self.mip_levels
    }
}

/// Downsamples level by level until 1x1, halving each dimension and
/// clamping at 1 so non-square images converge.
fn build_mip_chain(base: RgbaImage) -> Vec<RgbaImage> {
    let mut levels = vec![base];

    loop {
        let last = levels.last().expect("chain starts with the base level");
        let (width, height) = (last.width(), last.height());
        if width <= 1 && height <= 1 {
            break;
        }

        let next_width = (width / 2).max(1);
        let next_height = (height / 2).max(1);
        levels.push(image::imageops::resize(
            last,
            next_width,
            next_height,
            FilterType::Triangle,
        ));
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba};

    #[test]
    fn nonexistent_path_reports_a_decode_error() {
        let result = decode_overlay_image(Path::new("no/such/overlay.png"));

        assert!(result.is_err());
    }

    #[test]
    fn decoding_flips_the_image_vertically() {
        let mut base = RgbaImage::new(1, 2);
        base.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        base.put_pixel(0, 1, Rgba([0, 0, 255, 255]));

        let overlay = OverlayImage::from_dynamic(DynamicImage::ImageRgba8(base));

        let flipped = &overlay.mip_levels()[0];
        assert_eq!(flipped.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(flipped.get_pixel(0, 1), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn mip_chain_halves_down_to_one_pixel() {
        let base = DynamicImage::ImageRgba8(RgbaImage::new(8, 8));

        let overlay = OverlayImage::from_dynamic(base);

        assert_eq!(overlay.mip_level_count(), 4);
        let dimensions: Vec<(u32, u32)> = overlay
            .mip_levels()
            .iter()
            .map(|level| (level.width(), level.height()))
            .collect();
        assert_eq!(dimensions, [(8, 8), (4, 4), (2, 2), (1, 1)]);
    }

    #[test]
    fn non_square_mip_chain_clamps_the_short_side() {
        let base = DynamicImage::ImageRgba8(RgbaImage::new(8, 2));

        let overlay = OverlayImage::from_dynamic(base);

        let dimensions: Vec<(u32, u32)> = overlay
            .mip_levels()
            .iter()
            .map(|level| (level.width(), level.height()))
            .collect();
        assert_eq!(dimensions, [(8, 2), (4, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn single_pixel_image_has_one_level() {
        let base = DynamicImage::ImageRgba8(RgbaImage::new(1, 1));

        let overlay = OverlayImage::from_dynamic(base);

        assert_eq!(overlay.mip_level_count(), 1);
    }
}
