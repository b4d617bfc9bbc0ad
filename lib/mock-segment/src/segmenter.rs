use crate::{Category, Error, Result, SegmentConfig, mask, overlay};
use image::{GrayImage, RgbImage};

#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: SegmentConfig,
}

impl Segmenter {
    pub fn new(config: SegmentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// Produce the highlighted copy of `image` for `category`.
    pub fn transform(&self, image: &RgbImage, category: Category) -> Result<RgbImage> {
        let mask = self.mask(image, category)?;
        Ok(overlay::highlight(image, &mask, self.config.highlight))
    }

    /// Same as [`Segmenter::transform`] but takes a category label, e.g. `"POLYP"`.
    pub fn transform_by_name(&self, image: &RgbImage, name: &str) -> Result<RgbImage> {
        let category = name.parse::<Category>()?;
        self.transform(image, category)
    }

    pub(crate) fn mask(&self, image: &RgbImage, category: Category) -> Result<GrayImage> {
        ensure_valid(image)?;

        let gray = mask::luma(image);
        let mask = mask::generator(category)(&gray, &self.config);

        log::debug!(
            "{category} mask: {} of {} pixels selected",
            mask.pixels().filter(|p| p[0] != 0).count(),
            mask.len()
        );

        Ok(mask)
    }
}

/// Wrap a raw interleaved buffer, rejecting anything that is not 8-bit RGB.
pub fn rgb_from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<RgbImage> {
    if channels != 3 {
        return Err(Error::InvalidImage(format!(
            "expected 3 channels, got {channels}"
        )));
    }

    let expected = width as usize * height as usize * channels as usize;
    if data.len() != expected {
        return Err(Error::InvalidImage(format!(
            "buffer holds {} bytes, {width}x{height}x{channels} needs {expected}",
            data.len()
        )));
    }

    let image = RgbImage::from_raw(width, height, data)
        .ok_or_else(|| Error::InvalidImage("failed to wrap raw buffer".to_string()))?;

    ensure_valid(&image)?;
    Ok(image)
}

fn ensure_valid(image: &RgbImage) -> Result<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidImage(format!(
            "image must not be empty, got {width}x{height}"
        )));
    }

    Ok(())
}
