pub mod category;
pub mod config;
mod mask;
pub mod overlay;
pub mod segmenter;

pub use category::Category;
pub use config::SegmentConfig;
pub use overlay::{encode_png, side_by_side};
pub use segmenter::{Segmenter, rgb_from_raw};

use image::RgbImage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unsupported category: {0}")]
    UnsupportedCategory(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Run the mock segmentation for `category` with the default recipe.
///
/// The input is never modified; the returned image has the same dimensions
/// with the selected region painted red.
pub fn transform(image: &RgbImage, category: Category) -> Result<RgbImage> {
    Segmenter::default().transform(image, category)
}
