use crate::Result;
use image::{GrayImage, ImageFormat, Rgb, RgbImage, imageops};
use std::io::Cursor;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Copy `image` and paint every pixel selected by `mask` with `color`.
pub fn highlight(image: &RgbImage, mask: &GrayImage, color: [u8; 3]) -> RgbImage {
    debug_assert_eq!(image.dimensions(), mask.dimensions());

    let mut result = image.clone();
    for (pixel, selector) in result.pixels_mut().zip(mask.pixels()) {
        if selector[0] != 0 {
            *pixel = Rgb(color);
        }
    }

    result
}

/// Place `original` and `result` next to each other, separated by a white
/// gap of `gap` pixels. The shorter image is top aligned.
pub fn side_by_side(original: &RgbImage, result: &RgbImage, gap: u32) -> RgbImage {
    let width = original.width() + gap + result.width();
    let height = original.height().max(result.height());

    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);
    imageops::replace(&mut canvas, original, 0, 0);
    imageops::replace(&mut canvas, result, (original.width() + gap) as i64, 0);

    canvas
}

/// Encode an image as a PNG byte stream, ready to be downloaded or saved.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_highlight_only_touches_selected_pixels() {
        let image = RgbImage::from_fn(8, 8, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 7]));
        let mask = GrayImage::from_fn(8, 8, |x, y| Luma([if x == y { 255 } else { 0 }]));

        let result = highlight(&image, &mask, [255, 0, 0]);

        for (x, y, pixel) in result.enumerate_pixels() {
            if x == y {
                assert_eq!(*pixel, Rgb([255, 0, 0]));
            } else {
                assert_eq!(pixel, image.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_highlight_treats_any_nonzero_as_selected() {
        let image = RgbImage::from_pixel(3, 1, Rgb([1, 2, 3]));
        let mask = GrayImage::from_fn(3, 1, |x, _| Luma([x as u8]));

        let result = highlight(&image, &mask, [0, 0, 255]);

        assert_eq!(*result.get_pixel(0, 0), Rgb([1, 2, 3]));
        assert_eq!(*result.get_pixel(1, 0), Rgb([0, 0, 255]));
        assert_eq!(*result.get_pixel(2, 0), Rgb([0, 0, 255]));
    }

    #[test]
    fn test_side_by_side_layout() {
        let original = RgbImage::from_pixel(4, 3, Rgb([10, 10, 10]));
        let result = RgbImage::from_pixel(4, 5, Rgb([200, 0, 0]));

        let canvas = side_by_side(&original, &result, 2);

        assert_eq!(canvas.dimensions(), (10, 5));
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([10, 10, 10]));
        assert_eq!(*canvas.get_pixel(3, 2), Rgb([10, 10, 10]));
        assert_eq!(*canvas.get_pixel(0, 4), BACKGROUND);
        assert_eq!(*canvas.get_pixel(4, 0), BACKGROUND);
        assert_eq!(*canvas.get_pixel(5, 4), BACKGROUND);
        assert_eq!(*canvas.get_pixel(6, 0), Rgb([200, 0, 0]));
        assert_eq!(*canvas.get_pixel(9, 4), Rgb([200, 0, 0]));
    }

    #[test]
    fn test_encode_png() {
        let image = RgbImage::from_fn(5, 7, |x, y| Rgb([x as u8, y as u8, 99]));
        let bytes = encode_png(&image).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .unwrap()
            .to_rgb8();
        assert_eq!(decoded, image);
    }
}
