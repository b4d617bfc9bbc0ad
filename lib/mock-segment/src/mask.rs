use crate::{Category, SegmentConfig};
use image::{GrayImage, Luma, RgbImage};
use imageproc::{
    distance_transform::Norm,
    edges::canny,
    morphology::{dilate, erode},
    stats::histogram,
};

pub(crate) type MaskFn = fn(&GrayImage, &SegmentConfig) -> GrayImage;

// Indexed by the category discriminant.
const MASK_GENERATORS: [MaskFn; Category::COUNT] = [salient, camouflaged, polyp, breast_lesion];

const FOREGROUND: Luma<u8> = Luma([255]);

pub(crate) fn generator(category: Category) -> MaskFn {
    MASK_GENERATORS[u8::from(category) as usize]
}

/// BT.601 luma in 14-bit fixed point with rounding.
pub(crate) fn luma(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        let (r, g, b) = (pixel[0] as u32, pixel[1] as u32, pixel[2] as u32);
        Luma([((4899 * r + 9617 * g + 1868 * b + 8192) >> 14) as u8])
    })
}

/// Filled circle in drawing coordinates: `center.0` is the column, `center.1` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Circle {
    pub center: (i64, i64),
    pub radius: i64,
}

impl Circle {
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let (dx, dy) = (x - self.center.0, y - self.center.1);
        dx * dx + dy * dy <= self.radius * self.radius
    }

    fn fill(&self, mask: &mut GrayImage) {
        let (width, height) = (mask.width() as i64, mask.height() as i64);
        let (cx, cy) = self.center;

        for y in (cy - self.radius).max(0)..=(cy + self.radius).min(height - 1) {
            for x in (cx - self.radius).max(0)..=(cx + self.radius).min(width - 1) {
                if self.contains(x, y) {
                    mask.put_pixel(x as u32, y as u32, FOREGROUND);
                }
            }
        }
    }
}

/// Circles drawn for the shape based categories. The center pairs are
/// built from (height, width) but used as (column, row), which is what the
/// demo has always rendered.
pub(crate) fn circles(category: Category, width: u32, height: u32) -> Vec<Circle> {
    let (h, w) = (height as i64, width as i64);

    match category {
        Category::Polyp => vec![Circle {
            center: (h / 2, w / 2),
            radius: h.min(w) / 4,
        }],
        Category::BreastLesion => (0..3)
            .map(|i| Circle {
                center: (h / 4 + i * (h / 4), w / 4 + i * (w / 4)),
                radius: h.min(w) / 8,
            })
            .collect(),
        Category::Salient | Category::Camouflaged => vec![],
    }
}

// imageproc's canny blurs with sigma 1.4 and uses the L2 gradient, so these
// thresholds select fewer edges than the same values in OpenCV.
fn salient(gray: &GrayImage, config: &SegmentConfig) -> GrayImage {
    let edges = canny(gray, config.canny_low, config.canny_high);
    dilate(&edges, Norm::LInf, config.dilate_kernel / 2)
}

fn camouflaged(gray: &GrayImage, config: &SegmentConfig) -> GrayImage {
    let counts = histogram(gray).channels[0].map(u64::from);
    let level = otsu_level(&counts);

    let mut binary = gray.clone();
    for pixel in binary.pixels_mut() {
        pixel[0] = if pixel[0] > level { 255 } else { 0 };
    }

    erode(&binary, Norm::LInf, config.erode_kernel / 2)
}

/// Otsu level over a luma histogram. Sums are kept in `u64`/`f64` so very
/// large images cannot overflow. The first level with the largest between
/// class variance wins; a single populated bin gives 0.
pub(crate) fn otsu_level(counts: &[u64; 256]) -> u8 {
    let total_weight = counts.iter().sum::<u64>();
    let total_sum = counts
        .iter()
        .enumerate()
        .fold(0f64, |sum, (t, &h)| sum + t as f64 * h as f64);

    let mut background_weight = 0u64;
    let mut background_sum = 0f64;
    let mut largest_variance = 0f64;
    let mut best = 0u8;

    for (level, &count) in counts.iter().enumerate() {
        background_weight += count;
        if background_weight == 0 {
            continue;
        }

        let foreground_weight = total_weight - background_weight;
        if foreground_weight == 0 {
            break;
        }

        background_sum += level as f64 * count as f64;
        let background_mean = background_sum / background_weight as f64;
        let foreground_mean = (total_sum - background_sum) / foreground_weight as f64;

        let variance = background_weight as f64
            * foreground_weight as f64
            * (background_mean - foreground_mean).powi(2);

        if variance > largest_variance {
            largest_variance = variance;
            best = level as u8;
        }
    }

    best
}

fn polyp(gray: &GrayImage, _config: &SegmentConfig) -> GrayImage {
    draw_circles(gray, Category::Polyp)
}

fn breast_lesion(gray: &GrayImage, _config: &SegmentConfig) -> GrayImage {
    draw_circles(gray, Category::BreastLesion)
}

fn draw_circles(gray: &GrayImage, category: Category) -> GrayImage {
    let (width, height) = gray.dimensions();
    let mut mask = GrayImage::new(width, height);

    for circle in circles(category, width, height) {
        circle.fill(&mut mask);
    }

    mask
}
