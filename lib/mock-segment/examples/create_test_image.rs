use image::{Rgb, RgbImage};

fn main() {
    // 640x480 gradient with a darker disc, enough structure for every category
    let mut img = RgbImage::new(640, 480);

    for y in 0..480 {
        for x in 0..640 {
            let (dx, dy) = (x as i32 - 400, y as i32 - 220);
            let shade = if dx * dx + dy * dy < 90 * 90 { 3 } else { 1 };

            let r = (x * 255 / 640 / shade) as u8;
            let g = (y * 255 / 480 / shade) as u8;
            let b = ((x + y) * 255 / 1120) as u8;
            img.put_pixel(x, y, Rgb([r, g, b]));
        }
    }

    std::fs::create_dir_all("data").unwrap();
    img.save("data/test.png").unwrap();
    println!("Created data/test.png");
}
