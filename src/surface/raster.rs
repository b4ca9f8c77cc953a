use egui::{Pos2, Vec2};
use image::{Rgba, RgbaImage};

/// Fixed-size pixel buffer that strokes are burned into
#[derive(Debug, Clone)]
pub struct Raster {
    image: RgbaImage,
    background: Rgba<u8>,
}

impl Raster {
    pub fn new(size: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, background),
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Restore the uniform background
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = self.background;
        }
    }

    /// Ink every pixel whose center lies within `width / 2` of the segment,
    /// which gives round caps and joins between consecutive segments.
    pub fn draw_segment(&mut self, from: Pos2, to: Pos2, width: f32, ink: Rgba<u8>) {
        let radius = (width / 2.0).max(0.5);
        let (w, h) = self.image.dimensions();

        let clamp = |v: f32, limit: u32| v.max(0.0).min(limit as f32) as u32;
        let min_x = clamp((from.x.min(to.x) - radius).floor(), w);
        let max_x = clamp((from.x.max(to.x) + radius).ceil(), w);
        let min_y = clamp((from.y.min(to.y) - radius).floor(), h);
        let max_y = clamp((from.y.max(to.y) + radius).ceil(), h);

        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(center, from, to) <= radius {
                    self.image.put_pixel(x, y, ink);
                }
            }
        }
    }
}

fn distance_to_segment(point: Pos2, from: Pos2, to: Pos2) -> f32 {
    let segment: Vec2 = to - from;
    let length_sq = segment.length_sq();
    if length_sq == 0.0 {
        return (point - from).length();
    }
    let t = ((point - from).dot(segment) / length_sq).clamp(0.0, 1.0);
    (point - (from + segment * t)).length()
}
