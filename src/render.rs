//! Shape rasterization, noise, and rotation.

use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut,
    draw_polygon_mut,
};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};
use imageproc::point::Point;
use imageproc::rect::Rect;
use rand::Rng;

use crate::template::{ShapeKind, TemplateSpec};
use crate::text;

/// Peak magnitude of the per-channel noise added by [`synthesize`].
pub const NOISE_AMPLITUDE: i16 = 10;

/// Rotation angle of the second output variant, in degrees.
pub const DEFAULT_ANGLE: f32 = 15.0;

/// Label color (gray).
const LABEL_COLOR: Rgb<u8> = Rgb([128, 128, 128]);

/// Render a template without noise: background fill, centered shape with
/// its decorative pattern, then the bottom label.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn render(spec: &TemplateSpec) -> RgbImage {
    let (w, h) = (spec.width, spec.height);
    let mut image = RgbImage::from_pixel(w, h, spec.background.to_rgb());

    let cx = (w / 2) as i32;
    let cy = (h / 2) as i32;
    let fg = spec.color.to_rgb();
    let bg = spec.background.to_rgb();

    match spec.shape {
        ShapeKind::Circle => {
            let radius = (w.min(h) / 4) as i32;
            draw_filled_circle_mut(&mut image, (cx, cy), radius, fg);

            // Pierce the disc along the horizontal center line.
            let hole = (radius / 4).max(1);
            for offset in [-1, 0, 1] {
                draw_filled_circle_mut(&mut image, (cx + offset * radius / 2, cy), hole, bg);
            }
        }
        ShapeKind::Square => {
            let side = w.min(h) / 3;
            let outer = Rect::at(cx - (side / 2) as i32, cy - (side / 2) as i32).of_size(side, side);
            draw_filled_rect_mut(&mut image, outer, fg);

            let inset = side / 4;
            hollow_rect_2px(
                &mut image,
                outer.left() + inset as i32,
                outer.top() + inset as i32,
                side - 2 * inset,
                bg,
            );
        }
        ShapeKind::Triangle => {
            let apex = Point::new(cx, cy - (h / 3) as i32);
            let left = Point::new(cx - (w / 3) as i32, cy + (h / 4) as i32);
            let right = Point::new(cx + (w / 3) as i32, cy + (h / 4) as i32);
            draw_polygon_mut(&mut image, &[apex, right, left], fg);

            for (a, b) in [(apex, left), (left, right), (right, apex)] {
                stroke_edge_2px(&mut image, a, b, bg);
            }
        }
    }

    text::draw_label(&mut image, &spec.name, LABEL_COLOR);
    image
}

/// Unfilled rectangle with a 2px stroke: two nested 1px hollow rects.
fn hollow_rect_2px(image: &mut RgbImage, x: i32, y: i32, side: u32, color: Rgb<u8>) {
    draw_hollow_rect_mut(image, Rect::at(x, y).of_size(side, side), color);
    if side > 2 {
        draw_hollow_rect_mut(image, Rect::at(x + 1, y + 1).of_size(side - 2, side - 2), color);
    }
}

/// A line segment thickened to roughly 2px by offset passes.
#[allow(clippy::cast_precision_loss)]
fn stroke_edge_2px(image: &mut RgbImage, a: Point<i32>, b: Point<i32>, color: Rgb<u8>) {
    let (ax, ay) = (a.x as f32, a.y as f32);
    let (bx, by) = (b.x as f32, b.y as f32);
    draw_line_segment_mut(image, (ax, ay), (bx, by), color);
    draw_line_segment_mut(image, (ax + 1.0, ay), (bx + 1.0, by), color);
    draw_line_segment_mut(image, (ax, ay + 1.0), (bx, by + 1.0), color);
}

/// Add independent uniform integer noise in `[-amplitude, +amplitude]` to
/// every channel of every pixel, clamped to the valid 8-bit range.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn add_noise<R: Rng>(image: &mut RgbImage, amplitude: i16, rng: &mut R) {
    if amplitude == 0 {
        return;
    }
    for pixel in image.pixels_mut() {
        for channel in &mut pixel.0 {
            let noisy = i16::from(*channel) + rng.gen_range(-amplitude..=amplitude);
            *channel = noisy.clamp(0, 255) as u8;
        }
    }
}

/// Fully render a template: [`render`] plus default-amplitude noise.
#[must_use]
pub fn synthesize(spec: &TemplateSpec) -> RgbImage {
    let mut image = render(spec);
    add_noise(&mut image, NOISE_AMPLITUDE, &mut rand::thread_rng());
    image
}

/// Rotate about the image center by `degrees`, preserving the canvas size.
/// Corners exposed by the rotation fill with black.
#[must_use]
pub fn rotate(image: &RgbImage, degrees: f32) -> RgbImage {
    rotate_about_center(image, degrees.to_radians(), Interpolation::Bilinear, Rgb([0, 0, 0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{builtin_templates, Bgr};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn circle_spec() -> TemplateSpec {
        TemplateSpec::new("logo_pecho", ShapeKind::Circle, Bgr([0, 100, 200]))
    }

    #[test]
    fn output_matches_requested_dimensions() {
        for spec in builtin_templates() {
            let image = synthesize(&spec);
            assert_eq!(image.dimensions(), (spec.width, spec.height), "shape {:?}", spec.shape);
        }
    }

    #[test]
    fn circle_ring_is_foreground_and_center_is_pierced() {
        let spec = circle_spec();
        let image = render(&spec);

        let (cx, cy) = (spec.width / 2, spec.height / 2);
        let radius = spec.width.min(spec.height) / 4;

        // On the disc but clear of all three punched holes.
        assert_eq!(*image.get_pixel(cx, cy + radius / 2), spec.color.to_rgb());
        // The middle hole erases the exact center back to background.
        assert_eq!(*image.get_pixel(cx, cy), spec.background.to_rgb());
    }

    #[test]
    fn square_center_is_foreground() {
        let spec = TemplateSpec::new("sq", ShapeKind::Square, Bgr([200, 80, 0]));
        let image = render(&spec);
        // The inset rectangle is hollow, so the centroid keeps the fill.
        assert_eq!(*image.get_pixel(spec.width / 2, spec.height / 2), spec.color.to_rgb());
    }

    #[test]
    fn triangle_centroid_is_foreground() {
        let spec = TemplateSpec::new("tri", ShapeKind::Triangle, Bgr([60, 160, 60]));
        let image = render(&spec);
        let (cx, cy) = (spec.width / 2, spec.height / 2);
        // Just below center sits inside the filled body, away from the
        // background-stroked edges.
        assert_eq!(*image.get_pixel(cx, cy + 2), spec.color.to_rgb());
    }

    #[test]
    fn label_band_has_ink() {
        let spec = circle_spec();
        let image = render(&spec);
        let bg = spec.background.to_rgb();

        let band = (spec.height - 20)..(spec.height - 8);
        let ink = band
            .flat_map(|y| (0..spec.width).map(move |x| (x, y)))
            .any(|(x, y)| *image.get_pixel(x, y) != bg);
        assert!(ink, "no label pixels near the bottom margin");
    }

    #[test]
    fn noise_stays_in_range_without_wrapping() {
        // A white raster is the wrap-around hazard: 255 + 10 must clamp,
        // not wrap to a small value.
        let mut image = RgbImage::from_pixel(32, 32, image::Rgb([255, 255, 255]));
        let mut rng = StdRng::seed_from_u64(7);
        add_noise(&mut image, NOISE_AMPLITUDE, &mut rng);
        assert!(image.pixels().flat_map(|p| p.0).all(|c| c >= 245));

        // Same at the bottom end.
        let mut image = RgbImage::from_pixel(32, 32, image::Rgb([0, 0, 0]));
        add_noise(&mut image, NOISE_AMPLITUDE, &mut rng);
        assert!(image.pixels().flat_map(|p| p.0).all(|c| c <= 10));
    }

    #[test]
    fn noise_perturbs_pixels() {
        let spec = circle_spec();
        let clean = render(&spec);
        let mut noisy = clean.clone();
        let mut rng = StdRng::seed_from_u64(7);
        add_noise(&mut noisy, NOISE_AMPLITUDE, &mut rng);
        assert_ne!(clean, noisy);
    }

    #[test]
    fn zero_amplitude_noise_is_identity() {
        let spec = circle_spec();
        let clean = render(&spec);
        let mut copy = clean.clone();
        let mut rng = StdRng::seed_from_u64(7);
        add_noise(&mut copy, 0, &mut rng);
        assert_eq!(clean, copy);
    }

    #[test]
    fn rotate_preserves_dimensions() {
        let spec = circle_spec();
        let image = render(&spec);
        let rotated = rotate(&image, DEFAULT_ANGLE);
        assert_eq!(rotated.dimensions(), image.dimensions());
    }

    #[test]
    fn rotate_fills_exposed_corners_with_black() {
        let spec = circle_spec();
        let image = render(&spec);
        let rotated = rotate(&image, 45.0);
        assert_eq!(*rotated.get_pixel(0, 0), Rgb([0, 0, 0]));
    }
}
