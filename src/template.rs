//! Template specifications: shapes, colors, and the built-in table.

use image::Rgb;
use serde::Deserialize;

/// Default template width in pixels.
pub const DEFAULT_WIDTH: u32 = 100;
/// Default template height in pixels.
pub const DEFAULT_HEIGHT: u32 = 80;

/// Smallest accepted edge length. The shape geometry divides the shorter
/// edge by 4, so anything below this renders degenerate primitives.
pub const MIN_DIMENSION: u32 = 16;
/// Largest accepted edge length.
pub const MAX_DIMENSION: u32 = 4096;

/// The shape drawn at the center of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Filled disc pierced by three background holes.
    Circle,
    /// Filled square with an inset hollow rectangle.
    Square,
    /// Filled isoceles triangle with outlined edges.
    Triangle,
}

/// Parse a shape name (case-insensitive) to a [`ShapeKind`].
///
/// # Errors
///
/// Returns an error naming the valid set if the name is not recognized.
pub fn parse_shape(name: &str) -> Result<ShapeKind, String> {
    match name.to_ascii_lowercase().as_str() {
        "circle" => Ok(ShapeKind::Circle),
        "square" => Ok(ShapeKind::Square),
        "triangle" => Ok(ShapeKind::Triangle),
        _ => Err(format!("Unknown shape '{name}'. Valid: circle, square, triangle")),
    }
}

/// A 3-channel color in blue-green-red channel order.
///
/// The configuration surface keeps the BGR ordering of the original template
/// tables; conversion to the raster's RGB happens at the drawing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Bgr(pub [u8; 3]);

impl Bgr {
    /// White, the default background.
    pub const WHITE: Self = Self([255, 255, 255]);

    /// Convert to the raster pixel type, swapping to RGB channel order.
    #[must_use]
    pub fn to_rgb(self) -> Rgb<u8> {
        let Self([b, g, r]) = self;
        Rgb([r, g, b])
    }
}

/// An immutable template specification: what to draw and at what size.
#[derive(Debug, Clone)]
pub struct TemplateSpec {
    /// Label text, also the output filename stem.
    pub name: String,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Shape drawn at the center.
    pub shape: ShapeKind,
    /// Foreground color (BGR).
    pub color: Bgr,
    /// Background color (BGR).
    pub background: Bgr,
}

impl TemplateSpec {
    /// Construct a spec with the default size and white background.
    #[must_use]
    pub fn new(name: &str, shape: ShapeKind, color: Bgr) -> Self {
        Self {
            name: name.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            shape,
            color,
            background: Bgr::WHITE,
        }
    }

    /// Validate name and dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the name sanitizes to nothing or a dimension
    /// falls outside [`MIN_DIMENSION`]..=[`MAX_DIMENSION`].
    pub fn validate(&self) -> Result<(), String> {
        if sanitize_name(&self.name).is_empty() {
            return Err(format!("Template name '{}' has no filename-safe characters", self.name));
        }
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(format!(
                    "Template '{}' {axis} {value} out of range {MIN_DIMENSION}..={MAX_DIMENSION}",
                    self.name
                ));
            }
        }
        Ok(())
    }
}

/// Built-in table: (name, shape, foreground BGR).
const BUILTIN: &[(&str, ShapeKind, [u8; 3])] = &[
    ("logo_pecho", ShapeKind::Circle, [0, 100, 200]),
    ("logo_marco", ShapeKind::Square, [200, 80, 0]),
    ("logo_monte", ShapeKind::Triangle, [60, 160, 60]),
];

/// The default batch: one circle, one square, one triangle template.
#[must_use]
pub fn builtin_templates() -> Vec<TemplateSpec> {
    BUILTIN.iter().map(|&(name, shape, bgr)| TemplateSpec::new(name, shape, Bgr(bgr))).collect()
}

/// Sanitize a template name for use as a filename stem.
///
/// Lowercases, keeps `[a-z0-9_-]`, and maps runs of anything else to a
/// single hyphen, so built-in names like `logo_pecho` pass through
/// unchanged.
#[must_use]
pub fn sanitize_name(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut last_was_hyphen = true; // Prevents leading hyphen

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            result.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    while result.ends_with('-') {
        result.pop();
    }

    result
}
