//! Color types and the dim-tint derivation.

/// RGBA color with normalized float components (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
  pub r: f32,
  pub g: f32,
  pub b: f32,
  pub a: f32,
}

impl Color {
  pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
    Self { r, g, b, a }
  }

  /// Opaque color from RGB components.
  pub fn rgb(r: f32, g: f32, b: f32) -> Self {
    Self { r, g, b, a: 1.0 }
  }

  /// Opaque color from a `0xRRGGBB` value.
  pub fn from_hex(hex: u32) -> Self {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Self { r, g, b, a: 1.0 }
  }

  pub const WHITE: Self = Self {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
  };

  pub const BLACK: Self = Self {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
  };

  fn channel_sum(self) -> f32 {
    self.r + self.g + self.b
  }
}

/// Channel sum (0.0..=3.0) above which a background counts as light.
const LIGHT_BACKGROUND_THRESHOLD: f32 = 380.0 / 255.0;

/// Per-channel scale between a background and its tint.
const TINT_FACTOR: f32 = 0.7;

/// Floor for zero channels when brightening, so a pure black
/// background still produces a visible tint.
const BLACK_LIFT: f32 = 3.0 / 255.0;

/// Tint used to dim text against `background`.
///
/// Light backgrounds get a darker shade of themselves, dark
/// backgrounds a brighter one; either way the result stays close to
/// the background hue and remains distinguishable from it. Alpha is
/// preserved.
pub fn contrast_color(background: Color) -> Color {
  if background.channel_sum() > LIGHT_BACKGROUND_THRESHOLD {
    darker(background)
  } else {
    brighter(background)
  }
}

fn darker(c: Color) -> Color {
  Color::new(c.r * TINT_FACTOR, c.g * TINT_FACTOR, c.b * TINT_FACTOR, c.a)
}

fn brighter(c: Color) -> Color {
  let lift = |ch: f32| {
    if ch < BLACK_LIFT {
      BLACK_LIFT
    } else {
      (ch / TINT_FACTOR).min(1.0)
    }
  };
  Color::new(lift(c.r), lift(c.g), lift(c.b), c.a)
}
