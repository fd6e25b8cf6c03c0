use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
  /// Hue in degrees, [0, 360).
  pub h: f64,
  pub s: f64,
  pub l: f64,
}

impl Rgb {
  pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

  pub const fn new(r: u8, g: u8, b: u8) -> Rgb { Rgb { r, g, b } }

  /// Parses `RGB` or `RRGGBB`, with or without a leading `#`. Returns `None`
  /// on anything else so callers can skip a bad stop instead of aborting.
  pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    match hex.len() {
      3 => {
        let v = u16::from_str_radix(hex, 16).ok()?;
        Some(Rgb::new(
          (v >> 8 & 0xf) as u8 * 0x11,
          (v >> 4 & 0xf) as u8 * 0x11,
          (v & 0xf) as u8 * 0x11,
        ))
      }
      6 => {
        let v = u32::from_str_radix(hex, 16).ok()?;
        Some(Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8))
      }
      _ => None,
    }
  }

  pub fn to_hsl(self) -> Hsl {
    let r = f64::from(self.r) / 255.0;
    let g = f64::from(self.g) / 255.0;
    let b = f64::from(self.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
      // Achromatic.
      return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
      (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
      (b - r) / d + 2.0
    } else {
      (r - g) / d + 4.0
    };

    Hsl { h: h * 60.0, s, l }
  }
}

impl fmt::Display for Rgb {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
  }
}

impl Hsl {
  pub fn to_rgb(self) -> Rgb {
    if self.s == 0.0 {
      let v = (self.l * 255.0).round() as u8;
      return Rgb::new(v, v, v);
    }

    let q = if self.l < 0.5 {
      self.l * (1.0 + self.s)
    } else {
      self.l + self.s - self.l * self.s
    };
    let p = 2.0 * self.l - q;
    let h = self.h / 360.0;

    let channel = |t: f64| (hue_to_channel(p, q, t) * 255.0).round() as u8;
    Rgb::new(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
  }
}

// Hue may land outside [0, 1) after shorter-arc interpolation; a single wrap
// is enough since interpolated hues stay within (-180, 540) degrees.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
  if t < 0.0 {
    t += 1.0;
  }
  if t > 1.0 {
    t -= 1.0;
  }

  if t < 1.0 / 6.0 {
    p + (q - p) * 6.0 * t
  } else if t < 1.0 / 2.0 {
    q
  } else if t < 2.0 / 3.0 {
    p + (q - p) * (2.0 / 3.0 - t) * 6.0
  } else {
    p
  }
}
