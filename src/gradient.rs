use crate::{
  color::{Hsl, Rgb},
  palette::STOPS,
};

/// Blends two colors in HSL space with hue taken along the shorter arc of the
/// color wheel, so 350° → 10° passes through 0° instead of 180°.
///
/// `t = 0` returns `from` exactly and `t = 1` returns `to` exactly; the
/// endpoints are a contract, not a rounding accident.
pub fn blend(from: Rgb, to: Rgb, t: f64) -> Rgb {
  if t <= 0.0 {
    return from;
  }
  if t >= 1.0 {
    return to;
  }

  let a = from.to_hsl();
  let b = to.to_hsl();

  let mut dh = b.h - a.h;
  if dh > 180.0 {
    dh -= 360.0;
  }
  if dh < -180.0 {
    dh += 360.0;
  }

  Hsl {
    h: a.h + dh * t,
    s: a.s + (b.s - a.s) * t,
    l: a.l + (b.l - a.l) * t,
  }
  .to_rgb()
}

/// Blends across `anchors` treated as evenly spaced key gradients over
/// `[0, 1]`, each of the 12 stop positions interpolating independently.
pub fn blend_sequence(anchors: &[[Rgb; STOPS]], progress: f64) -> [Rgb; STOPS] {
  match anchors {
    [] => [Rgb::BLACK; STOPS],
    [only] => *only,
    _ => {
      let segments = anchors.len() - 1;
      let seg = ((progress * segments as f64).floor() as usize).min(segments - 1);
      let next = (seg + 1).min(segments);
      let frac = progress * segments as f64 - seg as f64;

      let mut out = [Rgb::BLACK; STOPS];
      for i in 0..STOPS {
        out[i] = blend(anchors[seg][i], anchors[next][i], frac);
      }
      out
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const RED: Rgb = Rgb::new(255, 0, 0);
  const BLUE: Rgb = Rgb::new(0, 0, 255);

  #[test]
  fn endpoints_are_exact() {
    let a = Rgb::new(0x24, 0x4F, 0x8C);
    let b = Rgb::new(0x9C, 0xD5, 0xF2);
    assert_eq!(blend(a, b, 0.0), a);
    assert_eq!(blend(a, b, 1.0), b);
  }

  #[test]
  fn out_of_range_t_clamps_to_endpoints() {
    assert_eq!(blend(RED, BLUE, -0.5), RED);
    assert_eq!(blend(RED, BLUE, 1.5), BLUE);
  }

  #[test]
  fn hue_takes_the_shorter_arc() {
    // Red (0°) to blue (240°): the short way runs backwards through magenta,
    // so the midpoint hue must sit in (300°, 360°), never near green (120°).
    let mid = blend(RED, BLUE, 0.5).to_hsl();
    assert!(mid.h > 300.0 && mid.h < 360.0, "midpoint hue was {}", mid.h);
  }

  #[test]
  fn wraps_forward_across_zero() {
    let a = Hsl { h: 350.0, s: 1.0, l: 0.5 }.to_rgb();
    let b = Hsl { h: 10.0, s: 1.0, l: 0.5 }.to_rgb();

    let mid = blend(a, b, 0.5).to_hsl();
    // 350° + 10° midpoint is 0°, give or take conversion rounding.
    assert!(mid.h < 5.0 || mid.h > 355.0, "midpoint hue was {}", mid.h);
  }

  #[test]
  fn sequence_boundaries_return_anchor_palettes() {
    let first = [RED; STOPS];
    let middle = [Rgb::new(0, 255, 0); STOPS];
    let last = [BLUE; STOPS];
    let anchors = [first, middle, last];

    assert_eq!(blend_sequence(&anchors, 0.0), first);
    assert_eq!(blend_sequence(&anchors, 1.0), last);
    assert_eq!(blend_sequence(&anchors, 0.5), middle);
  }

  #[test]
  fn sequence_is_fail_soft_on_degenerate_input() {
    assert_eq!(blend_sequence(&[], 0.5), [Rgb::BLACK; STOPS]);
    let only = [RED; STOPS];
    assert_eq!(blend_sequence(&[only], 0.7), only);
  }

  #[test]
  fn sequence_interpolates_within_a_segment() {
    let anchors = [[Rgb::BLACK; STOPS], [Rgb::new(200, 200, 200); STOPS]];
    let mid = blend_sequence(&anchors, 0.5);
    // Halfway between black and an achromatic gray stays achromatic.
    assert_eq!(mid[0].r, mid[0].g);
    assert_eq!(mid[0].g, mid[0].b);
    assert!(mid[0].r > 0 && mid[0].r < 200);
  }
}
