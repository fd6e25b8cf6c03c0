use crate::{color::Rgb, palette::STOPS};

/// Desaturates a gradient toward its per-stop average gray by the cloud
/// cover percentage. 0 is the identity, 100 is fully achromatic; anything
/// outside that range (or non-finite) is clamped, never an error.
pub fn apply_grayness(colors: [Rgb; STOPS], cloud_percent: f64) -> [Rgb; STOPS] {
  let factor = (cloud_percent / 100.0).clamp(0.0, 1.0);
  if !(factor > 0.0) {
    // Clear sky, including the NaN case.
    return colors;
  }

  colors.map(|c| {
    let gray = (f64::from(c.r) + f64::from(c.g) + f64::from(c.b)) / 3.0;
    let mix = |ch: u8| (f64::from(ch) * (1.0 - factor) + gray * factor).round() as u8;
    Rgb::new(mix(c.r), mix(c.g), mix(c.b))
  })
}

/// Plain-language label for a WMO weather interpretation code, as reported by
/// the weather collaborator alongside cloud cover.
pub fn describe_wmo(code: u16) -> &'static str {
  match code {
    0 => "Clear sky",
    1 => "Mainly clear",
    2 => "Partly cloudy",
    3 => "Overcast",
    45 => "Fog",
    48 => "Depositing rime fog",
    51 => "Light drizzle",
    53 => "Moderate drizzle",
    55 => "Dense drizzle",
    61 => "Slight rain",
    63 => "Moderate rain",
    65 => "Heavy rain",
    66 => "Freezing rain (light)",
    67 => "Freezing rain (heavy)",
    71 => "Slight snow",
    73 => "Moderate snow",
    75 => "Heavy snow",
    80 => "Slight rain showers",
    81 => "Moderate rain showers",
    82 => "Violent rain showers",
    85 => "Slight snow showers",
    86 => "Heavy snow showers",
    95 => "Thunderstorm",
    96 => "Thunderstorm with slight hail",
    99 => "Thunderstorm with heavy hail",
    _ => "Unknown",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_cloud_cover_is_the_identity() {
    let colors = [Rgb::new(36, 79, 140); STOPS];
    assert_eq!(apply_grayness(colors, 0.0), colors);
  }

  #[test]
  fn full_cloud_cover_is_achromatic() {
    let colors = [Rgb::new(36, 79, 140); STOPS];
    for c in apply_grayness(colors, 100.0) {
      assert_eq!(c.r, c.g);
      assert_eq!(c.g, c.b);
      assert_eq!(c.r, 85); // (36 + 79 + 140) / 3
    }
  }

  #[test]
  fn forty_percent_cloud_blend() {
    // #244F8C with gray 85 at factor 0.4:
    //   36 * 0.6 + 85 * 0.4 = 55.6 -> 56
    //   79 * 0.6 + 85 * 0.4 = 81.4 -> 81
    //  140 * 0.6 + 85 * 0.4 = 118.0 -> 118
    let colors = [Rgb::new(36, 79, 140); STOPS];
    assert_eq!(apply_grayness(colors, 40.0)[0], Rgb::new(56, 81, 118));
  }

  #[test]
  fn out_of_range_cover_clamps() {
    let colors = [Rgb::new(10, 200, 60); STOPS];
    assert_eq!(apply_grayness(colors, -20.0), colors);
    assert_eq!(apply_grayness(colors, 250.0), apply_grayness(colors, 100.0));
    assert_eq!(apply_grayness(colors, f64::NAN), colors);
  }

  #[test]
  fn wmo_codes_map_to_conditions() {
    assert_eq!(describe_wmo(0), "Clear sky");
    assert_eq!(describe_wmo(95), "Thunderstorm");
    assert_eq!(describe_wmo(42), "Unknown");
  }
}
