use log::warn;
use thiserror::Error;

use crate::{color::Rgb, phase::Phase};

/// Every palette is a vertical gradient of exactly this many stops.
pub const STOPS: usize = 12;

/// A named, ordered run of 12 anchor colors, read top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
  name:  &'static str,
  stops: [&'static str; STOPS],
}

/// A stop that could not be parsed and was replaced with black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unparsable stop {raw:?} at index {index} in palette {palette:?}")]
pub struct StopWarning {
  pub palette: &'static str,
  pub index:   usize,
  pub raw:     &'static str,
}

impl Palette {
  pub const fn new(name: &'static str, stops: [&'static str; STOPS]) -> Palette {
    Palette { name, stops }
  }

  pub const fn name(&self) -> &'static str { self.name }
  pub const fn stops(&self) -> &[&'static str; STOPS] { &self.stops }

  /// Parses every stop, substituting black for anything unparsable so one bad
  /// entry never blanks the whole gradient.
  pub fn resolve(&self) -> ([Rgb; STOPS], Vec<StopWarning>) {
    let mut colors = [Rgb::BLACK; STOPS];
    let mut warnings = vec![];

    for (index, raw) in self.stops.iter().enumerate() {
      match Rgb::parse_hex(raw) {
        Some(color) => colors[index] = color,
        None => {
          warn!("unparsable stop {raw:?} at index {index} in palette {:?}", self.name);
          warnings.push(StopWarning { palette: self.name, index, raw });
        }
      }
    }

    (colors, warnings)
  }
}

/// The closed set of palettes the engine can select. The `advancing*` and
/// `approaching_morning` entries are never produced by the phase classifier,
/// but stay reachable here for callers that want a finer-grained cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKey {
  EarlyDay,
  Day,
  AdvancingDay,
  EarlyNight,
  Midnight,
  AdvancingNight,
  ApproachingMorning,
  Sunset1,
  Sunset2,
  Sunset3,
  Sunset4,
  Sunset5,
  Sunset6,
  Sunset7,
  Sunset8,
  Sunset9,
  Sunset10,
  Sunset11,
  Sunset12,
}

impl PaletteKey {
  pub fn get(self) -> &'static Palette {
    match self {
      PaletteKey::EarlyDay => &EARLY_DAY,
      PaletteKey::Day => &DAY,
      PaletteKey::AdvancingDay => &ADVANCING_DAY,
      PaletteKey::EarlyNight => &EARLY_NIGHT,
      PaletteKey::Midnight => &MIDNIGHT,
      PaletteKey::AdvancingNight => &ADVANCING_NIGHT,
      PaletteKey::ApproachingMorning => &APPROACHING_MORNING,
      PaletteKey::Sunset1 => &SUNSET[0],
      PaletteKey::Sunset2 => &SUNSET[1],
      PaletteKey::Sunset3 => &SUNSET[2],
      PaletteKey::Sunset4 => &SUNSET[3],
      PaletteKey::Sunset5 => &SUNSET[4],
      PaletteKey::Sunset6 => &SUNSET[5],
      PaletteKey::Sunset7 => &SUNSET[6],
      PaletteKey::Sunset8 => &SUNSET[7],
      PaletteKey::Sunset9 => &SUNSET[8],
      PaletteKey::Sunset10 => &SUNSET[9],
      PaletteKey::Sunset11 => &SUNSET[10],
      PaletteKey::Sunset12 => &SUNSET[11],
    }
  }

  /// Palette for a steady phase. Phases without a palette of their own fall
  /// back to midnight; the transition phases only land here defensively,
  /// since the engine blends across anchor sequences for those.
  pub const fn for_phase(phase: Phase) -> PaletteKey {
    match phase {
      Phase::Day => PaletteKey::Day,
      Phase::Night | Phase::Sunrise | Phase::Sunset => PaletteKey::Midnight,
    }
  }
}

/// Dawn reuses the dusk family in reverse to model the mirrored lighting
/// gradient, ending on the early-day sky.
pub const SUNRISE_SEQUENCE: [PaletteKey; 13] = [
  PaletteKey::Sunset12,
  PaletteKey::Sunset11,
  PaletteKey::Sunset10,
  PaletteKey::Sunset9,
  PaletteKey::Sunset8,
  PaletteKey::Sunset7,
  PaletteKey::Sunset6,
  PaletteKey::Sunset5,
  PaletteKey::Sunset4,
  PaletteKey::Sunset3,
  PaletteKey::Sunset2,
  PaletteKey::Sunset1,
  PaletteKey::EarlyDay,
];

pub const SUNSET_SEQUENCE: [PaletteKey; 13] = [
  PaletteKey::Sunset1,
  PaletteKey::Sunset2,
  PaletteKey::Sunset3,
  PaletteKey::Sunset4,
  PaletteKey::Sunset5,
  PaletteKey::Sunset6,
  PaletteKey::Sunset7,
  PaletteKey::Sunset8,
  PaletteKey::Sunset9,
  PaletteKey::Sunset10,
  PaletteKey::Sunset11,
  PaletteKey::Sunset12,
  PaletteKey::EarlyNight,
];

pub static EARLY_DAY: Palette = Palette::new("early_day", [
  "#336EB8", "#3473BB", "#3475BD", "#387BC2", "#3B7BC4", "#3D80CA", "#4187CF", "#4890D6",
  "#5199E0", "#5FABEB", "#78BFFF", "#9CD5F2",
]);

pub static DAY: Palette = Palette::new("day", [
  "#244F8C", "#28579D", "#3262A1", "#3A69A3", "#456FA9", "#4F7EB5", "#5B89BD", "#6992C2",
  "#779DCB", "#8AB0D4", "#9BC0DB", "#A8C2E3",
]);

pub static ADVANCING_DAY: Palette = Palette::new("advancing_day", [
  "#244F8C", "#28579D", "#3262A1", "#3A69A3", "#456FA9", "#4F7EB5", "#5B89BD", "#6992C2",
  "#779DCB", "#8AB0D4", "#9BC0DB", "#A8C2E3",
]);

pub static EARLY_NIGHT: Palette = Palette::new("early_night", [
  "#07083A", "#0D0D43", "#121449", "#17184D", "#1B1E57", "#202162", "#232847", "#272C66",
  "#2A307B", "#2C3483", "#2C3A8A", "#2E3C91",
]);

pub static MIDNIGHT: Palette = Palette::new("midnight", [
  "#0A0A48", "#0D0E51", "#121459", "#171861", "#1B1E69", "#20226F", "#242874", "#282C7A",
  "#2B317F", "#30368B", "#323B94", "#36409E",
]);

pub static ADVANCING_NIGHT: Palette = Palette::new("advancing_night", [
  "#07071C", "#0B0B22", "#101026", "#15152C", "#1C1B36", "#232345", "#2A2A51", "#2E2F55",
  "#313358", "#34375A", "#373C5E", "#3A4062",
]);

pub static APPROACHING_MORNING: Palette = Palette::new("approaching_morning", [
  "#132F59", "#163463", "#1A3A6E", "#1F4078", "#254682", "#2B4C8B", "#355192", "#3F5D9D",
  "#4869A8", "#5075B2", "#5680BB", "#5C8CC5",
]);

/// The twelve dusk key gradients, darkest last.
pub static SUNSET: [Palette; 12] = [
  Palette::new("sunset_1", [
    "#2E468C", "#39507F", "#44608B", "#4E69AD", "#5A74B8", "#6683D0", "#7391DB", "#819BE3",
    "#95A3E2", "#A6A6E1", "#B7AFC9", "#C4B49F",
  ]),
  Palette::new("sunset_2", [
    "#2A497B", "#365283", "#425C8B", "#4D65A2", "#5C70B3", "#6981CD", "#7A8DD7", "#8C9BD7",
    "#9EAAE3", "#B2B8E0", "#C1C6DB", "#D2D3A2",
  ]),
  Palette::new("sunset_3", [
    "#283F73", "#365279", "#456285", "#557092", "#667DA1", "#758AAE", "#8495BB", "#93A0C7",
    "#A2ABC2", "#B2B6BD", "#C2C0B7", "#D0C9B2",
  ]),
  Palette::new("sunset_4", [
    "#263B6E", "#30406E", "#3A4B7B", "#435380", "#4C5C86", "#58688D", "#647396", "#6F7C9E",
    "#7B859E", "#868F9E", "#92999D", "#9F9F9C",
  ]),
  Palette::new("sunset_5", [
    "#213866", "#293F69", "#34496F", "#3E5374", "#485C7A", "#526481", "#5D6B85", "#677186",
    "#727785", "#7E7D84", "#898282", "#948880",
  ]),
  Palette::new("sunset_6", [
    "#1C3260", "#233866", "#2B3F6E", "#344674", "#3D4E7A", "#46567F", "#4F5E82", "#586684",
    "#626D85", "#6C7484", "#766B83", "#806282",
  ]),
  Palette::new("sunset_7", [
    "#182C5B", "#213263", "#2A3A6C", "#344173", "#3F4879", "#4A4F7E", "#555783", "#605E86",
    "#6C6587", "#776C87", "#837386", "#8E7985",
  ]),
  Palette::new("sunset_8", [
    "#142956", "#1B2E5D", "#243365", "#2E3A6B", "#3A4171", "#464778", "#525D7D", "#5D647E",
    "#686B7F", "#74717F", "#7F7880", "#8B7E80",
  ]),
  Palette::new("sunset_9", [
    "#0C1D46", "#132249", "#19284C", "#1F2E50", "#243355", "#2A3959", "#303E5E", "#354362",
    "#3A4967", "#3F4E6B", "#43536F", "#485874",
  ]),
  Palette::new("sunset_10", [
    "#0A1B40", "#121F47", "#1A244D", "#212952", "#282F58", "#2F345E", "#353A63", "#3B3F69",
    "#41446F", "#474A74", "#4D4F7A", "#53557F",
  ]),
  Palette::new("sunset_11", [
    "#081838", "#111D3F", "#192347", "#21294E", "#292F56", "#30355D", "#373B64", "#3E406B",
    "#444672", "#4B4C78", "#51517F", "#575785",
  ]),
  Palette::new("sunset_12", [
    "#06152F", "#0F1B37", "#17203E", "#202646", "#292C4D", "#313154", "#3A375B", "#423C62",
    "#4A4269", "#51486F", "#594E76", "#60547D",
  ]),
];
