use chrono::NaiveDate;

pub use crate::{
  color::{Hsl, Rgb},
  gradient::{blend, blend_sequence},
  palette::{Palette, PaletteKey, STOPS, SUNRISE_SEQUENCE, SUNSET_SEQUENCE, StopWarning},
  phase::{
    Phase, PhaseState, PinnedTime, SolarEvents, SystemClock, TimeSource, TransitionWindow,
    WindowConfig, classify,
  },
  weather::{apply_grayness, describe_wmo},
};

mod color;
mod gradient;
mod palette;
mod phase;
mod weather;

/// Sunrise/sunset provider for a date and coordinate. External collaborator;
/// the engine asks once per day and falls back to fixed times without it.
pub trait SolarTimeSource {
  fn solar_events(&self, date: NaiveDate, latitude: f64, longitude: f64) -> Option<SolarEvents>;
}

/// Computes the 12-stop background gradient for a moment in the solar day,
/// desaturated by cloud cover.
///
/// Holds no state beyond two caches: the last phase's base colors and the
/// current day's solar events. Both refresh transparently, so every call is
/// a pure function of its inputs.
#[derive(Default)]
pub struct GradientEngine {
  windows: WindowConfig,
  memo:    Option<Memo>,
  solar:   Option<SolarCache>,
}

struct Memo {
  state:    PhaseState,
  base:     [Rgb; STOPS],
  warnings: Vec<StopWarning>,
}

struct SolarCache {
  date:     NaiveDate,
  location: Option<(f64, f64)>,
  events:   SolarEvents,
}

/// The finished gradient: 12 colors top to bottom, plus the state that
/// produced them and any fail-soft substitutions made along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientResult {
  pub colors:   [Rgb; STOPS],
  pub phase:    PhaseState,
  pub warnings: Vec<StopWarning>,
}

impl GradientResult {
  /// The stops as `#RRGGBB` strings, top to bottom.
  pub fn stops(&self) -> Vec<String> { self.colors.iter().map(Rgb::to_string).collect() }

  /// A ready-to-use CSS `linear-gradient` running top to bottom.
  pub fn to_linear_gradient(&self) -> String {
    format!("linear-gradient(180deg, {})", self.stops().join(", "))
  }
}

impl GradientEngine {
  pub fn new() -> GradientEngine { GradientEngine::default() }

  pub fn with_windows(windows: WindowConfig) -> GradientEngine {
    GradientEngine { windows, ..GradientEngine::default() }
  }

  /// Classifies the clock's current instant and renders the gradient for it.
  pub fn render(
    &mut self,
    clock: &dyn TimeSource,
    events: &SolarEvents,
    cloud_percent: f64,
  ) -> GradientResult {
    let state = classify(clock.now(), events, &self.windows);
    self.render_state(state, cloud_percent)
  }

  /// Renders the gradient for an already-classified state. The base colors
  /// are recomputed only when the state differs by value from the previous
  /// call; the cloud filter runs every time, since cover can change within a
  /// phase.
  pub fn render_state(&mut self, state: PhaseState, cloud_percent: f64) -> GradientResult {
    let stale = match &self.memo {
      Some(memo) => memo.state != state,
      None => true,
    };
    if stale {
      let (base, warnings) = base_colors(state);
      self.memo = Some(Memo { state, base, warnings });
    }

    let memo = self.memo.as_ref().unwrap();
    GradientResult {
      colors:   weather::apply_grayness(memo.base, cloud_percent),
      phase:    state,
      warnings: memo.warnings.clone(),
    }
  }

  /// Solar events for the date, recomputed only when the date or location
  /// changes. No location (or no answer from the source) falls back to fixed
  /// 06:00 / 18:00 local times.
  pub fn events_for(
    &mut self,
    source: &dyn SolarTimeSource,
    date: NaiveDate,
    location: Option<(f64, f64)>,
  ) -> SolarEvents {
    match &self.solar {
      Some(cache) if cache.date == date && cache.location == location => cache.events,
      _ => {
        let events = location
          .and_then(|(lat, lon)| source.solar_events(date, lat, lon))
          .unwrap_or_else(|| SolarEvents::fallback(date));
        self.solar = Some(SolarCache { date, location, events });
        events
      }
    }
  }
}

fn base_colors(state: PhaseState) -> ([Rgb; STOPS], Vec<StopWarning>) {
  match state.phase {
    Phase::Sunrise => blend_anchors(&SUNRISE_SEQUENCE, state.progress),
    Phase::Sunset => blend_anchors(&SUNSET_SEQUENCE, state.progress),
    phase => PaletteKey::for_phase(phase).get().resolve(),
  }
}

fn blend_anchors(keys: &[PaletteKey], progress: f64) -> ([Rgb; STOPS], Vec<StopWarning>) {
  let mut warnings = vec![];
  let anchors = keys
    .iter()
    .map(|key| {
      let (colors, w) = key.get().resolve();
      warnings.extend(w);
      colors
    })
    .collect::<Vec<_>>();

  (gradient::blend_sequence(&anchors, progress), warnings)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn day_phase_selects_the_day_palette() {
    let mut engine = GradientEngine::new();
    let state = PhaseState { phase: Phase::Day, progress: 0.0 };

    let result = engine.render_state(state, 0.0);
    let (expected, _) = PaletteKey::Day.get().resolve();
    assert_eq!(result.colors, expected);
    assert!(result.warnings.is_empty());
  }

  #[test]
  fn night_phase_falls_back_to_midnight() {
    let mut engine = GradientEngine::new();
    let state = PhaseState { phase: Phase::Night, progress: 0.0 };

    let result = engine.render_state(state, 0.0);
    let (expected, _) = PaletteKey::Midnight.get().resolve();
    assert_eq!(result.colors, expected);
  }

  #[test]
  fn sunrise_runs_from_deep_dusk_to_early_day() {
    let mut engine = GradientEngine::new();

    let start = engine.render_state(PhaseState { phase: Phase::Sunrise, progress: 0.0 }, 0.0);
    let (deep, _) = PaletteKey::Sunset12.get().resolve();
    assert_eq!(start.colors, deep);

    let end = engine.render_state(PhaseState { phase: Phase::Sunrise, progress: 1.0 }, 0.0);
    let (early_day, _) = PaletteKey::EarlyDay.get().resolve();
    assert_eq!(end.colors, early_day);
  }

  #[test]
  fn sunset_runs_from_first_dusk_to_early_night() {
    let mut engine = GradientEngine::new();

    let start = engine.render_state(PhaseState { phase: Phase::Sunset, progress: 0.0 }, 0.0);
    let (first, _) = PaletteKey::Sunset1.get().resolve();
    assert_eq!(start.colors, first);

    let end = engine.render_state(PhaseState { phase: Phase::Sunset, progress: 1.0 }, 0.0);
    let (early_night, _) = PaletteKey::EarlyNight.get().resolve();
    assert_eq!(end.colors, early_night);
  }

  #[test]
  fn memoized_state_still_honors_cloud_changes() {
    let mut engine = GradientEngine::new();
    let state = PhaseState { phase: Phase::Day, progress: 0.0 };

    let clear = engine.render_state(state, 0.0);
    let cloudy = engine.render_state(state, 100.0);
    assert_ne!(clear.colors, cloudy.colors);

    for c in cloudy.colors {
      assert_eq!(c.r, c.g);
      assert_eq!(c.g, c.b);
    }
  }

  #[test]
  fn stops_are_seven_char_hex() {
    let mut engine = GradientEngine::new();
    let result = engine.render_state(PhaseState { phase: Phase::Day, progress: 0.0 }, 0.0);

    let stops = result.stops();
    assert_eq!(stops.len(), STOPS);
    assert_eq!(stops[0], "#244F8C");
    assert!(stops.iter().all(|s| s.len() == 7 && s.starts_with('#')));
  }

  #[test]
  fn linear_gradient_string_is_renderable() {
    let mut engine = GradientEngine::new();
    let result = engine.render_state(PhaseState { phase: Phase::Night, progress: 0.0 }, 0.0);

    let css = result.to_linear_gradient();
    assert!(css.starts_with("linear-gradient(180deg, #0A0A48, "));
    assert!(css.ends_with("#36409E)"));
  }
}
