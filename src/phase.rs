use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// The classifier only ever produces these four states; the finer-grained
/// palettes (advancing day, approaching morning, ...) are selectable data,
/// not classifier outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
  Sunrise,
  Day,
  Sunset,
  Night,
}

/// Where the cycle currently sits. `progress` runs 0..=1 through a transition
/// band and stays 0.0 for the steady day/night phases. Compared by value:
/// a fresh classification replaces the old state rather than mutating it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
  pub phase:    Phase,
  pub progress: f64,
}

/// Sunrise and sunset instants for one date, in naive local time. The engine
/// only compares instants, so no timezone math happens past this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarEvents {
  pub sunrise: NaiveDateTime,
  pub sunset:  NaiveDateTime,
}

impl SolarEvents {
  /// Fixed 06:00 / 18:00 stand-in for when no location is available.
  pub fn fallback(date: NaiveDate) -> SolarEvents {
    SolarEvents {
      sunrise: date.and_time(NaiveTime::from_hms_opt(6, 0, 0).unwrap()),
      sunset:  date.and_time(NaiveTime::from_hms_opt(18, 0, 0).unwrap()),
    }
  }
}

/// How far the transition band extends around a solar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionWindow {
  pub lead: Duration,
  pub lag:  Duration,
}

impl TransitionWindow {
  pub fn symmetric(minutes: i64) -> TransitionWindow {
    TransitionWindow { lead: Duration::minutes(minutes), lag: Duration::minutes(minutes) }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
  pub sunrise: TransitionWindow,
  pub sunset:  TransitionWindow,
}

impl Default for WindowConfig {
  fn default() -> WindowConfig {
    WindowConfig {
      sunrise: TransitionWindow::symmetric(45),
      // Dusk darkens later than the raw sunset instant, so the band starts
      // 10 minutes after and ends 13 minutes after the symmetric 45-minute
      // window would. Deliberately not mirrored on the sunrise side.
      sunset:  TransitionWindow {
        lead: Duration::minutes(45 - 10),
        lag:  Duration::minutes(45 + 13),
      },
    }
  }
}

/// Where "now" comes from. Injected so tests and demos can pin the clock
/// without any global mutable state.
pub trait TimeSource {
  fn now(&self) -> NaiveDateTime;
}

/// The wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
  fn now(&self) -> NaiveDateTime { Local::now().naive_local() }
}

/// Today's date at a fixed hour and minute. Only the comparison point moves;
/// sunrise and sunset stay untouched.
#[derive(Debug, Clone, Copy)]
pub struct PinnedTime {
  pub hour:   u32,
  pub minute: u32,
}

impl TimeSource for PinnedTime {
  fn now(&self) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(self.hour.min(23), self.minute.min(59), 0).unwrap();
    Local::now().date_naive().and_time(time)
  }
}

/// Classifies `now` against the two transition bands. The four intervals are
/// contiguous and non-overlapping, so exactly one phase comes back for any
/// instant.
pub fn classify(now: NaiveDateTime, events: &SolarEvents, windows: &WindowConfig) -> PhaseState {
  let sunrise_start = events.sunrise - windows.sunrise.lead;
  let sunrise_end = events.sunrise + windows.sunrise.lag;
  let sunset_start = events.sunset - windows.sunset.lead;
  let sunset_end = events.sunset + windows.sunset.lag;

  if now >= sunrise_start && now <= sunrise_end {
    PhaseState { phase: Phase::Sunrise, progress: fraction(now, sunrise_start, sunrise_end) }
  } else if now > sunrise_end && now < sunset_start {
    PhaseState { phase: Phase::Day, progress: 0.0 }
  } else if now >= sunset_start && now <= sunset_end {
    PhaseState { phase: Phase::Sunset, progress: fraction(now, sunset_start, sunset_end) }
  } else {
    PhaseState { phase: Phase::Night, progress: 0.0 }
  }
}

fn fraction(now: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
  let total = (end - start).num_milliseconds();
  if total <= 0 {
    // Zero-width window, nothing to interpolate across.
    return 0.0;
  }

  (now - start).num_milliseconds() as f64 / total as f64
}
