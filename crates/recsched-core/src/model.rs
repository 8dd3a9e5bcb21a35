//! # Schedule Data Model
//!
//! Value types for recording schedules. A schedule selects exactly one
//! of three recording patterns; the mutually exclusive "one variant
//! populated" rule of the wire format is expressed here as tagged enums
//! ([`Pattern`], [`Trigger`]), so a schedule carrying two pattern
//! bodies, or a sensor trigger with an audio payload, is not
//! representable at all.
//!
//! These are inert data: no evaluation of windows, cycles, or solar
//! offsets happens here, and there is no mutation API. "Update" means
//! constructing a new value. All types are plain owned data, so they
//! are `Send + Sync` and safe to share across threads.

use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Version string assumed for documents that do not declare one.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Root object: a complete recording schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// Schema version of the document, e.g. `"0.1.0"`.
    pub version: String,
    /// The active recording pattern.
    pub pattern: Pattern,
}

/// The three top-level recording strategies.
///
/// The wire format carries a `pattern_type` discriminator plus a nested
/// object under the matching key; here the discriminator is the enum
/// variant itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Record continuously, optionally bounded by start/end instants.
    Continuous(ContinuousPattern),
    /// Record on a duty cycle within recurring time windows.
    Scheduled(ScheduledPattern),
    /// Record when a trigger condition fires.
    Triggered(TriggeredPattern),
}

impl Pattern {
    /// Returns the discriminator tag for this pattern.
    pub fn pattern_type(&self) -> PatternType {
        match self {
            Self::Continuous(_) => PatternType::Continuous,
            Self::Scheduled(_) => PatternType::Scheduled,
            Self::Triggered(_) => PatternType::Triggered,
        }
    }
}

/// Closed set of pattern discriminator values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternType {
    Continuous,
    Scheduled,
    Triggered,
}

impl PatternType {
    /// Returns the wire string for this pattern type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::Scheduled => "scheduled",
            Self::Triggered => "triggered",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternType {
    type Err = ScheduleError;

    /// Parse a pattern type from its wire string. Case-sensitive;
    /// unknown values are rejected, never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "continuous" => Ok(Self::Continuous),
            "scheduled" => Ok(Self::Scheduled),
            "triggered" => Ok(Self::Triggered),
            other => Err(ScheduleError::UnknownPatternType {
                value: other.to_string(),
            }),
        }
    }
}

/// Continuous recording, optionally bounded.
///
/// Both bounds absent means: start immediately, record indefinitely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContinuousPattern {
    /// ISO-8601 instant at which to start, if bounded. Passed through
    /// as text; the codec does not parse datetimes.
    pub start_at: Option<String>,
    /// ISO-8601 instant at which to stop, if bounded.
    pub end_at: Option<String>,
}

/// Duty-cycled recording within recurring time windows.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledPattern {
    /// Active windows, in document order. Order is meaningful and is
    /// preserved across a parse/serialize round trip.
    pub windows: Vec<Window>,
    /// Record/sleep duty cycle applied within active windows.
    pub cycle: Cycle,
    /// IANA timezone name, e.g. `"Asia/Tokyo"`. `None` leaves the
    /// interpretation (UTC vs. device-local) to the recorder.
    pub timezone: Option<String>,
}

/// A recurring time window during which a scheduled pattern is active.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Whether `start`/`end` are clock times or solar-relative offsets.
    pub window_type: WindowType,
    /// Window start: `"HH:MM"` for fixed windows, `"sunrise-10m"` style
    /// for solar. Free text here; the grammar is not validated.
    pub start: String,
    /// Window end, same format family as `start`.
    pub end: String,
    /// Days of week the window applies to (e.g. `["Mon", "Tue"]`).
    /// `None` means every day.
    pub days_of_week: Option<Vec<String>>,
    /// Months (1–12) the window applies to. `None` means every month.
    pub months: Option<Vec<u32>>,
}

/// Closed set of window kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowType {
    /// Fixed clock-time window.
    Fixed,
    /// Solar-relative window (sunrise/sunset offsets).
    Solar,
}

impl WindowType {
    /// Returns the wire string for this window type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Solar => "solar",
        }
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowType {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Self::Fixed),
            "solar" => Ok(Self::Solar),
            other => Err(ScheduleError::UnknownWindowType {
                value: other.to_string(),
            }),
        }
    }
}

/// Record/sleep duty cycle. Both fields are required on the wire; there
/// are no implicit defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// Seconds to record per cycle.
    pub record_seconds: u32,
    /// Seconds to sleep between recordings.
    pub sleep_seconds: u32,
}

/// Trigger-driven recording.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggeredPattern {
    /// Trigger conditions, in document order.
    pub triggers: Vec<Trigger>,
    /// Cap in seconds on a single triggered recording, if any.
    pub max_duration: Option<u32>,
}

/// A single trigger condition.
///
/// The wire format declares a `trigger_type` plus an optional detail
/// object under the matching key. A declared type with no detail
/// payload is legal (the recorder falls back to its own defaults), so
/// each variant carries an `Option`.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// Threshold comparison on a sensor reading.
    Sensor(Option<SensorTrigger>),
    /// Audio classifier detection.
    Audio(Option<AudioTrigger>),
    /// Abstract named event.
    Event(Option<EventTrigger>),
}

impl Trigger {
    /// Returns the discriminator tag for this trigger.
    pub fn trigger_type(&self) -> TriggerType {
        match self {
            Self::Sensor(_) => TriggerType::Sensor,
            Self::Audio(_) => TriggerType::Audio,
            Self::Event(_) => TriggerType::Event,
        }
    }
}

/// Closed set of trigger discriminator values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerType {
    Sensor,
    Audio,
    Event,
}

impl TriggerType {
    /// Returns the wire string for this trigger type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sensor => "sensor",
            Self::Audio => "audio",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerType {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sensor" => Ok(Self::Sensor),
            "audio" => Ok(Self::Audio),
            "event" => Ok(Self::Event),
            other => Err(ScheduleError::UnknownTriggerType {
                value: other.to_string(),
            }),
        }
    }
}

/// Sensor threshold trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorTrigger {
    /// Sensor kind, e.g. `"temperature_c"`, `"light_lux"`, `"battery_v"`.
    pub kind: String,
    /// Comparison operator, conventionally one of `>`, `>=`, `<`, `<=`.
    /// Not validated here; the recorder interprets it.
    pub op: String,
    /// Threshold value the reading is compared against.
    pub threshold: f64,
}

/// Audio classification trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioTrigger {
    /// Label of the audio class to detect, e.g. `"bird"`. Serialized
    /// under the wire key `class`.
    pub class_label: String,
    /// Minimum classifier confidence, conventionally 0.0–1.0.
    pub min_confidence: f64,
}

/// Named-event trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTrigger {
    /// Event name, e.g. `"rain_stopped"`.
    pub name: String,
    /// Offset in seconds relative to the event. Defaults to 0 when the
    /// wire omits it.
    pub offset_seconds: i32,
}
