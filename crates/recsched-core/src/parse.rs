//! # Schedule Parsing — Wire JSON to Model
//!
//! Hand-rolled decoding of the schedule wire format into [`Schedule`].
//! The walk is explicit rather than serde-derived so that every failure
//! carries the exact key and object path it occurred at, and so the
//! null-vs-omit quirks of the wire contract are handled deliberately
//! instead of falling out of derive defaults.
//!
//! ## Contract
//!
//! - `parse` either returns a fully-populated [`Schedule`] or fails;
//!   there is no partial result.
//! - Required keys that are absent fail with
//!   [`ScheduleError::MissingField`] naming the key and its containing
//!   object path.
//! - Present keys of the wrong JSON type fail with
//!   [`ScheduleError::TypeMismatch`]; values are never coerced.
//! - Optional keys may be absent or explicitly `null` — both read as
//!   unset.
//! - Free-text fields (window `start`/`end`, sensor `op`, ISO-8601
//!   instants) pass through unvalidated. Structural presence is the
//!   only thing checked here.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::ScheduleError;
use crate::model::{
    AudioTrigger, ContinuousPattern, Cycle, EventTrigger, Pattern, PatternType, Schedule,
    ScheduledPattern, SensorTrigger, Trigger, TriggerType, TriggeredPattern, Window,
    DEFAULT_VERSION,
};

type Object = Map<String, Value>;

impl FromStr for Schedule {
    type Err = ScheduleError;

    /// Parse a schedule from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::MalformedInput`] if the text is not
    /// valid JSON, otherwise any error [`Schedule::from_value`] can
    /// produce.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value)
    }
}

impl Schedule {
    /// Parse a schedule from an already-decoded JSON value.
    ///
    /// `version` defaults to [`DEFAULT_VERSION`] when absent. The
    /// `pattern_type` discriminator selects which nested object is
    /// read; that object is required, the other two keys are ignored
    /// entirely.
    ///
    /// # Errors
    ///
    /// See [`ScheduleError`] for the full taxonomy. Notably, a
    /// `windows` or `triggers` key must be present even when empty —
    /// `[]` is valid, a missing key is not.
    pub fn from_value(value: &Value) -> Result<Self, ScheduleError> {
        let root = value
            .as_object()
            .ok_or_else(|| mismatch("schedule", "document", "object"))?;

        let version = opt_string(root, "version", "schedule")?
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let pattern_type: PatternType = require_str(root, "pattern_type", "schedule")?.parse()?;

        let pattern = match pattern_type {
            PatternType::Continuous => {
                Pattern::Continuous(parse_continuous(require_object(root, "continuous", "schedule")?)?)
            }
            PatternType::Scheduled => {
                Pattern::Scheduled(parse_scheduled(require_object(root, "scheduled", "schedule")?)?)
            }
            PatternType::Triggered => {
                Pattern::Triggered(parse_triggered(require_object(root, "triggered", "schedule")?)?)
            }
        };

        Ok(Schedule { version, pattern })
    }
}

fn parse_continuous(obj: &Object) -> Result<ContinuousPattern, ScheduleError> {
    Ok(ContinuousPattern {
        start_at: opt_string(obj, "start_at", "continuous")?,
        end_at: opt_string(obj, "end_at", "continuous")?,
    })
}

fn parse_scheduled(obj: &Object) -> Result<ScheduledPattern, ScheduleError> {
    let cycle_obj = require_object(obj, "cycle", "scheduled")?;
    let cycle = Cycle {
        record_seconds: require_u32(cycle_obj, "record_seconds", "scheduled.cycle")?,
        sleep_seconds: require_u32(cycle_obj, "sleep_seconds", "scheduled.cycle")?,
    };

    let windows = require_array(obj, "windows", "scheduled")?
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_window(entry, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ScheduledPattern {
        windows,
        cycle,
        timezone: opt_string(obj, "timezone", "scheduled")?,
    })
}

fn parse_window(value: &Value, index: usize) -> Result<Window, ScheduleError> {
    let context = format!("scheduled.windows[{index}]");
    let obj = value
        .as_object()
        .ok_or_else(|| mismatch(&format!("windows[{index}]"), "scheduled", "object"))?;

    Ok(Window {
        window_type: require_str(obj, "window_type", &context)?.parse()?,
        start: require_str(obj, "start", &context)?.to_owned(),
        end: require_str(obj, "end", &context)?.to_owned(),
        days_of_week: opt_string_array(obj, "days_of_week", &context)?,
        months: opt_u32_array(obj, "months", &context)?,
    })
}

fn parse_triggered(obj: &Object) -> Result<TriggeredPattern, ScheduleError> {
    let triggers = require_array(obj, "triggers", "triggered")?
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_trigger(entry, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TriggeredPattern {
        triggers,
        max_duration: opt_u32(obj, "max_duration", "triggered")?,
    })
}

fn parse_trigger(value: &Value, index: usize) -> Result<Trigger, ScheduleError> {
    let context = format!("triggered.triggers[{index}]");
    let obj = value
        .as_object()
        .ok_or_else(|| mismatch(&format!("triggers[{index}]"), "triggered", "object"))?;

    let trigger_type: TriggerType = require_str(obj, "trigger_type", &context)?.parse()?;

    // Only the detail object named by the declared type is read; keys
    // belonging to the other trigger kinds are ignored. An absent
    // detail object is legal and leaves the payload unset.
    Ok(match trigger_type {
        TriggerType::Sensor => Trigger::Sensor(
            optional(obj, "sensor")
                .map(|v| parse_sensor(v, &context))
                .transpose()?,
        ),
        TriggerType::Audio => Trigger::Audio(
            optional(obj, "audio")
                .map(|v| parse_audio(v, &context))
                .transpose()?,
        ),
        TriggerType::Event => Trigger::Event(
            optional(obj, "event")
                .map(|v| parse_event(v, &context))
                .transpose()?,
        ),
    })
}

fn parse_sensor(value: &Value, parent: &str) -> Result<SensorTrigger, ScheduleError> {
    let context = format!("{parent}.sensor");
    let obj = value
        .as_object()
        .ok_or_else(|| mismatch("sensor", parent, "object"))?;

    Ok(SensorTrigger {
        kind: require_str(obj, "kind", &context)?.to_owned(),
        op: require_str(obj, "op", &context)?.to_owned(),
        threshold: require_f64(obj, "threshold", &context)?,
    })
}

fn parse_audio(value: &Value, parent: &str) -> Result<AudioTrigger, ScheduleError> {
    let context = format!("{parent}.audio");
    let obj = value
        .as_object()
        .ok_or_else(|| mismatch("audio", parent, "object"))?;

    // Wire key is `class`; the model field is `class_label`.
    Ok(AudioTrigger {
        class_label: require_str(obj, "class", &context)?.to_owned(),
        min_confidence: require_f64(obj, "min_confidence", &context)?,
    })
}

fn parse_event(value: &Value, parent: &str) -> Result<EventTrigger, ScheduleError> {
    let context = format!("{parent}.event");
    let obj = value
        .as_object()
        .ok_or_else(|| mismatch("event", parent, "object"))?;

    Ok(EventTrigger {
        name: require_str(obj, "name", &context)?.to_owned(),
        offset_seconds: opt_i32(obj, "offset_seconds", &context)?.unwrap_or(0),
    })
}

fn mismatch(field: &str, context: &str, expected: &'static str) -> ScheduleError {
    ScheduleError::TypeMismatch {
        field: field.to_string(),
        context: context.to_string(),
        expected,
    }
}

fn require<'a>(obj: &'a Object, field: &str, context: &str) -> Result<&'a Value, ScheduleError> {
    obj.get(field).ok_or_else(|| ScheduleError::MissingField {
        field: field.to_string(),
        context: context.to_string(),
    })
}

fn require_object<'a>(
    obj: &'a Object,
    field: &str,
    context: &str,
) -> Result<&'a Object, ScheduleError> {
    require(obj, field, context)?
        .as_object()
        .ok_or_else(|| mismatch(field, context, "object"))
}

fn require_array<'a>(
    obj: &'a Object,
    field: &str,
    context: &str,
) -> Result<&'a [Value], ScheduleError> {
    require(obj, field, context)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| mismatch(field, context, "array"))
}

fn require_str<'a>(obj: &'a Object, field: &str, context: &str) -> Result<&'a str, ScheduleError> {
    require(obj, field, context)?
        .as_str()
        .ok_or_else(|| mismatch(field, context, "string"))
}

fn require_u32(obj: &Object, field: &str, context: &str) -> Result<u32, ScheduleError> {
    require(obj, field, context)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| mismatch(field, context, "unsigned integer"))
}

fn require_f64(obj: &Object, field: &str, context: &str) -> Result<f64, ScheduleError> {
    require(obj, field, context)?
        .as_f64()
        .ok_or_else(|| mismatch(field, context, "number"))
}

/// Optional-key lookup. An explicit `null` reads the same as an absent
/// key, matching how the wire format round-trips unset optionals.
fn optional<'a>(obj: &'a Object, field: &str) -> Option<&'a Value> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn opt_string(obj: &Object, field: &str, context: &str) -> Result<Option<String>, ScheduleError> {
    optional(obj, field)
        .map(|v| {
            v.as_str()
                .map(str::to_owned)
                .ok_or_else(|| mismatch(field, context, "string"))
        })
        .transpose()
}

fn opt_u32(obj: &Object, field: &str, context: &str) -> Result<Option<u32>, ScheduleError> {
    optional(obj, field)
        .map(|v| {
            v.as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| mismatch(field, context, "unsigned integer"))
        })
        .transpose()
}

fn opt_i32(obj: &Object, field: &str, context: &str) -> Result<Option<i32>, ScheduleError> {
    optional(obj, field)
        .map(|v| {
            v.as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| mismatch(field, context, "integer"))
        })
        .transpose()
}

fn opt_string_array(
    obj: &Object,
    field: &str,
    context: &str,
) -> Result<Option<Vec<String>>, ScheduleError> {
    optional(obj, field)
        .map(|v| {
            v.as_array()
                .ok_or_else(|| mismatch(field, context, "array of strings"))?
                .iter()
                .map(|entry| {
                    entry
                        .as_str()
                        .map(str::to_owned)
                        .ok_or_else(|| mismatch(field, context, "array of strings"))
                })
                .collect()
        })
        .transpose()
}

fn opt_u32_array(
    obj: &Object,
    field: &str,
    context: &str,
) -> Result<Option<Vec<u32>>, ScheduleError> {
    optional(obj, field)
        .map(|v| {
            v.as_array()
                .ok_or_else(|| mismatch(field, context, "array of integers"))?
                .iter()
                .map(|entry| {
                    entry
                        .as_u64()
                        .and_then(|n| u32::try_from(n).ok())
                        .ok_or_else(|| mismatch(field, context, "array of integers"))
                })
                .collect()
        })
        .transpose()
}
