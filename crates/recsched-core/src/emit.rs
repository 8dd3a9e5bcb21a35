//! # Schedule Serialization — Model to Wire JSON
//!
//! The inverse of [`crate::parse`], with the wire contract's asymmetric
//! null policy reproduced exactly:
//!
//! - Optional scalar and list fields (`start_at`, `end_at`, `timezone`,
//!   `days_of_week`, `months`, `max_duration`) are always emitted,
//!   explicit `null` when unset. Parsing tolerates their absence;
//!   serialization never omits them.
//! - Trigger detail objects (`sensor`/`audio`/`event`) are the one
//!   exception: omitted entirely when unset, never emitted as `null`.
//!
//! A first round trip therefore turns absent optionals into explicit
//! nulls; a second round trip is a fixed point.
//!
//! Serialization is infallible. [`Pattern`] is a tagged enum, so the
//! output always contains exactly the variant key named by
//! `pattern_type`.

use serde_json::{json, Map, Value};

use crate::model::{Pattern, Schedule, Trigger, TriggeredPattern, Window};

impl Schedule {
    /// Serialize this schedule to its wire JSON value.
    ///
    /// The output contains `version`, `pattern_type`, and the single
    /// nested object matching the pattern type. It parses back to a
    /// value equal to `self`.
    pub fn to_value(&self) -> Value {
        let mut root = Map::new();
        root.insert("version".to_string(), Value::String(self.version.clone()));
        root.insert(
            "pattern_type".to_string(),
            Value::String(self.pattern.pattern_type().as_str().to_string()),
        );

        let (key, body) = match &self.pattern {
            Pattern::Continuous(continuous) => (
                "continuous",
                json!({
                    "start_at": &continuous.start_at,
                    "end_at": &continuous.end_at,
                }),
            ),
            Pattern::Scheduled(scheduled) => (
                "scheduled",
                json!({
                    "timezone": &scheduled.timezone,
                    "cycle": {
                        "record_seconds": scheduled.cycle.record_seconds,
                        "sleep_seconds": scheduled.cycle.sleep_seconds,
                    },
                    "windows": scheduled.windows.iter().map(emit_window).collect::<Vec<_>>(),
                }),
            ),
            Pattern::Triggered(triggered) => ("triggered", emit_triggered(triggered)),
        };
        root.insert(key.to_string(), body);

        Value::Object(root)
    }
}

fn emit_window(window: &Window) -> Value {
    json!({
        "window_type": window.window_type.as_str(),
        "start": &window.start,
        "end": &window.end,
        "days_of_week": &window.days_of_week,
        "months": &window.months,
    })
}

fn emit_triggered(triggered: &TriggeredPattern) -> Value {
    json!({
        "max_duration": triggered.max_duration,
        "triggers": triggered.triggers.iter().map(emit_trigger).collect::<Vec<_>>(),
    })
}

fn emit_trigger(trigger: &Trigger) -> Value {
    let mut item = Map::new();
    item.insert(
        "trigger_type".to_string(),
        Value::String(trigger.trigger_type().as_str().to_string()),
    );

    // Detail objects are omitted when unset, not emitted as null.
    match trigger {
        Trigger::Sensor(Some(sensor)) => {
            item.insert(
                "sensor".to_string(),
                json!({
                    "kind": &sensor.kind,
                    "op": &sensor.op,
                    "threshold": sensor.threshold,
                }),
            );
        }
        Trigger::Audio(Some(audio)) => {
            // Model field `class_label` rides under the wire key `class`.
            item.insert(
                "audio".to_string(),
                json!({
                    "class": &audio.class_label,
                    "min_confidence": audio.min_confidence,
                }),
            );
        }
        Trigger::Event(Some(event)) => {
            item.insert(
                "event".to_string(),
                json!({
                    "name": &event.name,
                    "offset_seconds": event.offset_seconds,
                }),
            );
        }
        Trigger::Sensor(None) | Trigger::Audio(None) | Trigger::Event(None) => {}
    }

    Value::Object(item)
}
