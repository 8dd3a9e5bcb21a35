//! # Error Types — Codec Failure Taxonomy
//!
//! Every way a schedule document can fail to parse, as a structured
//! `thiserror` enum. Errors carry enough context to point at the exact
//! key and containing object, so a validator frontend can report
//! `missing required field 'cycle' in scheduled` rather than a bare
//! "invalid input".
//!
//! ## Design
//!
//! - Missing-key and wrong-type failures name the field and the path of
//!   the object that holds it.
//! - Closed-set (enum) failures name the offending value; the display
//!   string lists the accepted set.
//! - There are no recoverable variants: the codec never produces a
//!   partially-populated schedule.

use thiserror::Error;

/// Top-level error type for schedule parsing.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The supplied text is not syntactically valid JSON.
    #[error("malformed JSON input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A structurally required key is absent.
    #[error("missing required field '{field}' in {context}")]
    MissingField {
        /// Name of the absent key.
        field: String,
        /// Path of the object that should contain it, e.g. `scheduled.cycle`.
        context: String,
    },

    /// `pattern_type` holds a string outside the closed set.
    #[error("unknown pattern type {value:?} (expected one of: continuous, scheduled, triggered)")]
    UnknownPatternType {
        /// The offending value.
        value: String,
    },

    /// `trigger_type` holds a string outside the closed set.
    #[error("unknown trigger type {value:?} (expected one of: sensor, audio, event)")]
    UnknownTriggerType {
        /// The offending value.
        value: String,
    },

    /// `window_type` holds a string outside the closed set.
    #[error("unknown window type {value:?} (expected one of: fixed, solar)")]
    UnknownWindowType {
        /// The offending value.
        value: String,
    },

    /// A present key holds a value of the wrong JSON type. The codec
    /// never coerces; a numeric string is not a number.
    #[error("field '{field}' in {context} has the wrong type (expected {expected})")]
    TypeMismatch {
        /// Name of the offending key.
        field: String,
        /// Path of the object that contains it.
        context: String,
        /// Human-readable description of the expected JSON type.
        expected: &'static str,
    },
}
