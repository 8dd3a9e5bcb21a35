//! # recsched-core — Recording-Schedule Schema & Codec
//!
//! Defines the recording-schedule data model for autonomous recorders
//! (passive acoustic monitors and similar duty-cycled devices) and a
//! lossless codec between the JSON wire format and the typed model.
//!
//! A schedule picks exactly one of three recording patterns:
//!
//! - **continuous** — record from an optional start until an optional end;
//! - **scheduled** — record on a duty cycle inside recurring clock-time
//!   or solar-relative windows;
//! - **triggered** — record when a sensor threshold, audio detection,
//!   or named event fires.
//!
//! ## Key Design Principles
//!
//! 1. **Tagged unions over optional-field soup.** The wire format's
//!    "`pattern_type` plus exactly one populated body" rule is a Rust
//!    enum ([`Pattern`], likewise [`Trigger`]); mismatched variants are
//!    unrepresentable rather than merely unchecked.
//!
//! 2. **Structural validation only.** The codec enforces key presence,
//!    JSON types, and closed enum sets. It does not interpret window
//!    grammars, comparator strings, or confidence ranges; those pass
//!    through for the recorder to evaluate.
//!
//! 3. **Errors name the path.** Every failure is a [`ScheduleError`]
//!    variant carrying the offending key and its containing object
//!    path. No silent coercion, no partial results.
//!
//! 4. **Exact round trip.** `parse` tolerates absent optional keys;
//!    `serialize` always emits them as explicit `null` (except trigger
//!    detail objects, which are omitted when unset). One round trip
//!    normalizes a document; the second is a fixed point.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Parsing and serialization are pure functions over owned data,
//!   safe to call from any number of threads.

pub mod emit;
pub mod error;
pub mod model;
pub mod parse;

// Re-export primary types for ergonomic imports.
pub use error::ScheduleError;
pub use model::{
    AudioTrigger, ContinuousPattern, Cycle, EventTrigger, Pattern, PatternType, Schedule,
    ScheduledPattern, SensorTrigger, Trigger, TriggerType, TriggeredPattern, Window, WindowType,
    DEFAULT_VERSION,
};
