//! Seed Writer — deterministic daily type readings.
//!
//! Takes a name, its hiragana reading and a date of birth, derives a stable
//! per-day seed, sorts the person into one of six types and renders short
//! Japanese text from fixed templates. Every stage is a pure function of the
//! request and the injected clock.

pub mod core;
pub mod schema;

pub use crate::core::clock::{Clock, FixedClock, SystemClock};
pub use crate::core::pipeline::{BuildError, GenerateError, SeedWriter};
pub use crate::schema::category::Category;
pub use crate::schema::request::{Field, GenerationRequest, OutputMode};
pub use crate::schema::result::GenerationResult;
