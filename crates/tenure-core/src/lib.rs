//! Core types and the duration engine for the tenure experience tracker.
//!
//! This crate is deliberately free of storage and rendering dependencies.
//! The engine in [`duration`] is a set of pure functions over calendar dates;
//! every "current date" it needs is passed in explicitly.

pub mod duration;
pub mod error;
pub mod format;
pub mod interval;
pub mod store;
pub mod validate;

pub use duration::{
  AggregateDuration, AggregationStrategy, Duration, aggregate_durations,
  aggregate_with, calculate_duration,
};
pub use error::{Error, Result};
pub use format::format_duration;
