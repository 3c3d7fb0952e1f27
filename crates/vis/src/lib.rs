//! aquaprobe's dashboard rendering library.
//!
//! Turns validated station readings into the on-disk HTML dashboard:
//! summary cards, the history table, and the time-series chart. Every
//! render rewrites the page wholesale; there is no incremental update.

#![warn(missing_docs)]

pub(crate) mod id;
pub(crate) mod template;

pub mod chart;
pub mod dashboard;
pub mod error;
pub mod view;
