//! Decoding and validation of water station sensor readings.
//!
//! The station endpoint reports observations for a fixed set of eight
//! sensor kinds. This crate owns that enumeration, the per-language
//! display-label catalog, and the conversion of wire readings into
//! validated [`Reading`](reading::Reading) values.

pub mod catalog;
pub mod error;
pub mod reading;
pub mod sensor;
