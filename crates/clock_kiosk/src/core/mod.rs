//! # World Clock Kiosk Core
//!
//! Timezone-aware clock computations and meeting-window detection for the
//! kiosk display.
//!
//! ## Features
//! - Current time and calendar date for any IANA timezone
//! - UTC offset computation at minute resolution
//! - Recurring meeting-window detection (±5 minutes, weekday sets)
//! - Three-cadence tick scheduling (clocks, date, meeting checks)
//!
//! ## Modules
//! - `error`: Custom error types and error handling
//! - `frame`: Per-tick render frame assembly
//! - `matcher`: Meeting-window detection
//! - `models`: Data structures for configuration and render output
//! - `provider`: Core timezone operations and time calculations
//! - `ticker`: Repeating tick tasks feeding the presentation loop
//! - `utils`: Helper functions for formatting

pub mod error;
pub mod frame;
pub mod matcher;
pub mod models;
pub mod provider;
pub mod ticker;
pub mod utils;
