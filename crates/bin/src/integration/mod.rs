//! Integration module for the command-line pipeline.
//!
//! Reads a timestamp column from CSV, runs the calendar encoders and writes
//! the dummy columns back out as CSV or JSON.

pub(crate) mod calendar_encoder;
pub(crate) mod csv_io;
pub(crate) mod error;
