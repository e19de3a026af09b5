//! Unit test harness for bipolar-stepper.
//!
//! This module organizes unit tests for each component of the library.

mod command_decoding;
mod config_parsing;
mod config_validation;
mod manifest_features;
mod sequence_laws;
