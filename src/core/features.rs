//! Widget features
//!
//! Each feature lives in its own submodule and owns its domain logic;
//! the `api` layer wraps it in commands for the presentation layer.

pub mod measurement_converter;
