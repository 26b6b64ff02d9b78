// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for enroll.
//!
//! This module handles locating, parsing and validating `enroll.toml`.
//! Configuration only parameterizes rules; which rules run is decided in
//! code by whoever builds the registration service.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, find_config_file_from, load_config, load_config_from, parse_config};
pub use schema::*;
