// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::EnrollConfig;

/// Get the default configuration.
pub fn default_config() -> EnrollConfig {
    EnrollConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# Enroll Configuration File
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Rule parameters
[rules]
# Highest credit load that still passes the credit-load rule
max_credit_load = 24

# Logging (RUST_LOG takes precedence)
[log]
level = "info"

# UI configuration
[ui]
color = true
emoji = true
"#
}
