// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.

use panelsmith_geometry::DEFAULT_CIRCLE_SEGMENTS;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Segments per full circle in generated outlines.
    pub circle_segments: usize,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            circle_segments: lookup("PANELSMITH_CIRCLE_SEGMENTS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&n: &usize| n >= 3)
                .unwrap_or(DEFAULT_CIRCLE_SEGMENTS),
            log_filter: lookup("PANELSMITH_LOG")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "info".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
