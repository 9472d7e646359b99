// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. Missing or
//! unreadable configuration falls back to the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::report::{
    Layout,
    layout::{CLASSIC_RULE_WIDTH, COMPACT_RULE_WIDTH},
};

const CONFIG_NAME: &str = "kuroneko";

const DEFAULT_ENDPOINT: &str = "http://toi.kuronekoyamato.co.jp/cgi-bin/tneko";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shape of the rendered report.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ResultFormat {
    #[default]
    Classic,
    Compact,
}

impl ResultFormat {
    pub(crate) fn layout(self) -> Layout {
        match self {
            ResultFormat::Classic => Layout::shipment_status(CLASSIC_RULE_WIDTH),
            ResultFormat::Compact => Layout::shipment_status(COMPACT_RULE_WIDTH),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) endpoint: String,
    pub(crate) timeout_secs: u64,
    pub(crate) result_format: ResultFormat,
    pub(crate) colour: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            result_format: ResultFormat::default(),
            colour: true,
        }
    }
}

impl AppConfig {
    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub(crate) fn load_config() -> AppConfig {
    match confy::load(CONFIG_NAME, None) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration, using defaults: {e}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_tracking_form() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.result_format, ResultFormat::Classic);
        assert!(config.colour);
    }

    #[test]
    fn result_format_selects_rule_width() {
        assert_eq!(ResultFormat::Classic.layout().rule_width, 99);
        assert_eq!(ResultFormat::Compact.layout().rule_width, 90);
        assert_eq!(
            ResultFormat::Classic.layout().columns,
            ResultFormat::Compact.layout().columns
        );
    }
}
