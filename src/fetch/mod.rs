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

//! Tracking lookups.
//!
//! A lookup posts one or more tracking numbers to the carrier's tracking form
//! and hands back the decoded HTML of the result page. Pulling shipment data
//! out of that page is the job of the [`extract`] module.

pub(crate) mod extract;

use std::time::Duration;

use anyhow::{Context, Result};
use encoding_rs::{Encoding, SHIFT_JIS};
use tracing::{debug, info};
use ureq::Agent;

/// Anything able to look up a set of tracking numbers.
pub(crate) trait ShipmentSource {
    /// Returns the result page for `tracking_numbers`, decoded to UTF-8.
    fn fetch(&self, tracking_numbers: &[String]) -> Result<String>;
}

/// Looks tracking numbers up through the carrier's web form.
pub(crate) struct HttpSource {
    agent: Agent,
    endpoint: String,
}

impl HttpSource {
    pub(crate) fn new(endpoint: &str, timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();

        Self {
            agent: config.into(),
            endpoint: endpoint.to_string(),
        }
    }
}

impl ShipmentSource for HttpSource {
    fn fetch(&self, tracking_numbers: &[String]) -> Result<String> {
        info!(
            endpoint = %self.endpoint,
            count = tracking_numbers.len(),
            "posting tracking request"
        );

        let mut response = self
            .agent
            .post(&self.endpoint)
            .send_form(form_fields(tracking_numbers))
            .with_context(|| format!("Failed to reach {}", self.endpoint))?;

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .body_mut()
            .read_to_vec()
            .context("Failed to read tracking response")?;

        Ok(decode_body(&bytes, content_type.as_deref()))
    }
}

/// Decodes a result page to UTF-8.
///
/// The charset declared in `content_type` is used when it names a known
/// encoding. Otherwise the page is read as Shift_JIS, which is what the
/// tracking form serves.
pub(crate) fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(declared_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(SHIFT_JIS);

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!(encoding = encoding.name(), "result page contained malformed sequences");
    }

    text.into_owned()
}

fn declared_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Builds the form fields for a lookup: `number00` holds the constant `1`,
/// then `number01`, `number02`, ... carry the tracking numbers in order.
pub(crate) fn form_fields(tracking_numbers: &[String]) -> Vec<(String, String)> {
    std::iter::once(("number00".to_string(), "1".to_string()))
        .chain(
            tracking_numbers
                .iter()
                .enumerate()
                .map(|(i, number)| (format!("number{:02}", i + 1), number.clone())),
        )
        .collect()
}
