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

//! Domain models and core data structures.
//!
//! This module defines the shipment data handed to the report renderer once
//! it has been extracted from a tracking response.

/// The text fields of one detail row, in column order.
///
/// Fields are plain decoded text. A field the upstream data did not supply
/// reads as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FieldRecord {
    fields: Vec<String>,
}

impl FieldRecord {
    pub(crate) fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn field(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }
}

/// Everything reported for a single tracking number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ShipmentBlock {
    /// Enumeration label such as "1件目", present in batch results.
    pub(crate) label: Option<String>,
    /// Title and status summary lines.
    pub(crate) headlines: Vec<String>,
    pub(crate) records: Vec<FieldRecord>,
    /// Close the block with a blank line and rule even when it is empty.
    pub(crate) always_closed: bool,
}

impl ShipmentBlock {
    /// Returns `true` if the block carries any label, headline or record.
    pub(crate) fn has_detail(&self) -> bool {
        self.label.is_some() || !self.headlines.is_empty() || !self.records.is_empty()
    }

    /// Returns `true` if the block ends with a blank line and rule.
    pub(crate) fn is_closed(&self) -> bool {
        self.always_closed || self.has_detail()
    }
}
