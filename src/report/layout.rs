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

//! Column layouts for detail rows.

/// Character used for the rule line closing each shipment block.
pub(crate) const RULE_CHAR: char = '-';

/// Rule width of the classic result format.
pub(crate) const CLASSIC_RULE_WIDTH: usize = 99;
/// Rule width of the compact result format.
pub(crate) const COMPACT_RULE_WIDTH: usize = 90;

/// Field positions of a shipment status record.
pub(crate) mod status {
    pub(crate) const STATUS: usize = 0;
    pub(crate) const DATE: usize = 1;
    pub(crate) const TIME: usize = 2;
    pub(crate) const LOCATION: usize = 3;
    pub(crate) const CODE: usize = 4;
}

/// Width of a `MM/DD` date or `HH:MM` time, used for the blank placeholder.
const DATE_TIME_WIDTH: usize = 5;

/// How one field of a record is placed in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Column {
    pub(crate) field: usize,
    /// Character width the field is padded to with full-width spaces.
    pub(crate) budget: Option<usize>,
    /// Width of the ASCII blank substituted for an empty field.
    pub(crate) blank_width: Option<usize>,
}

impl Column {
    /// A field written as is.
    pub(crate) const fn plain(field: usize) -> Self {
        Self {
            field,
            budget: None,
            blank_width: None,
        }
    }

    /// A field padded to `budget` characters.
    pub(crate) const fn padded(field: usize, budget: usize) -> Self {
        Self {
            field,
            budget: Some(budget),
            blank_width: None,
        }
    }

    /// A field replaced by `width` spaces when empty.
    pub(crate) const fn blank_when_empty(field: usize, width: usize) -> Self {
        Self {
            field,
            budget: None,
            blank_width: Some(width),
        }
    }
}

/// The ordered columns of a detail row plus the width of the closing rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    pub(crate) columns: Vec<Column>,
    pub(crate) rule_width: usize,
}

impl Layout {
    pub(crate) fn new(columns: Vec<Column>, rule_width: usize) -> Self {
        Self {
            columns,
            rule_width,
        }
    }

    /// Status, date, time, location and code of a tracking event.
    pub(crate) fn shipment_status(rule_width: usize) -> Self {
        Self::new(
            vec![
                Column::padded(status::STATUS, 15),
                Column::blank_when_empty(status::DATE, DATE_TIME_WIDTH),
                Column::blank_when_empty(status::TIME, DATE_TIME_WIDTH),
                Column::padded(status::LOCATION, 20),
                Column::plain(status::CODE),
            ],
            rule_width,
        )
    }
}
