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

//! Plain text shipment reports.
//!
//! Rows are aligned by padding fields with full-width spaces up to a
//! character budget. Widths are measured in characters, not terminal cells,
//! which keeps columns lined up against each other as long as every padded
//! field is East Asian text. ASCII content in a padded field makes that row
//! narrower on screen than its neighbours.
//!
//! Rendering has no side effects: the same blocks and layout always produce
//! the same text.

pub(crate) mod layout;

use std::fmt::Write;

use crate::{
    model::{FieldRecord, ShipmentBlock},
    theme::Theme,
    util::format::pad_to_budget,
};

pub(crate) use layout::Layout;

use layout::{Column, RULE_CHAR};

/// Renders one detail row, without a trailing newline.
///
/// Padded cells are closed directly by `|`, other cells by ` |`, and cells
/// are separated by a single space.
pub(crate) fn render_row(record: &FieldRecord, layout: &Layout) -> String {
    let cells: Vec<String> = layout
        .columns
        .iter()
        .map(|column| render_cell(record.field(column.field), column))
        .collect();

    format!(" {}", cells.join(" "))
}

fn render_cell(value: &str, column: &Column) -> String {
    match (column.budget, column.blank_width) {
        (Some(budget), _) => format!("{}|", pad_to_budget(value, budget)),
        (None, Some(width)) if value.is_empty() => format!("{} |", " ".repeat(width)),
        _ => format!("{value} |"),
    }
}

/// Renders every record as a row, one per line.
pub(crate) fn render(records: &[FieldRecord], layout: &Layout) -> String {
    records.iter().fold(String::new(), |mut out, record| {
        out.push_str(&render_row(record, layout));
        out.push('\n');
        out
    })
}

/// The rule line closing a block, without a trailing newline.
pub(crate) fn render_rule(layout: &Layout) -> String {
    std::iter::repeat_n(RULE_CHAR, layout.rule_width).collect()
}

/// Renders shipment blocks in order.
///
/// Each block is its label and header lines followed by, when the block
/// carries any content or is marked always closed, a blank line, the detail
/// rows and the rule. The
/// theme only styles label text.
pub(crate) fn render_report(blocks: &[ShipmentBlock], layout: &Layout, theme: &Theme) -> String {
    let mut out = String::new();
    for block in blocks {
        render_block(&mut out, block, layout, theme);
    }
    out
}

fn render_block(out: &mut String, block: &ShipmentBlock, layout: &Layout, theme: &Theme) {
    if let Some(label) = &block.label {
        let _ = writeln!(out, " {}", theme.highlight(label));
    }

    for line in &block.headlines {
        let _ = writeln!(out, " {line}");
    }

    if !block.is_closed() {
        return;
    }

    out.push('\n');
    out.push_str(&render(&block.records, layout));
    out.push_str(&render_rule(layout));
    out.push('\n');
}
