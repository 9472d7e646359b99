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

//! Shipment data extraction from tracking result pages.
//!
//! The result page lays each shipment out as two tables:
//!
//! * `.saisin` holds the summary. A cell with class `number` carries the
//!   enumeration label of a batch result, cells with class `bold` or `font14`
//!   carry the title and current status.
//! * `.meisai` holds the event history, one row per event after a heading
//!   row. Cells 1 to 5 are status, date, time, location and code.
//!
//! A batch result page wraps every shipment in its own `center` element.

use anyhow::{Result, anyhow};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::model::{FieldRecord, ShipmentBlock};

const HEADLINE_CLASSES: [&str; 2] = ["bold", "font14"];
const LABEL_CLASS: &str = "number";

/// Position of the first detail cell in a history row.
const FIRST_DETAIL_CELL: usize = 1;
/// Number of detail cells read from a history row.
const DETAIL_CELLS: usize = 5;

struct Selectors {
    shipment: Selector,
    summary_cell: Selector,
    history_row: Selector,
    cell: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            shipment: parse_selector("center")?,
            summary_cell: parse_selector(".saisin td")?,
            history_row: parse_selector(".meisai tr")?,
            cell: parse_selector("td")?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| anyhow!("Invalid selector {css:?}: {e:?}"))
}

/// Extracts the single shipment described by a one-number result page.
///
/// The block is always closed, so even an empty page prints its rule.
pub(crate) fn extract_single(html: &str) -> Result<ShipmentBlock> {
    let selectors = Selectors::new()?;
    let document = Html::parse_document(html);

    let mut block = extract_block(document.root_element(), &selectors);
    block.always_closed = true;

    Ok(block)
}

/// Extracts one block per shipment from a batch result page, in page order.
pub(crate) fn extract_batch(html: &str) -> Result<Vec<ShipmentBlock>> {
    let selectors = Selectors::new()?;
    let document = Html::parse_document(html);

    let blocks: Vec<ShipmentBlock> = document
        .select(&selectors.shipment)
        .map(|shipment| extract_block(shipment, &selectors))
        .collect();

    debug!(blocks = blocks.len(), "extracted batch result");
    Ok(blocks)
}

fn extract_block(root: ElementRef<'_>, selectors: &Selectors) -> ShipmentBlock {
    let mut block = ShipmentBlock::default();

    for cell in root.select(&selectors.summary_cell) {
        let classes: Vec<&str> = cell.value().classes().collect();

        if classes.contains(&LABEL_CLASS) && block.label.is_none() {
            block.label = Some(cell_text(cell));
        }

        if HEADLINE_CLASSES.iter().any(|c| classes.contains(c)) {
            block.headlines.push(cell_text(cell));
        }
    }

    block.records = root
        .select(&selectors.history_row)
        .skip(1)
        .map(|row| {
            let cells = row
                .select(&selectors.cell)
                .skip(FIRST_DETAIL_CELL)
                .take(DETAIL_CELLS)
                .map(cell_text);
            FieldRecord::new(cells)
        })
        .collect();

    block
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
