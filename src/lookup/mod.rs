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

//! Request orchestration.
//!
//! Ties the pieces of a lookup together: validate the tracking number, work
//! out which numbers to ask for, fetch the result page, extract the shipment
//! blocks and render them. Validation failures end the request before any
//! network traffic.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    cli::{Request, RequestMode},
    fetch::{ShipmentSource, extract},
    model::ShipmentBlock,
    report::{self, Layout},
    theme::Theme,
    tracking::{self, candidates::CandidateSequence},
};

/// Everything needed to turn a [`Request`] into report text.
pub(crate) struct LookupContext<'a, S: ShipmentSource> {
    pub(crate) source: &'a S,
    pub(crate) layout: &'a Layout,
    pub(crate) theme: &'a Theme,
}

/// Works out the tracking numbers a request covers.
///
/// # Errors
///
/// Returns a [`tracking::TrackingError`] if the entered number is malformed
/// or its check digit is wrong.
pub(crate) fn tracking_numbers(request: &Request) -> Result<Vec<String>> {
    let id = tracking::parse(&request.tracking_number)?;
    debug!(tracking_number = %id, mode = ?request.mode, "validated tracking number");

    let numbers = match request.mode {
        RequestMode::Single => vec![id.to_string()],
        RequestMode::Batch { count } => {
            let sequence = CandidateSequence::generate(id.base_digits(), id.digit_width());
            sequence.take(count)
        }
    };

    info!(?numbers, "looking up tracking numbers");
    Ok(numbers)
}

/// Performs the lookup described by `request` and renders the report.
pub(crate) fn lookup<S: ShipmentSource>(
    request: &Request,
    ctx: &LookupContext<'_, S>,
) -> Result<String> {
    let numbers = tracking_numbers(request)?;
    let html = ctx.source.fetch(&numbers)?;

    let blocks = match request.mode {
        RequestMode::Single => vec![extract::extract_single(&html)?],
        RequestMode::Batch { .. } => extract::extract_batch(&html)?,
    };

    if !blocks.iter().any(ShipmentBlock::has_detail) {
        warn!(?numbers, "no shipment information found in the result page");
    }

    Ok(report::render_report(&blocks, ctx.layout, ctx.theme))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{report::layout::CLASSIC_RULE_WIDTH, tracking::TrackingError};

    /// Records what was asked for and answers with a canned page.
    struct CannedSource {
        page: String,
        requests: RefCell<Vec<Vec<String>>>,
    }

    impl CannedSource {
        fn new(page: &str) -> Self {
            Self {
                page: page.to_string(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl ShipmentSource for CannedSource {
        fn fetch(&self, tracking_numbers: &[String]) -> Result<String> {
            self.requests.borrow_mut().push(tracking_numbers.to_vec());
            Ok(self.page.clone())
        }
    }

    fn request(number: &str, mode: RequestMode) -> Request {
        Request {
            tracking_number: number.to_string(),
            mode,
        }
    }

    fn run(source: &CannedSource, req: &Request) -> Result<String> {
        let layout = Layout::shipment_status(CLASSIC_RULE_WIDTH);
        let theme = Theme::plain();
        let ctx = LookupContext {
            source,
            layout: &layout,
            theme: &theme,
        };
        lookup(req, &ctx)
    }

    #[test]
    fn single_lookup_posts_the_normalized_number() {
        let source = CannedSource::new(
            r#"<table class="saisin"><tr><td class="font14">配達完了</td></tr></table>"#,
        );

        let req = request("1234-5678-903", RequestMode::Single);
        let text = run(&source, &req).unwrap();

        assert_eq!(*source.requests.borrow(), [vec!["12345678903".to_string()]]);
        assert_eq!(text, format!(" 配達完了\n\n{}\n", "-".repeat(99)));
    }

    #[test]
    fn batch_lookup_posts_adjacent_numbers() {
        let source = CannedSource::new(
            r#"<center><table class="saisin"><tr><td class="number">1件目</td></tr></table>
               </center>
               <center><table class="saisin"><tr><td class="number">2件目</td></tr></table>
               </center>"#,
        );

        let req = request("12345678903", RequestMode::Batch { count: 3 });
        let text = run(&source, &req).unwrap();

        assert_eq!(
            *source.requests.borrow(),
            [vec![
                "12345678903".to_string(),
                "12345678914".to_string(),
                "12345678925".to_string(),
            ]]
        );
        assert!(text.starts_with(" 1件目\n\n"));
        assert!(text.contains(" 2件目\n\n"));
    }

    #[test]
    fn empty_single_page_still_prints_the_rule() {
        let source = CannedSource::new("<html><body></body></html>");

        let req = request("12345678903", RequestMode::Single);
        let text = run(&source, &req).unwrap();

        assert_eq!(text, format!("\n{}\n", "-".repeat(99)));
    }

    #[test]
    fn invalid_numbers_never_reach_the_source() {
        let source = CannedSource::new("");

        for (number, expected) in [
            ("12a345678901", TrackingError::InvalidCharacter { ch: 'a' }),
            ("123", TrackingError::InvalidLength { len: 3 }),
            (
                "12345678905",
                TrackingError::ChecksumMismatch {
                    expected: 3,
                    found: 5,
                },
            ),
        ] {
            let req = request(number, RequestMode::Batch { count: 2 });
            let err = run(&source, &req).unwrap_err();
            assert_eq!(err.downcast_ref::<TrackingError>(), Some(&expected));
        }

        assert!(source.requests.borrow().is_empty());
    }
}
