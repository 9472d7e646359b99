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

//! Tracking number validation and candidate generation.
//!
//! A tracking number is entered by hand, so it may carry separators (such as
//! hyphens) and may have been typed with non-ASCII digits. This module turns
//! that raw text into a [`NormalizedIdentifier`]: a string of 11 or 12 ASCII
//! digits whose final digit is a check digit over the rest.
//!
//! # Sub-modules
//!
//! * [`checksum`]: Computing and verifying the mod-7 check digit.
//! * [`candidates`]: Deriving the run of adjacent tracking numbers used for
//!   batch lookups.

pub(crate) mod candidates;
pub(crate) mod checksum;

use std::fmt;

use thiserror::Error;

use crate::util::format::decimal_digit_value;

/// Accepted tracking number lengths, check digit included.
const VALID_LENGTHS: [usize; 2] = [11, 12];

/// Characters that may appear between digit groups and are removed before
/// validation.
const SEPARATORS: [char; 6] = ['-', '\u{2010}', '\u{2212}', '\u{FF0D}', ' ', '\u{3000}'];

/// Validation failures for a user supplied tracking number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum TrackingError {
    #[error("不正な数値です")]
    InvalidCharacter { ch: char },

    #[error("12 or 11桁の伝票番号を入力してください")]
    InvalidLength { len: usize },

    #[error("伝票番号に誤りがあります")]
    ChecksumMismatch { expected: u8, found: u8 },
}

/// A tracking number reduced to 11 or 12 ASCII digits.
///
/// The only way to obtain one is through [`normalize`], so every value upholds
/// the digit and length invariants. The check digit is *not* implied; use
/// [`NormalizedIdentifier::verify`] for that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct NormalizedIdentifier(String);

impl NormalizedIdentifier {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits preceding the check digit.
    pub(crate) fn base_digits(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }

    /// The trailing check digit.
    pub(crate) fn check_digit(&self) -> u8 {
        self.0.as_bytes()[self.0.len() - 1] - b'0'
    }

    /// Width of the identifiers generated from this one's base digits.
    pub(crate) fn digit_width(&self) -> usize {
        candidates::digit_width_for(self.base_digits())
    }

    /// Confirms the check digit, returning the identifier on success.
    pub(crate) fn verify(self) -> Result<Self, TrackingError> {
        if checksum::verify_check_digit(&self) {
            return Ok(self);
        }

        Err(TrackingError::ChecksumMismatch {
            expected: checksum::compute_check_digit(self.base_digits()),
            found: self.check_digit(),
        })
    }
}

impl fmt::Display for NormalizedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strips separators from `raw` and checks it is an 11 or 12 digit number.
///
/// Any Unicode 15 decimal digit is accepted and folded to its ASCII form, so
/// a number typed with full-width digits normalizes to the same identifier as
/// its ASCII spelling.
///
/// # Errors
///
/// * [`TrackingError::InvalidCharacter`] if anything other than a decimal
///   digit remains once separators are removed.
/// * [`TrackingError::InvalidLength`] if the digit count is neither 11 nor 12.
pub(crate) fn normalize(raw: &str) -> Result<NormalizedIdentifier, TrackingError> {
    let mut digits = String::with_capacity(raw.len());

    for ch in raw.chars().filter(|c| !SEPARATORS.contains(c)) {
        let Some(value) = decimal_digit_value(ch) else {
            return Err(TrackingError::InvalidCharacter { ch });
        };
        digits.push(char::from(b'0' + value));
    }

    if !VALID_LENGTHS.contains(&digits.len()) {
        return Err(TrackingError::InvalidLength { len: digits.len() });
    }

    Ok(NormalizedIdentifier(digits))
}

/// Normalizes `raw` and verifies its check digit in one step.
pub(crate) fn parse(raw: &str) -> Result<NormalizedIdentifier, TrackingError> {
    normalize(raw)?.verify()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_hyphens() {
        let id = normalize("000-0000-0000").unwrap();
        assert_eq!(id.as_str(), "00000000000");
    }

    #[test]
    fn rejects_letters() {
        assert_eq!(
            normalize("12a345678901"),
            Err(TrackingError::InvalidCharacter { ch: 'a' })
        );
    }

    #[test]
    fn rejects_short_and_long_numbers() {
        assert_eq!(normalize("123"), Err(TrackingError::InvalidLength { len: 3 }));
        assert_eq!(
            normalize("1234567890123"),
            Err(TrackingError::InvalidLength { len: 13 })
        );
        assert_eq!(normalize("---"), Err(TrackingError::InvalidLength { len: 0 }));
    }

    #[test]
    fn character_errors_win_over_length_errors() {
        assert!(matches!(
            normalize("1x"),
            Err(TrackingError::InvalidCharacter { ch: 'x' })
        ));
    }

    #[test]
    fn folds_full_width_digits() {
        let id = normalize("１２３４－５６７８－９０１２").unwrap();
        assert_eq!(id.as_str(), "123456789012");
    }

    #[test]
    fn folds_other_decimal_scripts() {
        // Arabic-Indic digits
        let id = normalize("٠١٢٣٤٥٦٧٨٩٠").unwrap();
        assert_eq!(id.as_str(), "01234567890");
    }

    #[test]
    fn rejects_non_decimal_numerics() {
        assert!(matches!(
            normalize("1234567890Ⅻ"),
            Err(TrackingError::InvalidCharacter { ch: 'Ⅻ' })
        ));
    }

    #[test]
    fn splits_base_and_check_digit() {
        let id = normalize("1234-5678-9012").unwrap();
        assert_eq!(id.base_digits(), "12345678901");
        assert_eq!(id.check_digit(), 2);
        assert_eq!(id.digit_width(), 12);

        let id = normalize("123-4567-8906").unwrap();
        assert_eq!(id.base_digits(), "1234567890");
        assert_eq!(id.digit_width(), 11);
    }

    #[test]
    fn parse_reports_checksum_mismatch() {
        // 1234567890 % 7 == 3
        assert_eq!(parse("1234-5678-903").unwrap().as_str(), "12345678903");
        assert_eq!(
            parse("12345678905"),
            Err(TrackingError::ChecksumMismatch {
                expected: 3,
                found: 5
            })
        );
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            TrackingError::InvalidLength { len: 3 }.to_string(),
            "12 or 11桁の伝票番号を入力してください"
        );
        assert_eq!(
            TrackingError::ChecksumMismatch {
                expected: 0,
                found: 1
            }
            .to_string(),
            "伝票番号に誤りがあります"
        );
    }
}
