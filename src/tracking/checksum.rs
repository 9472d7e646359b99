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

//! Mod-7 check digit.
//!
//! The check digit is the base number modulo 7, so it is always in `0..=6`.
//! Base numbers are up to 11 digits long and do not fit in 32 bits.

use super::NormalizedIdentifier;

const MODULUS: u64 = 7;

/// Computes the check digit for a run of ASCII decimal digits.
///
/// The remainder is folded digit by digit, so the result is correct for base
/// numbers of any length.
pub(crate) fn compute_check_digit(base_digits: &str) -> u8 {
    let remainder = base_digits.bytes().fold(0u64, |acc, b| {
        debug_assert!(b.is_ascii_digit(), "base digits must be ASCII digits");
        (acc * 10 + u64::from(b - b'0')) % MODULUS
    });

    remainder as u8
}

/// Computes the check digit for a base number already held as an integer.
pub(crate) fn check_digit_of(value: u64) -> u8 {
    (value % MODULUS) as u8
}

/// Returns `true` if the identifier's final digit matches its base digits.
pub(crate) fn verify_check_digit(id: &NormalizedIdentifier) -> bool {
    compute_check_digit(id.base_digits()) == id.check_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::normalize;

    // Deterministic spread of base values across the 10 and 11 digit ranges.
    fn sample_bases() -> impl Iterator<Item = u64> {
        (0..500u64).flat_map(|i| {
            let step = i.wrapping_mul(2_654_435_761) % 10_000_000_000;
            [step, 10_000_000_000 + step * 9]
        })
    }

    fn identifier_for(base: u64, width: usize) -> String {
        format!("{:0>w$}{}", base, check_digit_of(base), w = width - 1)
    }

    #[test]
    fn string_and_integer_forms_agree() {
        for base in sample_bases() {
            assert_eq!(compute_check_digit(&base.to_string()), check_digit_of(base));
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(compute_check_digit("0000000000"), 0);
        assert_eq!(compute_check_digit("1234567890"), 3);
        assert_eq!(compute_check_digit("12345678901"), 3);
        assert_eq!(compute_check_digit("99999999999"), 4);
    }

    #[test]
    fn leading_zeros_do_not_change_the_digit() {
        assert_eq!(compute_check_digit("00123456789"), compute_check_digit("123456789"));
    }

    #[test]
    fn accepts_correct_check_digits() {
        for base in sample_bases() {
            let width = if base < 10_000_000_000 { 11 } else { 12 };
            let id = normalize(&identifier_for(base, width)).unwrap();
            assert!(verify_check_digit(&id), "{id} should verify");
        }
    }

    #[test]
    fn rejects_every_altered_check_digit() {
        for base in sample_bases().take(100) {
            let width = if base < 10_000_000_000 { 11 } else { 12 };
            let valid = identifier_for(base, width);
            let (body, last) = valid.split_at(valid.len() - 1);

            for digit in (b'0'..=b'9').map(char::from) {
                if last.starts_with(digit) {
                    continue;
                }
                let altered = normalize(&format!("{body}{digit}")).unwrap();
                assert!(!verify_check_digit(&altered), "{altered} should not verify");
            }
        }
    }
}
