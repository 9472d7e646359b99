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

/// Full-width (ideographic) space used to pad report columns.
pub(crate) const FULL_WIDTH_SPACE: char = '\u{3000}';

/// First code point of every run of ten Unicode decimal digits (general
/// category `Nd`) as of Unicode 15, in ascending order.
const DECIMAL_DIGIT_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Returns the value of `ch` if it is a decimal digit in any script.
///
/// Scripts are those of the Unicode 15 `Nd` table above. Digits added in later
/// Unicode versions are rejected until the table is extended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(decimal_digit_value('7'), Some(7));
/// assert_eq!(decimal_digit_value('７'), Some(7));
/// assert_eq!(decimal_digit_value('七'), None);
/// ```
pub(crate) fn decimal_digit_value(ch: char) -> Option<u8> {
    if let Some(value) = ch.to_digit(10) {
        return Some(value as u8);
    }

    let code = u32::from(ch);
    let idx = DECIMAL_DIGIT_ZEROS.partition_point(|&zero| zero <= code);
    let zero = DECIMAL_DIGIT_ZEROS[idx.checked_sub(1)?];

    (code - zero < 10).then(|| (code - zero) as u8)
}

/// Number of characters in `text`, used as its column width in reports.
///
/// This counts Unicode scalar values, not terminal cells, so a wide glyph
/// counts the same as an ASCII letter.
pub(crate) fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Builds a run of `count` full-width spaces.
pub(crate) fn make_space(count: usize) -> String {
    std::iter::repeat_n(FULL_WIDTH_SPACE, count).collect()
}

/// Appends full-width spaces to `text` until it is `budget` characters wide.
///
/// Text already at or over budget is returned unchanged.
pub(crate) fn pad_to_budget(text: &str, budget: usize) -> String {
    let mut padded = String::from(text);
    padded.push_str(&make_space(budget.saturating_sub(char_width(text))));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_values_across_scripts() {
        assert_eq!(decimal_digit_value('0'), Some(0));
        assert_eq!(decimal_digit_value('９'), Some(9));
        assert_eq!(decimal_digit_value('٣'), Some(3));
        assert_eq!(decimal_digit_value('५'), Some(5));
        assert_eq!(decimal_digit_value('𝟘'), Some(0));
    }

    #[test]
    fn recognises_unicode_15_digits() {
        // Kawi and Nag Mundari were the two digit runs new in Unicode 15.
        assert_eq!(decimal_digit_value('\u{11F50}'), Some(0));
        assert_eq!(decimal_digit_value('\u{11F59}'), Some(9));
        assert_eq!(decimal_digit_value('\u{1E4F4}'), Some(4));
        assert_eq!(decimal_digit_value('\u{11F5A}'), None);
        assert_eq!(decimal_digit_value('\u{1E4FA}'), None);
    }

    #[test]
    fn non_digits_have_no_value() {
        for ch in ['a', '-', '七', 'Ⅻ', '½', '\u{3000}', '/', ':'] {
            assert_eq!(decimal_digit_value(ch), None, "{ch:?}");
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(char_width("配達完了"), 4);
        assert_eq!(char_width("abc"), 3);
        assert_eq!(char_width(""), 0);
    }

    #[test]
    fn pads_with_full_width_spaces() {
        assert_eq!(pad_to_budget("東京", 4), "東京\u{3000}\u{3000}");
        assert_eq!(pad_to_budget("", 2), "\u{3000}\u{3000}");
    }

    #[test]
    fn never_truncates() {
        assert_eq!(pad_to_budget("abcdef", 3), "abcdef");
    }
}
