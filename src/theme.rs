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

//! Output styling.
//!
//! Colour is carried in an explicit [`Theme`] value handed to whatever writes
//! output, so rendering stays free of global state and a plain theme can be
//! chosen whenever output is not going to a terminal.

use crossterm::style::{Color, Stylize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Theme {
    /// Colour of enumeration labels and error messages.
    pub(crate) highlight_colour: Option<Color>,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            highlight_colour: Some(Color::Yellow),
        }
    }

    /// A theme that leaves all text unstyled.
    pub(crate) const fn plain() -> Self {
        Self {
            highlight_colour: None,
        }
    }

    /// The default theme when `colour` is set, otherwise the plain one.
    pub(crate) const fn with_colour(colour: bool) -> Self {
        if colour {
            Self::default_theme()
        } else {
            Self::plain()
        }
    }

    /// Wraps `text` in the highlight colour, if there is one.
    pub(crate) fn highlight(&self, text: &str) -> String {
        match self.highlight_colour {
            Some(colour) => text.with(colour).to_string(),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_alone() {
        assert_eq!(Theme::plain().highlight("1件目"), "1件目");
        assert_eq!(Theme::with_colour(false), Theme::plain());
    }

    #[test]
    fn default_theme_highlights() {
        assert_eq!(Theme::with_colour(true), Theme::default());
        assert_eq!(Theme::default().highlight_colour, Some(Color::Yellow));
    }
}
