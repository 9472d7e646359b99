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

//! Terminal environment detection.
//!
//! Colour escape sequences are only useful when a person is reading the
//! output. These helpers decide whether report and error output should be
//! styled.

use std::{env, io::IsTerminal};

/// Returns `true` if the user asked for uncoloured output through the
/// `NO_COLOR` convention (any non-empty value).
pub(crate) fn no_colour_requested() -> bool {
    env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Returns `true` if standard output is attached to a terminal and colour has
/// not been disabled through the environment.
pub(crate) fn stdout_supports_colour() -> bool {
    std::io::stdout().is_terminal() && !no_colour_requested()
}

/// Same as [`stdout_supports_colour`], for standard error.
pub(crate) fn stderr_supports_colour() -> bool {
    std::io::stderr().is_terminal() && !no_colour_requested()
}
