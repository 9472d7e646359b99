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

//! Command line parsing.
//!
//! Arguments are parsed with `clap` and then checked into a [`Request`], which
//! names the tracking number and whether it is looked up on its own or
//! together with the numbers that follow it.

use std::ops::RangeInclusive;

use clap::Parser;
use thiserror::Error;

/// Number of results a batch lookup may ask for.
pub(crate) const SERIAL_RANGE: RangeInclusive<i64> = 1..=10;

#[derive(Debug, Parser)]
#[command(
    name = "kuroneko",
    about = "ヤマト運輸のステータス取得",
    override_usage = "kuroneko [OPTIONS] 伝票番号"
)]
pub(crate) struct Cli {
    /// 連番取得(10件まで)
    #[arg(short, long, allow_negative_numbers = true)]
    serial: Option<i64>,

    #[arg(value_name = "伝票番号")]
    numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CliError {
    #[error("伝票番号を入力してください")]
    MissingTrackingNumber,

    #[error("accepts at most 1 arg(s), received {count}")]
    TooManyArguments { count: usize },

    #[error("連番で取得できるのは 1~10件 までです")]
    SerialOutOfRange { serial: i64 },
}

/// How many shipments a lookup covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RequestMode {
    /// Only the entered tracking number.
    Single,
    /// The entered number followed by the next `count - 1` numbers.
    Batch { count: usize },
}

/// A validated lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Request {
    pub(crate) tracking_number: String,
    pub(crate) mode: RequestMode,
}

impl Cli {
    /// Checks the parsed arguments and builds the request they describe.
    ///
    /// Passing `--serial` always selects a batch lookup, even for a count of
    /// one.
    pub(crate) fn request(self) -> Result<Request, CliError> {
        if self.numbers.len() > 1 {
            return Err(CliError::TooManyArguments {
                count: self.numbers.len(),
            });
        }

        let tracking_number = self
            .numbers
            .into_iter()
            .next()
            .ok_or(CliError::MissingTrackingNumber)?;

        let mode = match self.serial {
            None => RequestMode::Single,
            Some(serial) if SERIAL_RANGE.contains(&serial) => RequestMode::Batch {
                count: serial as usize,
            },
            Some(serial) => return Err(CliError::SerialOutOfRange { serial }),
        };

        Ok(Request {
            tracking_number,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(args: &[&str]) -> Result<Request, CliError> {
        let argv = std::iter::once("kuroneko").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");
        cli.request()
    }

    #[test]
    fn many_args() {
        let err = request(&["00000000000", "000000000000"]).unwrap_err();
        assert_eq!(err, CliError::TooManyArguments { count: 2 });
        assert_eq!(err.to_string(), "accepts at most 1 arg(s), received 2");
    }

    #[test]
    fn no_args() {
        let err = request(&[]).unwrap_err();
        assert_eq!(err.to_string(), "伝票番号を入力してください");
    }

    #[test]
    fn over_serial() {
        let err = request(&["-s", "100", "00000000000"]).unwrap_err();
        assert_eq!(err, CliError::SerialOutOfRange { serial: 100 });
        assert_eq!(err.to_string(), "連番で取得できるのは 1~10件 までです");
    }

    #[test]
    fn few_serial() {
        let err = request(&["-s", "0", "00000000000"]).unwrap_err();
        assert_eq!(err.to_string(), "連番で取得できるのは 1~10件 までです");

        let err = request(&["--serial", "-3", "00000000000"]).unwrap_err();
        assert_eq!(err, CliError::SerialOutOfRange { serial: -3 });
    }

    #[test]
    fn single_lookup_without_serial() {
        let req = request(&["1234-5678-903"]).unwrap();
        assert_eq!(req.tracking_number, "1234-5678-903");
        assert_eq!(req.mode, RequestMode::Single);
    }

    #[test]
    fn serial_selects_batch() {
        assert_eq!(
            request(&["-s", "1", "12345678903"]).unwrap().mode,
            RequestMode::Batch { count: 1 }
        );
        assert_eq!(
            request(&["12345678903", "--serial", "10"]).unwrap().mode,
            RequestMode::Batch { count: 10 }
        );
    }

    #[test]
    fn non_numeric_serial_is_a_parse_error() {
        let parsed = Cli::try_parse_from(["kuroneko", "-s", "many", "12345678903"]);
        assert!(parsed.is_err());
    }
}
