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

//! Adjacent tracking number generation.
//!
//! Consecutive parcels from the same sender usually carry consecutive base
//! numbers, so a batch lookup walks forward from the entered number, giving
//! each step a freshly computed check digit.
//!
//! Two forms are provided:
//!
//! * [`Candidates`] is a plain iterator computing each number on demand.
//! * [`CandidateSequence`] drives a [`Candidates`] from a background worker
//!   thread and hands numbers over a rendezvous channel, one at a time, until
//!   it is cancelled.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{self, Receiver, SyncSender},
    },
    thread::{self, JoinHandle},
};

use tracing::{debug, warn};

use super::checksum::check_digit_of;

const SHORT_BASE_LEN: usize = 10;
const SHORT_WIDTH: usize = 11;
const LONG_WIDTH: usize = 12;

/// Width of generated identifiers for the given base digits.
///
/// A 10 digit base comes from an 11 digit tracking number, anything else is
/// treated as the 12 digit form.
pub(crate) fn digit_width_for(base_digits: &str) -> usize {
    if base_digits.len() == SHORT_BASE_LEN {
        SHORT_WIDTH
    } else {
        LONG_WIDTH
    }
}

/// Formats a base value and its check digit, zero padded to `digit_width`.
///
/// Values too large for the width are not truncated.
pub(crate) fn format_candidate(value: u64, digit_width: usize) -> String {
    format!(
        "{:0>w$}{}",
        value,
        check_digit_of(value),
        w = digit_width.saturating_sub(1)
    )
}

/// An on-demand, ascending run of tracking numbers.
#[derive(Debug, Clone)]
pub(crate) struct Candidates {
    next: Option<u64>,
    digit_width: usize,
}

impl Candidates {
    pub(crate) fn new(start: u64, digit_width: usize) -> Self {
        Self {
            next: Some(start),
            digit_width,
        }
    }

    /// Starts the run at the value of `base_digits`.
    ///
    /// `base_digits` is expected to be ASCII digits, as returned by
    /// [`NormalizedIdentifier::base_digits`](super::NormalizedIdentifier::base_digits).
    pub(crate) fn from_base_digits(base_digits: &str, digit_width: usize) -> Self {
        let start = base_digits
            .bytes()
            .filter(u8::is_ascii_digit)
            .fold(0u64, |acc, b| {
                acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
            });

        Self::new(start, digit_width)
    }
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.next?;
        self.next = value.checked_add(1);
        Some(format_candidate(value, self.digit_width))
    }
}

/// A cancellable stream of tracking numbers produced by a worker thread.
///
/// The worker blocks on a zero-capacity channel after computing each number,
/// so nothing runs ahead of the consumer. Dropping the sequence cancels it.
pub(crate) struct CandidateSequence {
    candidate_rx: Option<Receiver<String>>,
    cancelled: Arc<AtomicBool>,
    worker: Option<JoinHandle<usize>>,
}

impl CandidateSequence {
    /// Spawns the worker thread for the run starting at `base_digits`.
    ///
    /// # Arguments
    ///
    /// * `base_digits` - The tracking number without its check digit.
    /// * `digit_width` - The full width of each generated number, check digit
    ///   included (see [`digit_width_for`]).
    pub(crate) fn generate(base_digits: &str, digit_width: usize) -> Self {
        let candidates = Candidates::from_base_digits(base_digits, digit_width);

        let (candidate_tx, candidate_rx) = mpsc::sync_channel(0);
        let cancelled = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&cancelled);
        let worker = thread::spawn(move || produce(candidates, &candidate_tx, &flag));

        Self {
            candidate_rx: Some(candidate_rx),
            cancelled,
            worker: Some(worker),
        }
    }

    /// Blocks until the worker hands over the next number.
    ///
    /// Returns `None` once the sequence is exhausted or cancelled.
    pub(crate) fn recv(&self) -> Option<String> {
        self.candidate_rx.as_ref()?.recv().ok()
    }

    /// Receives exactly `n` numbers, in order, then cancels the worker.
    ///
    /// Fewer than `n` numbers are returned only if the run ran out of values.
    pub(crate) fn take(self, n: usize) -> Vec<String> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            match self.recv() {
                Some(candidate) => taken.push(candidate),
                None => break,
            }
        }

        self.cancel();
        taken
    }

    /// Stops the worker and waits for it to exit.
    pub(crate) fn cancel(mut self) {
        self.shutdown();
    }

    /// Signals the worker to stop, releases it from any pending handoff and
    /// joins it.
    ///
    /// Returns how many numbers the worker computed, or `None` if it had
    /// already been joined or panicked.
    fn shutdown(&mut self) -> Option<usize> {
        self.cancelled.store(true, Ordering::Release);

        // A worker parked in `send` is released by the receiver going away.
        drop(self.candidate_rx.take());

        match self.worker.take()?.join() {
            Ok(computed) => Some(computed),
            Err(_) => {
                warn!("candidate worker panicked");
                None
            }
        }
    }
}

impl Drop for CandidateSequence {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

/// Feeds candidates into the handoff until cancelled, returning how many
/// were computed.
fn produce(
    mut candidates: Candidates,
    candidate_tx: &SyncSender<String>,
    cancelled: &AtomicBool,
) -> usize {
    let mut computed = 0usize;

    loop {
        if cancelled.load(Ordering::Acquire) {
            break;
        }

        let Some(candidate) = candidates.next() else {
            break;
        };
        computed += 1;

        if candidate_tx.send(candidate).is_err() {
            break;
        }
    }

    debug!(computed, "candidate worker stopped");
    computed
}
