// Copyright 2026 the Tapestry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tapestry_press --heading-base-level=0

//! Tapestry Press: a single-touch press state machine with drift cancellation.
//!
//! This crate tracks exactly one in-progress press: Idle → Pressing → Idle,
//! with Pressing entered via [`PressState::begin`] and left via exactly one of
//! [`PressState::release`] or [`PressState::cancel`]. While pressing, the
//! machine answers one geometric question — has the touch drifted beyond the
//! per-axis slop tolerance from where it began? — and leaves everything else
//! (hit-testing, highlight styling, action dispatch) to the caller.
//!
//! ## Design
//!
//! - **Minimal and focused**: one interaction pattern, one slot of state.
//! - **Generic**: the tracked press carries an application-specific action key
//!   (`A`), so any ID type works — an index, a handle, an enum.
//! - **Integration-friendly**: the machine never forces a cancellation itself.
//!   When [`PressState::drift_exceeded`] reports `true`, the caller forces its
//!   gesture recognizer into the cancelled state, and the resulting cancel
//!   callback routes back through [`PressState::cancel`] — one cancellation
//!   path regardless of cause.
//!
//! The begin location is expected in *window* coordinates, so displacement
//! stays stable across any scrolling or transform of the view the text lives
//! in.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tapestry_press::PressState;
//!
//! let mut press = PressState::new();
//!
//! // A hit-test succeeded at gesture-begin: track the press.
//! press.begin(42_u32, 2..4, Point::new(100.0, 100.0));
//! assert!(press.is_pressing());
//!
//! // Small movement stays within the slop tolerance.
//! assert!(!press.drift_exceeded(Point::new(120.0, 110.0)));
//! // 50 units of horizontal drift exceeds it.
//! assert!(press.drift_exceeded(Point::new(150.0, 100.0)));
//!
//! // On gesture-end, take the press and fire its action.
//! let ended = press.release().unwrap();
//! assert_eq!(ended.action, 42);
//! assert_eq!(ended.range, 2..4);
//! assert!(!press.is_pressing());
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`
use kurbo::Point;

use core::ops::Range;

/// Per-axis movement tolerance, in logical units, before a press is treated
/// as a drag or scroll rather than a tap. Matches the standard minimum
/// touch-target size of 44×44.
pub const DRIFT_TOLERANCE: f64 = 44.0;

/// The one in-progress press: action key, highlighted byte range, and the
/// begin location in window coordinates.
///
/// Created on a successful hit at gesture-begin, read and cleared at
/// gesture-end or gesture-cancel. The stored range lets the caller revert
/// highlight styling without a second hit-test. A press never outlives a
/// single gesture cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivePress<A> {
    /// The action key recorded at begin.
    pub action: A,
    /// The byte range highlighted for the duration of the press.
    pub range: Range<usize>,
    /// Where the press began, in window coordinates.
    pub origin: Point,
}

/// Tracks at most one press at a time.
///
/// The underlying gesture recognizer serializes its own state transitions
/// (begin, zero-or-more moves, then exactly one of end/cancel), so the
/// machine never sees a second begin while a press is pending.
#[derive(Clone, Debug)]
pub struct PressState<A> {
    active: Option<ActivePress<A>>,
    tolerance: f64,
}

impl<A> Default for PressState<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> PressState<A> {
    /// An idle machine with the default [`DRIFT_TOLERANCE`].
    pub fn new() -> Self {
        Self::with_tolerance(DRIFT_TOLERANCE)
    }

    /// An idle machine with a custom per-axis tolerance.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            active: None,
            tolerance,
        }
    }

    /// The per-axis tolerance in effect.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The in-progress press, if any.
    pub fn active(&self) -> Option<&ActivePress<A>> {
        self.active.as_ref()
    }

    /// Returns `true` while a press is being tracked.
    pub fn is_pressing(&self) -> bool {
        self.active.is_some()
    }

    /// Start tracking a press after a successful hit-test.
    ///
    /// `origin` is the begin location in window coordinates.
    pub fn begin(&mut self, action: A, range: Range<usize>, origin: Point) {
        debug_assert!(
            self.active.is_none(),
            "begin while a press is pending; the recognizer serializes transitions"
        );
        self.active = Some(ActivePress {
            action,
            range,
            origin,
        });
    }

    /// Whether `window_point` has drifted beyond the tolerance on either axis.
    ///
    /// Returns `false` while idle. The caller reacts to `true` by forcing its
    /// recognizer into the cancelled state; the machine itself takes no
    /// action, so the subsequent cancel callback is the single path that
    /// clears the press.
    pub fn drift_exceeded(&self, window_point: Point) -> bool {
        match &self.active {
            Some(press) => {
                let delta = window_point - press.origin;
                delta.x.abs() > self.tolerance || delta.y.abs() > self.tolerance
            }
            None => false,
        }
    }

    /// End the press successfully, returning it so the caller can revert
    /// highlighting and then invoke the action. `None` while idle.
    pub fn release(&mut self) -> Option<ActivePress<A>> {
        self.active.take()
    }

    /// End the press without success (drift-forced or externally revoked),
    /// returning it so the caller can revert highlighting. The action is not
    /// to be invoked. `None` while idle.
    pub fn cancel(&mut self) -> Option<ActivePress<A>> {
        self.active.take()
    }
}
