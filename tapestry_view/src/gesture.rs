// Copyright 2026 the Tapestry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture inputs, dispatch responses, and recognizer configuration.
//!
//! The platform gesture primitive stays external: it delivers begin,
//! zero-or-more moves, then exactly one of end/cancel, strictly sequential
//! for a single tracked touch. This module defines the event shape the view
//! consumes, the response it hands back, and the construction-time policy
//! that decides whether the recognizer may prevent competing recognizers.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;

/// Minimum press duration, in seconds, for the underlying recognizer.
///
/// The recognizer is a long-press-style recognizer configured with this very
/// short minimum so it behaves like an immediate tap with movement tracking.
pub const MIN_PRESS_DURATION: f64 = 0.1;

/// One gesture callback from the recognizer.
///
/// `Began` carries the touch point twice: in the text view's coordinate space
/// (for hit-testing) and in window coordinates (recorded as the drift
/// origin). Moves report window coordinates only, so displacement stays
/// stable across any scrolling or transform of the text view itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// The recognizer began tracking a touch.
    Began {
        /// Touch location in view coordinates.
        point: Point,
        /// The same location in window coordinates.
        window_point: Point,
    },
    /// The touch moved while tracked.
    Moved {
        /// Current location in window coordinates.
        window_point: Point,
    },
    /// The touch lifted normally.
    Ended,
    /// The platform revoked the touch, or the host force-cancelled the
    /// recognizer after a [`GestureResponse::CancelRequested`].
    Cancelled,
}

/// What the dispatcher wants the host to do with the event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GestureResponse {
    /// Not handled. On begin this means "no link here": leave the recognizer
    /// free to fail or pass the touch through to competing recognizers.
    Ignored,
    /// The event was consumed by press tracking.
    Claimed,
    /// The touch drifted past the slop tolerance: the host must force its
    /// recognizer into the cancelled state. The resulting
    /// [`GestureEvent::Cancelled`] callback is the single cancellation path.
    CancelRequested,
}

/// What a competing gesture recognizer is attached to, as far as the
/// prevention policy cares.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GestureTarget {
    /// The competing recognizer belongs to a scrollable ancestor.
    Scrollable,
    /// Anything else.
    Other,
}

/// Construction-time configuration for the recognizer the host owns.
///
/// Preventability is a policy function supplied at construction rather than a
/// recognizer subclass: the host consults [`RecognizerConfig::can_prevent`]
/// when the platform asks whether this recognizer may prevent another one.
/// The default policy declines to prevent recognizers attached to scrollable
/// ancestors, so a scroll container beneath the text can still receive the
/// gesture when the touch lands on plain text.
pub struct RecognizerConfig {
    /// Minimum press duration in seconds. Defaults to [`MIN_PRESS_DURATION`].
    pub min_press_duration: f64,
    prevention: Box<dyn Fn(GestureTarget) -> bool>,
}

impl RecognizerConfig {
    /// A configuration with an explicit prevention policy.
    pub fn new(
        min_press_duration: f64,
        prevention: impl Fn(GestureTarget) -> bool + 'static,
    ) -> Self {
        Self {
            min_press_duration,
            prevention: Box::new(prevention),
        }
    }

    /// Whether this recognizer may prevent a competing recognizer attached to
    /// `target`.
    pub fn can_prevent(&self, target: GestureTarget) -> bool {
        (self.prevention)(target)
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self::new(MIN_PRESS_DURATION, |target| {
            !matches!(target, GestureTarget::Scrollable)
        })
    }
}

impl fmt::Debug for RecognizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecognizerConfig")
            .field("min_press_duration", &self.min_press_duration)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_declines_scrollable_targets() {
        let config = RecognizerConfig::default();
        assert!(!config.can_prevent(GestureTarget::Scrollable));
        assert!(config.can_prevent(GestureTarget::Other));
        assert_eq!(config.min_press_duration, MIN_PRESS_DURATION);
    }

    #[test]
    fn custom_policy_is_consulted() {
        let config = RecognizerConfig::new(0.25, |_| true);
        assert!(config.can_prevent(GestureTarget::Scrollable));
        assert_eq!(config.min_press_duration, 0.25);
    }
}
