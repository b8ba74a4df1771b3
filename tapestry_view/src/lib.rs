// Copyright 2026 the Tapestry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tapestry_view --heading-base-level=0

//! Tapestry View: a tap-sensitive link text component.
//!
//! [`LinkText`] owns an ordered sequence of [`TextPiece`] segments — plain
//! strings and links bound to zero-argument callbacks — and drives the whole
//! tap pipeline on top of an external text layout:
//!
//! 1. Segments compile into a [`tapestry_text::StyledBuffer`] (one styled run
//!    per segment, link runs tagged with an [`ActionId`] into the view's
//!    action table), assigned wholesale to the host on every change.
//! 2. Gesture begin/move/end/cancel callbacks arrive as [`GestureEvent`]s.
//!    On begin, a hit-test maps the touch point through the host's
//!    point→character query to a link's action and effective range.
//! 3. While pressing, the tracked range is restyled with the selected-link
//!    attribute set; movement past the slop tolerance asks the host to force
//!    its recognizer into the cancelled state.
//! 4. On end, the highlight reverts, the press clears, and the action fires —
//!    strictly in that order, so a reentrant action observes a clean view.
//!    On cancel, the same revert runs and no action fires.
//!
//! The component never remains visually highlighted after a gesture concludes,
//! whatever the cause.
//!
//! ## Collaborators
//!
//! Layout and rendering stay external behind [`TextHost`]: assign a styled
//! buffer, request a redraw, answer a point→character query with a
//! fraction-of-distance. The platform gesture primitive stays external too;
//! its configuration lives in [`RecognizerConfig`], including the prevention
//! policy that keeps this recognizer from blocking a scrollable ancestor's.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use tapestry_text::StyledBuffer;
//! use tapestry_view::{
//!     ActionId, CharacterHit, GestureEvent, GestureResponse, LinkText, TextHost, TextPiece,
//! };
//!
//! // A host with trivial fixed metrics: one line, 10 units per character.
//! #[derive(Default)]
//! struct FixedHost {
//!     text: String,
//!     redraws: usize,
//! }
//!
//! impl TextHost for FixedHost {
//!     fn set_buffer(&mut self, buffer: &StyledBuffer<ActionId>) {
//!         self.text = buffer.text().into();
//!     }
//!     fn request_redraw(&mut self) {
//!         self.redraws += 1;
//!     }
//!     fn character_for_point(&self, point: Point) -> Option<CharacterHit> {
//!         let slot = (point.x / 10.0).floor();
//!         if slot < 0.0 || self.text.is_empty() {
//!             return None;
//!         }
//!         let index = (slot as usize).min(self.text.len() - 1);
//!         let fraction = if slot as usize >= self.text.len() { 1.0 } else { 0.5 };
//!         Some(CharacterHit { index, fraction })
//!     }
//! }
//!
//! let mut host = FixedHost::default();
//! let mut view = LinkText::new();
//!
//! let taps = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&taps);
//! view.set_texts(
//!     vec![
//!         TextPiece::plain("ab"),
//!         TextPiece::link("cd", move || counter.set(counter.get() + 1)),
//!         TextPiece::plain("ef"),
//!     ],
//!     &mut host,
//! );
//!
//! // Tap inside the link: begin claims the touch, end fires the action.
//! let begin = GestureEvent::Began {
//!     point: Point::new(25.0, 5.0),
//!     window_point: Point::new(25.0, 5.0),
//! };
//! assert_eq!(view.handle_gesture(begin, &mut host), GestureResponse::Claimed);
//! assert_eq!(view.handle_gesture(GestureEvent::Ended, &mut host), GestureResponse::Claimed);
//! assert_eq!(taps.get(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod gesture;
mod host;
mod view;

pub use gesture::{
    GestureEvent, GestureResponse, GestureTarget, MIN_PRESS_DURATION, RecognizerConfig,
};
pub use host::{CharacterHit, ContentInset, TextHost};
pub use view::{Action, ActionId, LinkText, TextPiece};
