// Copyright 2026 the Tapestry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tapestry_text --heading-base-level=0

//! Tapestry Text: styled text compilation for tap-sensitive rich text.
//!
//! This crate turns an ordered list of text segments — plain strings and
//! "links" carrying an action tag — into a single [`StyledBuffer`]: the
//! concatenated text plus one styled run per segment. Link runs additionally
//! carry their tag as plain data, queryable by byte position, so a display
//! layer can map a hit-tested character back to "what to do" without the
//! buffer ever holding a callback.
//!
//! The buffer is deliberately dumb: it knows nothing about layout, gestures,
//! or rendering backends. Compilation is wholesale — callers regenerate the
//! buffer whenever the segment list or any style attribute changes, and assign
//! the result to their rendering surface in one step. There is no incremental
//! diffing.
//!
//! ## Action tags, not callbacks
//!
//! Runs are generic over the tag type `A` (any `Copy + Eq` key), so
//! applications can use whatever identifies an action in their world — an
//! index into a callback table, a generational handle, an enum. Keeping the
//! tag out-of-band from the visible style means the buffer stays serializable
//! and testable independent of callback identity.
//!
//! ## Minimal example
//!
//! ```rust
//! use tapestry_text::{ResolvedAttributes, Segment, StyledBuffer};
//!
//! let attrs = ResolvedAttributes::default();
//!
//! // Tag links with any application key type; here a plain index.
//! let buffer = StyledBuffer::compile(
//!     &[
//!         Segment::plain("ab"),
//!         Segment::link("cd", 0_u32),
//!         Segment::plain("ef"),
//!     ],
//!     &attrs,
//! );
//! assert_eq!(buffer.text(), "abcdef");
//!
//! // Any byte inside the link resolves to the same tag and the full span.
//! assert_eq!(buffer.action_at(2), Some((0, 2..4)));
//! assert_eq!(buffer.action_at(3), Some((0, 2..4)));
//! assert_eq!(buffer.action_at(0), None);
//! ```
//!
//! ## Attribute resolution
//!
//! [`ResolvedAttributes::resolve`] merges optional override records
//! ([`TextAttributes`], [`LinkAttributes`], [`SelectedLinkAttributes`]) with
//! view-level properties ([`BaseStyle`]) and documented defaults, in that
//! precedence order. An attribute resolved to "absent" (for example, no
//! background) is genuinely missing from the run rather than written as a
//! cleared value, so it never overrides inherited rendering.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod buffer;
mod style;

pub use buffer::{Segment, StyledBuffer, StyledRun};
pub use style::{
    BaseStyle, DEFAULT_FONT_SIZE, LinkAttributes, ResolvedAttributes, RunStyle,
    SELECTED_LINK_BACKGROUND, SelectedLinkAttributes, TextAttributes,
};
