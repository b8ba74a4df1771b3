// Copyright 2026 the Tapestry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The text surface collaborator: buffer assignment, redraw requests, and the
//! point→character layout query.

use kurbo::Point;
use tapestry_text::StyledBuffer;

use crate::view::ActionId;

/// Content inset of the text container, subtracted from touch points to map
/// view coordinates into text-layout coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContentInset {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the left edge.
    pub left: f64,
}

/// Result of the layout engine's nearest-character query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CharacterHit {
    /// Byte index of the nearest character in the assigned buffer.
    pub index: usize,
    /// Fraction of the distance between the surrounding insertion points.
    /// A value ≥ 1.0 means the nearest boundary is past the glyph rather
    /// than on it, and the point misses the text entirely.
    pub fraction: f64,
}

/// The rendering surface and layout engine the view drives.
///
/// Line breaking, glyph positioning, and drawing are black boxes behind this
/// trait: the view assigns a compiled buffer wholesale, asks for redraws, and
/// queries the nearest character for a point. All calls happen on the UI
/// execution context, in gesture-callback order.
pub trait TextHost {
    /// Assign the compiled buffer, replacing any previous content.
    fn set_buffer(&mut self, buffer: &StyledBuffer<ActionId>);

    /// Ask the surface to redraw.
    fn request_redraw(&mut self);

    /// The nearest character to `point` (in text-layout coordinates) and the
    /// fractional distance to the nearest insertion point. `None` when the
    /// surface has no content to hit.
    fn character_for_point(&self, point: Point) -> Option<CharacterHit>;
}
