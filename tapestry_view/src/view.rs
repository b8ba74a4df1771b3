// Copyright 2026 the Tapestry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The link text view: segment list, action table, compiled buffer, and the
//! gesture-to-action dispatch state machine.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use kurbo::Point;
use peniko::Color;
use tapestry_press::PressState;
use tapestry_text::{
    BaseStyle, LinkAttributes, ResolvedAttributes, Segment, SelectedLinkAttributes, StyledBuffer,
    TextAttributes,
};

use crate::gesture::{GestureEvent, GestureResponse, RecognizerConfig};
use crate::host::{ContentInset, TextHost};

/// A zero-argument link action.
///
/// Actions are reference-counted so the view can hand one to the caller at
/// dispatch time after its own bookkeeping is already clean; a reentrant
/// action (one that reassigns `texts`, say) observes a view with no press in
/// flight.
pub type Action = Rc<dyn Fn()>;

/// Index into the view's action table: the plain-data tag link runs carry in
/// the compiled buffer instead of a callback. Keeping the callback out of the
/// buffer separates "what to draw" from "what to do".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActionId(usize);

impl ActionId {
    /// The position of the action in the owning view's table.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One piece of the displayed text, in source order: plain text, or a link
/// bound to an action. Immutable once constructed.
#[derive(Clone)]
pub enum TextPiece {
    /// Plain text with no action.
    Plain(String),
    /// Tappable text; the action fires on a successful tap anywhere in it.
    Link(String, Action),
}

impl TextPiece {
    /// A plain segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// A link segment bound to `action`.
    pub fn link(text: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self::Link(text.into(), Rc::new(action))
    }

    /// The piece's text.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Link(text, _) => text,
        }
    }

    /// Returns `true` for link pieces.
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(..))
    }
}

impl fmt::Debug for TextPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(text) => f.debug_tuple("Plain").field(text).finish(),
            Self::Link(text, _) => f.debug_tuple("Link").field(text).field(&"..").finish(),
        }
    }
}

/// A tap-sensitive rich text component.
///
/// Owns the segment list, the attribute overrides, the compiled buffer with
/// its parallel action table, and the single-touch press machine. The host —
/// layout engine plus rendering surface — is passed into each mutating call;
/// see [`TextHost`].
///
/// The buffer and `texts` are kept consistent by full regeneration: every
/// segment or attribute change recompiles and reassigns the whole buffer,
/// never patches it.
pub struct LinkText {
    texts: Vec<TextPiece>,
    actions: Vec<Action>,
    buffer: StyledBuffer<ActionId>,
    press: PressState<ActionId>,
    text_attributes: TextAttributes,
    link_attributes: LinkAttributes,
    selected_link_attributes: SelectedLinkAttributes,
    font_size: Option<f32>,
    text_color: Option<Color>,
    content_inset: ContentInset,
    recognizer: RecognizerConfig,
}

impl Default for LinkText {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkText {
    /// An empty view with default attributes and recognizer configuration.
    pub fn new() -> Self {
        Self {
            texts: Vec::new(),
            actions: Vec::new(),
            buffer: StyledBuffer::new(),
            press: PressState::new(),
            text_attributes: TextAttributes::default(),
            link_attributes: LinkAttributes::default(),
            selected_link_attributes: SelectedLinkAttributes::default(),
            font_size: None,
            text_color: None,
            content_inset: ContentInset::default(),
            recognizer: RecognizerConfig::default(),
        }
    }

    /// The current segment sequence.
    pub fn texts(&self) -> &[TextPiece] {
        &self.texts
    }

    /// The compiled buffer last assigned to the host.
    pub fn buffer(&self) -> &StyledBuffer<ActionId> {
        &self.buffer
    }

    /// Returns `true` while a press is being tracked.
    pub fn is_pressing(&self) -> bool {
        self.press.is_pressing()
    }

    /// The recognizer configuration the host should apply to its gesture
    /// primitive.
    pub fn recognizer(&self) -> &RecognizerConfig {
        &self.recognizer
    }

    /// Replace the recognizer configuration.
    pub fn set_recognizer(&mut self, config: RecognizerConfig) {
        self.recognizer = config;
    }

    /// The content inset subtracted from touch points before hit-testing.
    pub fn content_inset(&self) -> ContentInset {
        self.content_inset
    }

    /// Set the content inset. Does not recompile.
    pub fn set_content_inset(&mut self, inset: ContentInset) {
        self.content_inset = inset;
    }

    /// Replace the segment sequence and recompile.
    ///
    /// Recompilation happens on every assignment, including redundant
    /// reassignment of equal content. Assigning an *empty* sequence is a
    /// no-op on the displayed buffer — the previous content stays on screen.
    /// That quirk is kept for compatibility with the behavior this component
    /// reproduces; use [`Self::clear`] to actually blank the surface.
    pub fn set_texts(&mut self, texts: Vec<TextPiece>, host: &mut impl TextHost) {
        self.texts = texts;
        self.recompile(host);
    }

    /// Blank the view: drop all segments and assign a fresh empty buffer to
    /// the host.
    pub fn clear(&mut self, host: &mut impl TextHost) {
        self.texts.clear();
        self.actions.clear();
        self.press.cancel();
        self.buffer = StyledBuffer::new();
        host.set_buffer(&self.buffer);
        host.request_redraw();
    }

    /// Set the view-level font size feeding default attribute resolution, and
    /// recompile. Only attribute sets still deriving from defaults change.
    pub fn set_font_size(&mut self, font_size: Option<f32>, host: &mut impl TextHost) {
        self.font_size = font_size;
        self.recompile(host);
    }

    /// Set the view-level text color feeding default attribute resolution,
    /// and recompile.
    pub fn set_text_color(&mut self, text_color: Option<Color>, host: &mut impl TextHost) {
        self.text_color = text_color;
        self.recompile(host);
    }

    /// Replace the plain-run attribute overrides and recompile.
    pub fn set_text_attributes(&mut self, attrs: TextAttributes, host: &mut impl TextHost) {
        self.text_attributes = attrs;
        self.recompile(host);
    }

    /// Replace the link-run attribute overrides and recompile.
    pub fn set_link_attributes(&mut self, attrs: LinkAttributes, host: &mut impl TextHost) {
        self.link_attributes = attrs;
        self.recompile(host);
    }

    /// Replace the pressed-link attribute overrides and recompile.
    pub fn set_selected_link_attributes(
        &mut self,
        attrs: SelectedLinkAttributes,
        host: &mut impl TextHost,
    ) {
        self.selected_link_attributes = attrs;
        self.recompile(host);
    }

    /// Feed one recognizer callback through the dispatch state machine.
    ///
    /// See [`GestureResponse`] for what the host is expected to do with the
    /// result; in particular, [`GestureResponse::CancelRequested`] obliges
    /// the host to force its recognizer into the cancelled state, which
    /// arrives back here as [`GestureEvent::Cancelled`].
    pub fn handle_gesture(
        &mut self,
        event: GestureEvent,
        host: &mut impl TextHost,
    ) -> GestureResponse {
        match event {
            GestureEvent::Began {
                point,
                window_point,
            } => {
                if self.press.is_pressing() {
                    // The recognizer serializes its own transitions; a second
                    // begin mid-press cannot occur. Keep the touch claimed.
                    return GestureResponse::Claimed;
                }
                match self.hit_test(&*host, point) {
                    Some((action, range)) => {
                        self.press.begin(action, range.clone(), window_point);
                        let selected = self.resolved().selected_link;
                        self.buffer.restyle(range, &selected);
                        host.set_buffer(&self.buffer);
                        host.request_redraw();
                        GestureResponse::Claimed
                    }
                    None => GestureResponse::Ignored,
                }
            }
            GestureEvent::Moved { window_point } => {
                if !self.press.is_pressing() {
                    return GestureResponse::Ignored;
                }
                if self.press.drift_exceeded(window_point) {
                    GestureResponse::CancelRequested
                } else {
                    GestureResponse::Claimed
                }
            }
            GestureEvent::Ended => match self.press.release() {
                Some(press) => {
                    self.revert_highlight(press.range, host);
                    // Invoke strictly after the revert and after the press
                    // slot is clear, so a reentrant action sees a clean view.
                    let action = self.actions.get(press.action.index()).cloned();
                    if let Some(action) = action {
                        action();
                    }
                    GestureResponse::Claimed
                }
                None => GestureResponse::Ignored,
            },
            GestureEvent::Cancelled => match self.press.cancel() {
                Some(press) => {
                    self.revert_highlight(press.range, host);
                    GestureResponse::Claimed
                }
                None => GestureResponse::Ignored,
            },
        }
    }

    /// Map a point in view coordinates to a link's action and effective
    /// range, or `None` when the point misses every link.
    pub fn hit_test(
        &self,
        host: &impl TextHost,
        point: Point,
    ) -> Option<(ActionId, Range<usize>)> {
        let translated = Point::new(
            point.x - self.content_inset.left,
            point.y - self.content_inset.top,
        );
        let hit = host.character_for_point(translated)?;
        if hit.fraction >= 1.0 {
            // The nearest boundary is past the glyph, not on it.
            return None;
        }
        self.buffer.action_at(hit.index)
    }

    fn resolved(&self) -> ResolvedAttributes {
        ResolvedAttributes::resolve(
            &BaseStyle {
                font_size: self.font_size,
                text_color: self.text_color,
            },
            &self.text_attributes,
            &self.link_attributes,
            &self.selected_link_attributes,
        )
    }

    fn revert_highlight(&mut self, range: Range<usize>, host: &mut impl TextHost) {
        let link = self.resolved().link;
        self.buffer.restyle(range, &link);
        host.set_buffer(&self.buffer);
        host.request_redraw();
    }

    fn recompile(&mut self, host: &mut impl TextHost) {
        if self.texts.is_empty() {
            // Keep the previously displayed buffer rather than blanking the
            // surface; `clear` is the explicit path to empty.
            return;
        }
        // The fresh buffer carries no highlight and a new action table, so
        // any in-flight press would revert against stale ranges. Drop it.
        self.press.cancel();
        self.actions.clear();
        let attrs = self.resolved();
        let mut segments = Vec::with_capacity(self.texts.len());
        for piece in &self.texts {
            match piece {
                TextPiece::Plain(text) => segments.push(Segment::plain(text)),
                TextPiece::Link(text, action) => {
                    let id = ActionId(self.actions.len());
                    self.actions.push(Rc::clone(action));
                    segments.push(Segment::link(text, id));
                }
            }
        }
        self.buffer = StyledBuffer::compile(&segments, &attrs);
        host.set_buffer(&self.buffer);
        host.request_redraw();
    }
}

impl fmt::Debug for LinkText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkText")
            .field("texts", &self.texts)
            .field("buffer", &self.buffer)
            .field("press", &self.press)
            .field("font_size", &self.font_size)
            .field("text_color", &self.text_color)
            .field("content_inset", &self.content_inset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::CharacterHit;
    use alloc::vec;

    /// Fixed-metrics host: a single line, `ADVANCE` units per byte.
    #[derive(Default)]
    struct GridHost {
        text: String,
        assignments: usize,
        redraws: usize,
    }

    const ADVANCE: f64 = 10.0;

    impl TextHost for GridHost {
        fn set_buffer(&mut self, buffer: &StyledBuffer<ActionId>) {
            self.text = buffer.text().into();
            self.assignments += 1;
        }

        fn request_redraw(&mut self) {
            self.redraws += 1;
        }

        fn character_for_point(&self, point: Point) -> Option<CharacterHit> {
            if self.text.is_empty() || point.x < 0.0 {
                return None;
            }
            let slot = (point.x / ADVANCE) as usize;
            if slot >= self.text.len() {
                return Some(CharacterHit {
                    index: self.text.len() - 1,
                    fraction: 1.0,
                });
            }
            Some(CharacterHit {
                index: slot,
                fraction: 0.5,
            })
        }
    }

    fn view_with_link(host: &mut GridHost) -> LinkText {
        let mut view = LinkText::new();
        view.set_texts(
            vec![
                TextPiece::plain("ab"),
                TextPiece::link("cd", || {}),
                TextPiece::plain("ef"),
            ],
            host,
        );
        view
    }

    #[test]
    fn hit_test_maps_interior_points_to_full_link_range() {
        let mut host = GridHost::default();
        let view = view_with_link(&mut host);

        let hit_at = |x: f64| view.hit_test(&host, Point::new(x, 5.0));
        // Bytes 2 and 3 are the link "cd".
        let (action, range) = hit_at(25.0).unwrap();
        assert_eq!(range, 2..4);
        assert_eq!(hit_at(35.0), Some((action, 2..4)));
        // Plain bytes miss.
        assert_eq!(hit_at(5.0), None);
        assert_eq!(hit_at(45.0), None);
    }

    #[test]
    fn hit_test_rejects_points_past_the_glyphs() {
        let mut host = GridHost::default();
        let mut view = LinkText::new();
        view.set_texts(vec![TextPiece::link("ab", || {})], &mut host);

        // Inside the link.
        assert!(view.hit_test(&host, Point::new(15.0, 0.0)).is_some());
        // Past the end of the line: the host reports fraction 1.0.
        assert_eq!(view.hit_test(&host, Point::new(500.0, 0.0)), None);
    }

    #[test]
    fn hit_test_subtracts_the_content_inset() {
        let mut host = GridHost::default();
        let mut view = view_with_link(&mut host);
        view.set_content_inset(ContentInset { top: 8.0, left: 20.0 });

        // 45 - 20 = 25 lands on byte 2, inside the link.
        assert!(view.hit_test(&host, Point::new(45.0, 10.0)).is_some());
        // Without accounting for the inset this point would have hit the link.
        assert_eq!(view.hit_test(&host, Point::new(25.0, 10.0)), None);
    }

    #[test]
    fn empty_texts_assignment_keeps_previous_buffer() {
        let mut host = GridHost::default();
        let mut view = view_with_link(&mut host);
        let assignments = host.assignments;

        view.set_texts(vec![], &mut host);

        assert_eq!(host.assignments, assignments);
        assert_eq!(view.buffer().text(), "abcdef");
        assert!(view.texts().is_empty());
    }

    #[test]
    fn clear_assigns_an_empty_buffer() {
        let mut host = GridHost::default();
        let mut view = view_with_link(&mut host);

        view.clear(&mut host);

        assert_eq!(host.text, "");
        assert!(view.buffer().is_empty());
        assert!(view.texts().is_empty());
    }

    #[test]
    fn redundant_reassignment_still_recompiles() {
        let mut host = GridHost::default();
        let mut view = LinkText::new();
        let pieces = vec![TextPiece::plain("ab"), TextPiece::link("cd", || {})];
        view.set_texts(pieces.clone(), &mut host);
        let assignments = host.assignments;

        view.set_texts(pieces, &mut host);
        assert_eq!(host.assignments, assignments + 1);
    }

    #[test]
    fn recompile_drops_an_in_flight_press() {
        let mut host = GridHost::default();
        let mut view = view_with_link(&mut host);

        let begin = GestureEvent::Began {
            point: Point::new(25.0, 5.0),
            window_point: Point::new(25.0, 5.0),
        };
        assert_eq!(view.handle_gesture(begin, &mut host), GestureResponse::Claimed);
        assert!(view.is_pressing());

        view.set_texts(vec![TextPiece::link("xy", || {})], &mut host);
        assert!(!view.is_pressing());
        // The end that eventually arrives has nothing to act on.
        assert_eq!(
            view.handle_gesture(GestureEvent::Ended, &mut host),
            GestureResponse::Ignored
        );
    }
}
