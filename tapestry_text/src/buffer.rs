// Copyright 2026 the Tapestry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The compiled styled buffer: concatenated text, per-segment runs, and
//! byte-position queries over action tags.

use alloc::string::String;
use core::ops::Range;
use smallvec::SmallVec;

use crate::style::{ResolvedAttributes, RunStyle};

/// One input segment for compilation: a text slice plus an optional action
/// tag. Tagged segments become link runs; untagged segments become plain runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment<'a, A> {
    /// The segment's text.
    pub text: &'a str,
    /// The action tag, present on link segments only.
    pub action: Option<A>,
}

impl<'a, A> Segment<'a, A> {
    /// A plain segment with no action.
    pub fn plain(text: &'a str) -> Self {
        Self { text, action: None }
    }

    /// A link segment carrying `action` across its whole range.
    pub fn link(text: &'a str, action: A) -> Self {
        Self {
            text,
            action: Some(action),
        }
    }
}

/// A contiguous byte range of the compiled buffer plus its resolved
/// attributes and, for link runs, the owning segment's action tag.
///
/// The tag is out-of-band data: it is not part of the visible style, so it
/// can be queried by position without being rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRun<A> {
    /// Byte range into [`StyledBuffer::text`].
    pub range: Range<usize>,
    /// Resolved visible attributes.
    pub style: RunStyle,
    /// Action tag, `Some` for link runs.
    pub action: Option<A>,
}

/// A compiled styled text buffer.
///
/// Produced wholesale by [`StyledBuffer::compile`]; callers regenerate it
/// whenever the segment list or any style attribute changes and assign the
/// result to their rendering surface in one step. Runs cover the text
/// contiguously, in segment order.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledBuffer<A> {
    text: String,
    runs: SmallVec<[StyledRun<A>; 4]>,
}

impl<A> Default for StyledBuffer<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> StyledBuffer<A> {
    /// An empty buffer: no text, no runs.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            runs: SmallVec::new(),
        }
    }

    /// The concatenated text of all segments, in order.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The styled runs, in segment order.
    pub fn runs(&self) -> &[StyledRun<A>] {
        &self.runs
    }

    /// Returns `true` when the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<A: Copy + Eq> StyledBuffer<A> {
    /// Compile segments into a single styled buffer.
    ///
    /// Each non-empty segment becomes one run, styled with the plain or link
    /// attribute set from `attrs`. Link runs carry their tag across the whole
    /// segment, so any byte inside a multi-byte link maps to the same action.
    /// Zero-length segments contribute nothing.
    pub fn compile(segments: &[Segment<'_, A>], attrs: &ResolvedAttributes) -> Self {
        let mut text = String::new();
        let mut runs = SmallVec::new();
        for seg in segments {
            if seg.text.is_empty() {
                continue;
            }
            let start = text.len();
            text.push_str(seg.text);
            let style = if seg.action.is_some() {
                attrs.link
            } else {
                attrs.plain
            };
            runs.push(StyledRun {
                range: start..text.len(),
                style,
                action: seg.action,
            });
        }
        Self { text, runs }
    }

    /// The action tag at byte `index`, together with its effective range:
    /// the maximal contiguous span over which that exact tag is constant.
    ///
    /// Merging adjacent runs with an equal tag makes a link that happens to
    /// span several runs behave as a single tappable unit. Plain positions
    /// and out-of-range indices return `None`.
    pub fn action_at(&self, index: usize) -> Option<(A, Range<usize>)> {
        let pos = self.runs.iter().position(|r| r.range.contains(&index))?;
        let tag = self.runs[pos].action?;
        let mut start = self.runs[pos].range.start;
        let mut end = self.runs[pos].range.end;
        for run in self.runs[..pos].iter().rev() {
            if run.action == Some(tag) && run.range.end == start {
                start = run.range.start;
            } else {
                break;
            }
        }
        for run in &self.runs[pos + 1..] {
            if run.action == Some(tag) && run.range.start == end {
                end = run.range.end;
            } else {
                break;
            }
        }
        Some((tag, start..end))
    }

    /// The visible style at byte `index`, if any run covers it.
    pub fn style_at(&self, index: usize) -> Option<&RunStyle> {
        self.runs
            .iter()
            .find(|r| r.range.contains(&index))
            .map(|r| &r.style)
    }

    /// Swap the visible style of every run covered by `range`.
    ///
    /// Action tags are untouched. Ranges produced by [`Self::action_at`]
    /// always cover whole runs; runs only partially inside `range` are left
    /// alone.
    pub fn restyle(&mut self, range: Range<usize>, style: &RunStyle) {
        for run in &mut self.runs {
            if run.range.start >= range.start && run.range.end <= range.end {
                run.style = *style;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn compile(segments: &[Segment<'_, u32>]) -> StyledBuffer<u32> {
        StyledBuffer::compile(segments, &ResolvedAttributes::default())
    }

    #[test]
    fn empty_input_compiles_to_empty_buffer() {
        let buffer = compile(&[]);
        assert!(buffer.is_empty());
        assert!(buffer.runs().is_empty());
    }

    #[test]
    fn text_is_concatenation_in_order() {
        let buffer = compile(&[
            Segment::plain("ab"),
            Segment::link("cd", 0),
            Segment::plain("ef"),
        ]);
        assert_eq!(buffer.text(), "abcdef");
        assert_eq!(buffer.runs().len(), 3);

        // Runs tile the text contiguously.
        let concat: String = buffer
            .runs()
            .iter()
            .map(|r| buffer.text()[r.range.clone()].to_string())
            .collect();
        assert_eq!(concat, buffer.text());
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let buffer = compile(&[Segment::plain(""), Segment::link("cd", 0), Segment::plain("")]);
        assert_eq!(buffer.text(), "cd");
        assert_eq!(buffer.runs().len(), 1);
    }

    #[test]
    fn link_runs_carry_tag_plain_runs_do_not() {
        let buffer = compile(&[Segment::plain("ab"), Segment::link("cd", 7)]);
        assert_eq!(buffer.runs()[0].action, None);
        assert_eq!(buffer.runs()[1].action, Some(7));
    }

    #[test]
    fn link_and_plain_styles_come_from_resolved_sets() {
        let attrs = ResolvedAttributes::default();
        let buffer = StyledBuffer::compile(
            &[Segment::plain("ab"), Segment::link("cd", 0_u32)],
            &attrs,
        );
        assert_eq!(buffer.runs()[0].style, attrs.plain);
        assert_eq!(buffer.runs()[1].style, attrs.link);
    }

    #[test]
    fn action_at_resolves_every_interior_byte_to_full_range() {
        let buffer = compile(&[
            Segment::plain("ab"),
            Segment::link("cd", 0),
            Segment::plain("ef"),
        ]);
        for index in 2..4 {
            assert_eq!(buffer.action_at(index), Some((0, 2..4)));
        }
        assert_eq!(buffer.action_at(0), None);
        assert_eq!(buffer.action_at(1), None);
        assert_eq!(buffer.action_at(4), None);
        assert_eq!(buffer.action_at(5), None);
    }

    #[test]
    fn action_at_out_of_range_is_none() {
        let buffer = compile(&[Segment::link("cd", 0)]);
        assert_eq!(buffer.action_at(2), None);
        assert_eq!(buffer.action_at(100), None);
    }

    #[test]
    fn adjacent_runs_with_equal_tag_merge_into_one_effective_range() {
        let buffer = compile(&[
            Segment::link("ab", 1),
            Segment::link("cd", 1),
            Segment::link("ef", 2),
        ]);
        // Equal tags merge across the run boundary.
        assert_eq!(buffer.action_at(0), Some((1, 0..4)));
        assert_eq!(buffer.action_at(3), Some((1, 0..4)));
        // A different tag does not.
        assert_eq!(buffer.action_at(4), Some((2, 4..6)));
    }

    #[test]
    fn multibyte_links_resolve_on_every_byte() {
        let buffer = compile(&[Segment::plain("あい"), Segment::link("うえ", 3)]);
        let link_start = "あい".len();
        let link_end = link_start + "うえ".len();
        for index in link_start..link_end {
            assert_eq!(buffer.action_at(index), Some((3, link_start..link_end)));
        }
    }

    #[test]
    fn restyle_swaps_covered_runs_and_preserves_tags() {
        let attrs = ResolvedAttributes::default();
        let mut buffer = StyledBuffer::compile(
            &[
                Segment::plain("ab"),
                Segment::link("cd", 0_u32),
                Segment::plain("ef"),
            ],
            &attrs,
        );

        buffer.restyle(2..4, &attrs.selected_link);
        assert_eq!(buffer.runs()[1].style, attrs.selected_link);
        assert_eq!(buffer.runs()[1].action, Some(0));
        // Neighbors untouched.
        assert_eq!(buffer.runs()[0].style, attrs.plain);
        assert_eq!(buffer.runs()[2].style, attrs.plain);

        // Reverting restores exactly the pre-press attribute set.
        buffer.restyle(2..4, &attrs.link);
        let styles: Vec<_> = buffer.runs().iter().map(|r| r.style).collect();
        assert_eq!(styles, [attrs.plain, attrs.link, attrs.plain]);
    }

    #[test]
    fn restyle_ignores_partially_covered_runs() {
        let attrs = ResolvedAttributes::default();
        let mut buffer = StyledBuffer::compile(&[Segment::link("abcd", 0_u32)], &attrs);
        buffer.restyle(0..2, &attrs.selected_link);
        assert_eq!(buffer.runs()[0].style, attrs.link);
    }

    #[test]
    fn style_at_reports_run_styles() {
        let attrs = ResolvedAttributes::default();
        let buffer = StyledBuffer::compile(
            &[Segment::plain("ab"), Segment::link("cd", 0_u32)],
            &attrs,
        );
        assert_eq!(buffer.style_at(0), Some(&attrs.plain));
        assert_eq!(buffer.style_at(3), Some(&attrs.link));
        assert_eq!(buffer.style_at(9), None);
    }
}
