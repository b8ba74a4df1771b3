// Copyright 2026 the Tapestry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute records and the resolution chain that turns them into run styles.
//!
//! Resolution walks a three-layer precedence chain, highest first:
//!
//! **Explicit override → view property → default**
//!
//! Override records ([`TextAttributes`], [`LinkAttributes`],
//! [`SelectedLinkAttributes`]) hold independently overridable optional fields;
//! [`BaseStyle`] carries the hosting view's own `font_size`/`text_color`
//! properties, which only influence attribute sets still using defaults.

use peniko::Color;
use peniko::color::palette;

/// Font size used when neither an override nor a view-level font is supplied.
pub const DEFAULT_FONT_SIZE: f32 = 17.0;

/// Background applied to a link while it is pressed, unless overridden:
/// 20%-opacity black.
pub const SELECTED_LINK_BACKGROUND: Color = Color::from_rgba8(0, 0, 0, 51);

/// Fully resolved visible attributes for one styled run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunStyle {
    /// Font size in logical units.
    pub font_size: f32,
    /// Foreground color.
    pub color: Color,
    /// Background fill behind the run. `None` means the attribute is absent
    /// (not "transparent"): nothing is written, so inherited or default
    /// surface rendering shows through.
    pub background: Option<Color>,
    /// Whether the run is underlined.
    pub underline: bool,
}

/// View-level properties feeding default resolution.
///
/// These mirror the hosting text surface's own `font`/`textColor` properties:
/// they fill in any field the override records leave unset, and changing them
/// only affects attribute sets still deriving from defaults.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BaseStyle {
    /// Font size for all runs. Defaults to [`DEFAULT_FONT_SIZE`].
    pub font_size: Option<f32>,
    /// Foreground color for plain runs. Defaults to black.
    pub text_color: Option<Color>,
}

/// Optional overrides for plain-text runs. Unset fields resolve through
/// [`BaseStyle`] and then the documented defaults.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextAttributes {
    /// Foreground color.
    pub color: Option<Color>,
    /// Background fill. Left unset, plain runs carry no background at all.
    pub background: Option<Color>,
}

/// Optional overrides for link runs.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LinkAttributes {
    /// Foreground color. Defaults to blue.
    pub color: Option<Color>,
    /// Background fill. Left unset, link runs carry no background at all.
    pub background: Option<Color>,
    /// Underline flag. Defaults to underlined.
    pub underline: Option<bool>,
}

/// Optional overrides for a link run while it is pressed.
///
/// The selected set is the resolved link set with the background swapped in;
/// only the background is independently overridable.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SelectedLinkAttributes {
    /// Background fill shown during the press. Defaults to
    /// [`SELECTED_LINK_BACKGROUND`].
    pub background: Option<Color>,
}

/// The three resolved attribute sets a compiled buffer draws from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedAttributes {
    /// Style for plain runs.
    pub plain: RunStyle,
    /// Style for link runs at rest.
    pub link: RunStyle,
    /// Style for the pressed link run.
    pub selected_link: RunStyle,
}

impl ResolvedAttributes {
    /// Resolve override records against view properties and defaults.
    pub fn resolve(
        base: &BaseStyle,
        text: &TextAttributes,
        link: &LinkAttributes,
        selected: &SelectedLinkAttributes,
    ) -> Self {
        let font_size = base.font_size.unwrap_or(DEFAULT_FONT_SIZE);
        let plain = RunStyle {
            font_size,
            color: text.color.or(base.text_color).unwrap_or(Color::BLACK),
            background: text.background,
            underline: false,
        };
        let link_style = RunStyle {
            font_size,
            color: link.color.unwrap_or(palette::css::BLUE),
            background: link.background,
            underline: link.underline.unwrap_or(true),
        };
        let selected_link = RunStyle {
            background: Some(selected.background.unwrap_or(SELECTED_LINK_BACKGROUND)),
            ..link_style
        };
        Self {
            plain,
            link: link_style,
            selected_link,
        }
    }
}

impl Default for ResolvedAttributes {
    /// The fully computed default sets: black text, blue underlined links,
    /// no backgrounds at rest, 20%-opacity black behind a pressed link.
    fn default() -> Self {
        Self::resolve(
            &BaseStyle::default(),
            &TextAttributes::default(),
            &LinkAttributes::default(),
            &SelectedLinkAttributes::default(),
        )
    }
}
