// Copyright 2026 the Tapestry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless tap demo: drives a [`LinkText`] through scripted gesture
//! sequences over a fixed-metrics layout and prints what the dispatcher does.
//!
//! There is no real window here; a [`ConsoleHost`] stands in for the layout
//! engine and rendering surface, laying every character on one line at a
//! fixed advance. Run with `cargo run -p tapestry_demos --bin headless_tap`.

use kurbo::Point;
use tapestry_press::DRIFT_TOLERANCE;
use tapestry_text::StyledBuffer;
use tapestry_view::{
    ActionId, CharacterHit, GestureEvent, GestureResponse, LinkText, TextHost, TextPiece,
};

/// Width of every character cell in the fake layout.
const ADVANCE: f64 = 12.0;

/// A stand-in text surface: one line, fixed advance per character, prints
/// buffer assignments instead of drawing them.
#[derive(Default)]
struct ConsoleHost {
    buffer: StyledBuffer<ActionId>,
}

impl TextHost for ConsoleHost {
    fn set_buffer(&mut self, buffer: &StyledBuffer<ActionId>) {
        self.buffer = buffer.clone();
        let highlighted = buffer
            .runs()
            .iter()
            .any(|run| run.action.is_some() && run.style.background.is_some());
        println!(
            "  [host] buffer assigned: {:?} ({} runs{})",
            buffer.text(),
            buffer.runs().len(),
            if highlighted { ", link highlighted" } else { "" },
        );
    }

    fn request_redraw(&mut self) {
        println!("  [host] redraw requested");
    }

    fn character_for_point(&self, point: Point) -> Option<CharacterHit> {
        let text = self.buffer.text();
        if text.is_empty() || point.x < 0.0 {
            return None;
        }
        let slot = (point.x / ADVANCE) as usize;
        match text.char_indices().nth(slot) {
            Some((index, _)) => Some(CharacterHit {
                index,
                fraction: 0.5,
            }),
            // Past the last glyph: nearest boundary, fraction ≥ 1.0.
            None => text.char_indices().last().map(|(index, _)| CharacterHit {
                index,
                fraction: 1.0,
            }),
        }
    }
}

/// Feed events through the dispatcher the way a platform host would: a
/// `CancelRequested` response forces the recognizer into its cancelled state,
/// which comes right back as a normal `Cancelled` callback.
fn drive(view: &mut LinkText, host: &mut ConsoleHost, events: &[GestureEvent]) {
    for &event in events {
        let response = view.handle_gesture(event, host);
        println!("  {event:?} -> {response:?}");
        if response == GestureResponse::CancelRequested {
            let cancelled = view.handle_gesture(GestureEvent::Cancelled, host);
            println!("  [host] recognizer force-cancelled");
            println!("  {:?} -> {cancelled:?}", GestureEvent::Cancelled);
        }
    }
}

fn at(x: f64) -> GestureEvent {
    GestureEvent::Began {
        point: Point::new(x, 6.0),
        window_point: Point::new(x, 6.0),
    }
}

fn main() {
    let mut host = ConsoleHost::default();
    let mut view = LinkText::new();

    println!("== assigning texts ==");
    view.set_texts(
        vec![
            TextPiece::plain("Read the "),
            TextPiece::link("guide", || println!("  >> guide opened")),
            TextPiece::plain(" or the "),
            TextPiece::link("reference", || println!("  >> reference opened")),
            TextPiece::plain("."),
        ],
        &mut host,
    );

    // "Read the " is 9 characters; the guide link covers slots 9..14.
    let guide_x = 11.0 * ADVANCE;

    println!("\n== clean tap on the guide link ==");
    drive(&mut view, &mut host, &[at(guide_x), GestureEvent::Ended]);

    println!("\n== press drifts {DRIFT_TOLERANCE}+ units: drag, not a tap ==");
    drive(
        &mut view,
        &mut host,
        &[
            at(guide_x),
            GestureEvent::Moved {
                window_point: Point::new(guide_x + 50.0, 6.0),
            },
        ],
    );

    println!("\n== tap on plain text passes through ==");
    drive(&mut view, &mut host, &[at(2.0 * ADVANCE), GestureEvent::Ended]);

    println!("\n== assigning empty texts is a no-op on the display ==");
    view.set_texts(vec![], &mut host);
    println!("  still showing: {:?}", view.buffer().text());

    println!("\n== clear blanks the surface explicitly ==");
    view.clear(&mut host);
}
