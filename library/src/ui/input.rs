//! Keyboard to navigation events

use std::collections::VecDeque;

use eframe::egui;
use romm_core::NavEvent;

/// Maps a device key to a navigation event.
///
/// Handhelds expose their face buttons as keyboard keys, so the usual
/// confirm/back pairs are both accepted.
pub fn map_key(key: egui::Key) -> Option<NavEvent> {
    match key {
        egui::Key::ArrowUp => Some(NavEvent::MoveUp),
        egui::Key::ArrowDown => Some(NavEvent::MoveDown),
        egui::Key::Space | egui::Key::Enter => Some(NavEvent::Confirm),
        egui::Key::Escape | egui::Key::Backspace => Some(NavEvent::Cancel),
        _ => None,
    }
}

/// Queues this frame's key presses in arrival order.
///
/// Returns whether any key at all was pressed, mapped or not.
pub fn collect_events(ctx: &egui::Context, queue: &mut VecDeque<NavEvent>) -> bool {
    ctx.input(|i| {
        let mut any_pressed = false;
        for event in &i.events {
            if let egui::Event::Key {
                key, pressed: true, ..
            } = event
            {
                any_pressed = true;
                if let Some(nav) = map_key(*key) {
                    queue.push_back(nav);
                }
            }
        }
        any_pressed
    })
}
