//! Menu loop driver
//!
//! Glues a [`Navigator`] to the display and input collaborators. The caller
//! invokes [`MenuDriver::tick`] as often as it likes; each tick drains input,
//! checks the background fetch, and repaints when the pacer allows.

use std::time::Instant;

use romm_shared::{Catalog, Platform, Rom};

use super::frame::FramePacer;
use super::state::{MenuPhase, NavEvent, Navigator};
use crate::error::CatalogError;
use crate::net::PendingFetch;

/// Text shown for an item in a list row.
pub trait MenuItem {
    fn label(&self) -> &str;
}

impl MenuItem for Platform {
    fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.slug
        } else {
            &self.name
        }
    }
}

impl MenuItem for Rom {
    fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.file_name
        } else {
            &self.name
        }
    }
}

/// Display collaborator.
pub trait ListSurface {
    /// Draws `rows` top to bottom, highlighting `selected` (an index into
    /// `rows`).
    fn paint(&mut self, rows: &[&str], selected: Option<usize>);

    /// Width and height of `text` in pixels when drawn by this surface.
    fn text_extent(&self, text: &str) -> (f32, f32);
}

/// Input collaborator.
pub trait InputSource {
    /// Next pending event, or `None` when drained.
    fn poll_event(&mut self) -> Option<NavEvent>;
}

impl InputSource for std::collections::VecDeque<NavEvent> {
    fn poll_event(&mut self) -> Option<NavEvent> {
        self.pop_front()
    }
}

const ELLIPSIS: &str = "...";

/// Shortens `text` with a trailing ellipsis until it fits `max_width`.
pub fn fit_label(surface: &dyn ListSurface, text: &str, max_width: f32) -> String {
    if surface.text_extent(text).0 <= max_width {
        return text.to_string();
    }

    for (cut, _) in text.char_indices().rev() {
        let candidate = format!("{}{}", &text[..cut], ELLIPSIS);
        if surface.text_extent(&candidate).0 <= max_width {
            return candidate;
        }
    }
    ELLIPSIS.to_string()
}

/// How a menu ended.
#[derive(Debug)]
pub enum MenuOutcome<T> {
    /// The user confirmed this item.
    Selected(T),
    /// The user cancelled, possibly before the list arrived.
    Quit,
    /// The list could not be fetched. The menu never showed data.
    Failed(CatalogError),
}

/// One menu: navigation state, its pending data and repaint pacing.
#[derive(Debug)]
pub struct MenuDriver<T> {
    navigator: Navigator<T>,
    pending: Option<PendingFetch<Catalog<T>>>,
    pacer: FramePacer,
    max_label_width: Option<f32>,
}

impl<T: MenuItem> MenuDriver<T> {
    /// Menu over items that are already available.
    pub fn ready(items: Vec<T>, window_size: usize, frame_rate: u32) -> Self {
        Self {
            navigator: Navigator::new(items, window_size),
            pending: None,
            pacer: FramePacer::new(frame_rate),
            max_label_width: None,
        }
    }

    /// Menu whose items arrive from a background fetch.
    pub fn loading(
        pending: PendingFetch<Catalog<T>>,
        window_size: usize,
        frame_rate: u32,
    ) -> Self {
        Self {
            navigator: Navigator::new(Vec::new(), window_size),
            pending: Some(pending),
            pacer: FramePacer::new(frame_rate),
            max_label_width: None,
        }
    }

    /// Truncate row labels that are wider than `width` pixels.
    pub fn with_max_label_width(mut self, width: f32) -> Self {
        self.max_label_width = Some(width);
        self
    }

    pub fn navigator(&self) -> &Navigator<T> {
        &self.navigator
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    /// Whether the item list is still being fetched.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Runs one loop iteration.
    ///
    /// Returns `Some` once the menu has ended; the driver should not be
    /// ticked afterwards.
    pub fn tick(
        &mut self,
        input: &mut dyn InputSource,
        surface: &mut dyn ListSurface,
        now: Instant,
    ) -> Option<MenuOutcome<T>> {
        while let Some(event) = input.poll_event() {
            if self.navigator.handle(event).is_terminal() {
                break;
            }
        }

        if self.navigator.phase() == MenuPhase::Quit {
            if let Some(pending) = self.pending.take() {
                tracing::info!("Menu cancelled while loading");
                pending.cancel();
            }
            self.navigator.release_items();
            return Some(MenuOutcome::Quit);
        }

        if let Some(pending) = self.pending.as_mut()
            && let Some(result) = pending.poll()
        {
            self.pending = None;
            match result {
                Ok(items) => {
                    tracing::debug!("Menu received {} items", items.len());
                    self.navigator.replace_items(items);
                }
                Err(e) => {
                    tracing::error!("Menu data unavailable: {}", e);
                    return Some(MenuOutcome::Failed(e));
                }
            }
        }

        if self.navigator.phase() == MenuPhase::Selected {
            let window_size = self.navigator.window_size();
            let navigator =
                std::mem::replace(&mut self.navigator, Navigator::new(Vec::new(), window_size));
            return navigator.into_selection().map(MenuOutcome::Selected);
        }

        if self.pacer.ready(now) {
            self.paint(surface);
        }
        None
    }

    fn paint(&self, surface: &mut dyn ListSurface) {
        let visible = self.navigator.visible();
        let rows: Vec<String> = match self.max_label_width {
            Some(width) => visible
                .iter()
                .map(|item| fit_label(&*surface, item.label(), width))
                .collect(),
            None => visible.iter().map(|item| item.label().to_string()).collect(),
        };
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        surface.paint(&rows, self.navigator.selected_in_window());
    }
}
