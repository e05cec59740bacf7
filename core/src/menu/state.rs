//! List navigation state machine.

use romm_shared::Catalog;

/// Discrete input, already mapped from device keys by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavEvent {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
}

/// Lifecycle of one menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuPhase {
    /// Accepting input.
    #[default]
    Browsing,
    /// An item was chosen. Terminal.
    Selected,
    /// The user backed out. Terminal.
    Quit,
}

impl MenuPhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Browsing)
    }
}

/// Selection and scroll position over an owned item catalog.
///
/// Invariants, checked after every transition:
/// - `selected_index < items.len()` whenever the list is non-empty
/// - `scroll_offset <= selected_index < scroll_offset + window_size`
#[derive(Debug)]
pub struct Navigator<T> {
    items: Catalog<T>,
    selected_index: usize,
    scroll_offset: usize,
    window_size: usize,
    phase: MenuPhase,
}

impl<T> Navigator<T> {
    /// Starts browsing `items` with `window_size` rows visible (at least 1).
    pub fn new(items: Vec<T>, window_size: usize) -> Self {
        Self {
            items: Catalog::new(items),
            selected_index: 0,
            scroll_offset: 0,
            window_size: window_size.max(1),
            phase: MenuPhase::Browsing,
        }
    }

    /// Applies one input event and returns the resulting phase.
    ///
    /// Events are ignored once the phase is terminal.
    pub fn handle(&mut self, event: NavEvent) -> MenuPhase {
        if self.phase != MenuPhase::Browsing {
            return self.phase;
        }

        match event {
            NavEvent::MoveUp => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                    if self.selected_index < self.scroll_offset {
                        self.scroll_offset -= 1;
                    }
                }
            }
            NavEvent::MoveDown => {
                if self.selected_index + 1 < self.items.len() {
                    self.selected_index += 1;
                    if self.selected_index >= self.scroll_offset + self.window_size {
                        self.scroll_offset += 1;
                    }
                }
            }
            NavEvent::Confirm => {
                // Nothing to choose from an empty list.
                if !self.items.is_empty() {
                    self.phase = MenuPhase::Selected;
                }
            }
            NavEvent::Cancel => self.phase = MenuPhase::Quit,
        }

        self.phase
    }

    /// Replaces the list, e.g. when a background fetch completes.
    ///
    /// The previous catalog is released. Selection and scroll restart at the
    /// top. The phase is unchanged.
    pub fn replace_items(&mut self, items: Catalog<T>) {
        self.items.release();
        self.items = items;
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Drops every item, leaving an empty list. Idempotent.
    pub fn release_items(&mut self) {
        self.items.release();
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The item under the cursor.
    pub fn selected(&self) -> Option<&T> {
        self.items.as_slice().get(self.selected_index)
    }

    /// Items currently on screen:
    /// `min(window_size, len - scroll_offset)` items from `scroll_offset`.
    pub fn visible(&self) -> &[T] {
        let items = self.items.as_slice();
        let start = self.scroll_offset.min(items.len());
        let end = (start + self.window_size).min(items.len());
        &items[start..end]
    }

    /// Position of the cursor within [`Navigator::visible`].
    pub fn selected_in_window(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.selected_index - self.scroll_offset)
    }

    /// Consumes the navigator and returns the chosen item, if one was
    /// confirmed.
    pub fn into_selection(self) -> Option<T> {
        if self.phase != MenuPhase::Selected {
            return None;
        }
        let index = self.selected_index;
        self.items.into_items().into_iter().nth(index)
    }
}
