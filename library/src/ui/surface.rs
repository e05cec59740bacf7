//! egui-backed list surface
//!
//! The menu driver paints at its own cadence while egui redraws every frame,
//! so [`ListSurface::paint`] only stores a snapshot and [`EguiSurface::draw`]
//! renders the latest one.

use eframe::egui;
use romm_core::ListSurface;
use romm_core::config::DisplayConfig;

/// Left edge of every row.
pub const ROW_X: f32 = 20.0;
/// Offset of the first row from the top.
pub const ROW_Y: f32 = 10.0;

const TEXT_COLOR: egui::Color32 = egui::Color32::WHITE;
const SELECTED_COLOR: egui::Color32 = egui::Color32::YELLOW;
const FOOTER_COLOR: egui::Color32 = egui::Color32::GRAY;

/// Rough glyph advance relative to the font size, used before a painter
/// is attached.
const FALLBACK_ADVANCE: f32 = 0.6;

pub struct EguiSurface {
    painter: Option<egui::Painter>,
    font: egui::FontId,
    item_height: f32,
    rows: Vec<String>,
    selected: Option<usize>,
    footer: String,
}

impl EguiSurface {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            painter: None,
            font: egui::FontId::proportional(display.font_size),
            item_height: display.item_height,
            rows: Vec::new(),
            selected: None,
            footer: String::new(),
        }
    }

    /// Painter used to measure text. Refresh it every frame.
    pub fn attach(&mut self, painter: egui::Painter) {
        self.painter = Some(painter);
    }

    /// Replaces the rows with the lines of `text`, nothing highlighted.
    pub fn show_message(&mut self, text: &str) {
        self.rows = text.lines().map(str::to_string).collect();
        self.selected = None;
    }

    /// Status line drawn at the bottom edge.
    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = footer.into();
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// Renders the last snapshot inside `rect`.
    pub fn draw(&self, painter: &egui::Painter, rect: egui::Rect) {
        for (i, row) in self.rows.iter().enumerate() {
            let color = if self.selected == Some(i) {
                SELECTED_COLOR
            } else {
                TEXT_COLOR
            };
            let pos = rect.min + egui::vec2(ROW_X, i as f32 * self.item_height + ROW_Y);
            painter.text(pos, egui::Align2::LEFT_TOP, row, self.font.clone(), color);
        }

        if !self.footer.is_empty() {
            painter.text(
                egui::pos2(rect.min.x + ROW_X, rect.max.y - ROW_Y),
                egui::Align2::LEFT_BOTTOM,
                &self.footer,
                self.font.clone(),
                FOOTER_COLOR,
            );
        }
    }
}

impl ListSurface for EguiSurface {
    fn paint(&mut self, rows: &[&str], selected: Option<usize>) {
        self.rows = rows.iter().map(|row| row.to_string()).collect();
        self.selected = selected;
    }

    fn text_extent(&self, text: &str) -> (f32, f32) {
        match &self.painter {
            Some(painter) => {
                let size = painter
                    .layout_no_wrap(text.to_string(), self.font.clone(), TEXT_COLOR)
                    .size();
                (size.x, size.y)
            }
            None => (
                text.chars().count() as f32 * self.font.size * FALLBACK_ADVANCE,
                self.font.size,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> EguiSurface {
        EguiSurface::new(&DisplayConfig::default())
    }

    #[test]
    fn test_paint_stores_snapshot() {
        let mut s = surface();
        s.paint(&["NES", "SNES"], Some(1));
        assert_eq!(s.rows(), ["NES".to_string(), "SNES".to_string()]);
        assert_eq!(s.selected(), Some(1));

        s.paint(&[], None);
        assert!(s.rows().is_empty());
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_show_message_splits_lines() {
        let mut s = surface();
        s.paint(&["NES"], Some(0));
        s.show_message("Fetch failed\nserver returned HTTP 401");

        assert_eq!(s.rows().len(), 2);
        assert_eq!(s.rows()[1], "server returned HTTP 401");
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_fallback_extent_grows_with_text() {
        let s = surface();
        let (short, h) = s.text_extent("NES");
        let (long, _) = s.text_extent("Nintendo Entertainment System");
        assert!(short > 0.0);
        assert!(long > short);
        assert_eq!(h, DisplayConfig::default().font_size);
    }

    #[test]
    fn test_footer() {
        let mut s = surface();
        assert!(s.footer().is_empty());
        s.set_footer("Loading...");
        assert_eq!(s.footer(), "Loading...");
    }
}
