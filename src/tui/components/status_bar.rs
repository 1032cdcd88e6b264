//! # StatusBar Component
//!
//! One line under the counters for one-shot notices such as
//! "1 value was lost due to save file issues.". Warnings are red,
//! everything else plain. With no notice the line is left blank.

use crate::core::session::Notice;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct StatusBar {
    pub notice: Option<Notice>,
}

impl StatusBar {
    pub fn new(notice: Option<&Notice>) -> Self {
        Self {
            notice: notice.cloned(),
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(notice) = &self.notice else {
            return;
        };
        let style = if notice.is_warning() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        frame.render_widget(Span::styled(notice.message(), style), area);
    }
}
