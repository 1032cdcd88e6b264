//! # CounterRow Component
//!
//! The row of counters, left to right in store order. Wraps onto more
//! lines when it is wider than the terminal, so every counter stays visible.
//!
//! ```text
//! <sep>3<sep>[-1]<sep>0<sep>
//! ```
//!
//! A separator leads the row and follows every value. The selected value is
//! drawn bold dark green. Tabs in the separator are expanded to 8-column
//! stops, since a raw `\t` in a terminal cell has no width.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::store::CounterStore;
use crate::tui::component::Component;

const TAB_WIDTH: usize = 8;

pub struct CounterRow {
    pub values: Vec<i32>,
    pub selected: Option<usize>,
    pub separator: String,
}

impl CounterRow {
    pub fn new(store: &CounterStore, separator: &str) -> Self {
        Self {
            values: store.values(),
            selected: store.selected(),
            separator: separator.to_string(),
        }
    }

    fn line(&self) -> Line<'static> {
        let mut row = RowBuilder::default();
        row.push(&self.separator, Style::default());

        if self.values.is_empty() {
            row.push(
                "no counters, press n to add one",
                Style::default().fg(Color::DarkGray),
            );
        }

        for (i, value) in self.values.iter().enumerate() {
            let style = if self.selected == Some(i) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            row.push(&value.to_string(), style);
            row.push(&self.separator, Style::default());
        }

        Line::from(row.spans)
    }

    fn paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(self.line()).wrap(Wrap { trim: false })
    }

    /// Lines needed to show every counter at the given width.
    pub fn height(&self, width: u16) -> u16 {
        self.paragraph().line_count(width).max(1) as u16
    }
}

/// Accumulates spans while tracking the column for tab expansion.
#[derive(Default)]
struct RowBuilder {
    spans: Vec<Span<'static>>,
    column: usize,
}

impl RowBuilder {
    fn push(&mut self, text: &str, style: Style) {
        let mut expanded = String::with_capacity(text.len());
        for c in text.chars() {
            if c == '\t' {
                let pad = TAB_WIDTH - self.column % TAB_WIDTH;
                expanded.extend(std::iter::repeat_n(' ', pad));
                self.column += pad;
            } else {
                expanded.push(c);
                self.column += 1;
            }
        }
        if !expanded.is_empty() {
            self.spans.push(Span::styled(expanded, style));
        }
    }
}

impl Component for CounterRow {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.paragraph(), area);
    }
}
