use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::session::View;
use crate::tui::component::Component;
use crate::tui::components::{CounterRow, StatusBar};

const HELP_TEXT: &str = "←/→ select  ↑/↓ change  n new  Del delete  r restart  Esc save & quit";

pub fn draw_ui(frame: &mut Frame, view: &View<'_>) {
    use Constraint::{Length, Min};
    let area = frame.area();
    let mut counter_row = CounterRow::new(view.store, view.separator);
    let row_height = counter_row.height(area.width);

    let layout = Layout::vertical([Length(row_height), Length(1), Min(0), Length(1)]);
    let [row_area, status_area, _, help_area] = layout.areas(area);

    counter_row.render(frame, row_area);
    StatusBar::new(view.notice).render(frame, status_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
