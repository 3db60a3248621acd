use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the score line above the board and returns the remaining play
/// area. The score sits top-right, where the original program draws it.
#[must_use]
pub fn render_score_line(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    theme: &Theme,
) -> Rect {
    let [score_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(format!("Score: {}", state.score)))
            .alignment(Alignment::Right)
            .style(
                Style::new()
                    .fg(theme.hud_score)
                    .add_modifier(Modifier::BOLD),
            ),
        score_area,
    );

    play_area
}
