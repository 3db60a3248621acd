use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::DeathCause;

const RESTART_HINT: &str = "[Enter] Reset Game";
const QUIT_HINT: &str = "[Q] Quit";

/// Draws the game-over screen as a centered popup with the restart control.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_cause: Option<DeathCause>,
    theme: &Theme,
) {
    let final_score = format!("Final Score: {score}");
    let cause = match death_cause {
        Some(DeathCause::WallCollision) => "The snake hit the wall",
        Some(DeathCause::SelfCollision) => "The snake bit itself",
        None => "",
    };

    let texts = [
        "GAME OVER",
        "",
        final_score.as_str(),
        cause,
        "",
        RESTART_HINT,
        QUIT_HINT,
    ];
    let popup = centered_popup(area, &texts);

    let lines = vec![
        Line::from("GAME OVER").style(
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(final_score.as_str()),
        Line::from(cause),
        Line::from(""),
        Line::from(RESTART_HINT),
        Line::from(QUIT_HINT).style(Style::new().fg(theme.menu_footer)),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Returns a rect centered in `area`, sized to the widest text plus the
/// popup border and padding, clamped to the available space.
fn centered_popup(area: Rect, texts: &[&str]) -> Rect {
    let content_width = texts.iter().map(|text| text.width()).max().unwrap_or(0);

    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(6)
        .min(area.width);
    let height = u16::try_from(texts.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
