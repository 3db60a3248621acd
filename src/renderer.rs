use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GlyphSet, Theme, BORDER_ASCII, BORDER_HALF_BLOCK, CELL_SIZE, GLYPHS_ASCII, GLYPHS_UNICODE,
};
use crate::game::{GameState, RunState};
use crate::input::Direction;
use crate::platform::Platform;
use crate::snake::Position;
use crate::ui::hud::render_score_line;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, platform: Platform, theme: &Theme) {
    let glyphs = if platform.prefers_ascii_glyphs() {
        &GLYPHS_ASCII
    } else {
        &GLYPHS_UNICODE
    };
    let border_set = if platform.prefers_ascii_glyphs() {
        BORDER_ASCII
    } else {
        BORDER_HALF_BLOCK
    };

    let area = frame.area();
    let play_area = render_score_line(frame, area, state, theme);

    let block = Block::bordered()
        .border_set(border_set)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);
    frame.render_widget(Block::new().style(Style::new().bg(theme.play_bg)), inner);

    render_food(frame, inner, state, glyphs, theme);
    render_snake(frame, inner, state, glyphs, theme);

    if state.run_state == RunState::GameOver {
        render_game_over_menu(frame, play_area, state.score, state.death_cause, theme);
    }
}

fn render_food(
    frame: &mut Frame<'_>,
    inner: Rect,
    state: &GameState,
    glyphs: &GlyphSet,
    theme: &Theme,
) {
    let Some((x, y)) = board_to_terminal(inner, state.food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, glyphs.food, Style::new().fg(theme.food));
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    state: &GameState,
    glyphs: &GlyphSet,
    theme: &Theme,
) {
    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = board_to_terminal(inner, *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(glyphs, state.snake.heading()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, glyphs.snake_tail, Style::new().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, glyphs.snake_body, Style::new().fg(theme.snake_body));
    }
}

fn head_glyph(glyphs: &GlyphSet, heading: Direction) -> &'static str {
    match heading {
        Direction::Up => glyphs.snake_head_up,
        Direction::Down => glyphs.snake_head_down,
        Direction::Left => glyphs.snake_head_left,
        Direction::Right => glyphs.snake_head_right,
    }
}

/// Maps a board position (logical units) to a terminal cell inside `inner`.
///
/// Returns `None` for positions off the visible grid; a head sitting one
/// cell past the upper edge is alive but not drawn.
fn board_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    if !position.is_on_grid() {
        return None;
    }

    let cell_x = u16::try_from(position.x / CELL_SIZE).ok()?;
    let cell_y = u16::try_from(position.y / CELL_SIZE).ok()?;

    let x = inner.x.saturating_add(cell_x);
    let y = inner.y.saturating_add(cell_y);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
