use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

/// Board width in logical units.
pub const BOARD_WIDTH: i32 = 800;

/// Board height in logical units.
pub const BOARD_HEIGHT: i32 = 600;

/// Side length of one grid cell in logical units; the quantum of motion.
/// Every position in play is a multiple of this on both axes.
pub const CELL_SIZE: i32 = 20;

/// Grid width in cells.
pub const GRID_WIDTH: i32 = BOARD_WIDTH / CELL_SIZE;

/// Grid height in cells.
pub const GRID_HEIGHT: i32 = BOARD_HEIGHT / CELL_SIZE;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Head position of a freshly spawned snake, in board units. The body
/// extends to the left of the head, so the snake starts moving right.
pub const SNAKE_START_X: i32 = 100;
pub const SNAKE_START_Y: i32 = 100;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 75;

/// Accepted range for a `--tick-ms` override.
pub const MIN_TICK_INTERVAL_MS: u64 = 15;
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Resolves the tick interval from the raw `--tick-ms` argument.
///
/// The parse is lenient: a missing, malformed, or out-of-range value falls
/// back to [`DEFAULT_TICK_INTERVAL_MS`] and is never reported as an error.
#[must_use]
pub fn tick_interval_from_arg(arg: Option<&str>) -> Duration {
    let millis = arg
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|ms| (MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(ms))
        .unwrap_or(DEFAULT_TICK_INTERVAL_MS);

    Duration::from_millis(millis)
}

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Color for the snake head glyph.
    pub snake_head: Color,
    /// Color for body segments.
    pub snake_body: Color,
    /// Color for the tail segment.
    pub snake_tail: Color,
    /// Color for food.
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Red snake and white food on black, the palette of the original arcade
/// rendition this game reproduces.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightRed,
    snake_body: Color::Red,
    snake_tail: Color::DarkGray,
    food: Color::White,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::Black,
    hud_score: Color::White,
    menu_title: Color::White,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_score: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_score: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// Built-in themes and their ids, in catalog order.
pub const BUILTIN_THEMES: &[(&str, Theme)] = &[
    ("classic", THEME_CLASSIC),
    ("ocean", THEME_OCEAN),
    ("neon", THEME_NEON),
];

/// Glyphs used to paint board entities.
#[derive(Debug, Clone, Copy)]
pub struct GlyphSet {
    pub food: &'static str,
    pub snake_head_up: &'static str,
    pub snake_head_down: &'static str,
    pub snake_head_left: &'static str,
    pub snake_head_right: &'static str,
    pub snake_body: &'static str,
    pub snake_tail: &'static str,
}

/// Default glyph set.
pub const GLYPHS_UNICODE: GlyphSet = GlyphSet {
    food: "●",
    snake_head_up: "▲",
    snake_head_down: "▼",
    snake_head_left: "◀",
    snake_head_right: "▶",
    snake_body: "█",
    snake_tail: "▓",
};

/// Fallback glyph set for consoles whose fonts lack the block glyphs.
pub const GLYPHS_ASCII: GlyphSet = GlyphSet {
    food: "o",
    snake_head_up: "^",
    snake_head_down: "v",
    snake_head_left: "<",
    snake_head_right: ">",
    snake_body: "#",
    snake_tail: "+",
};

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Plain ASCII border set matching [`GLYPHS_ASCII`].
pub const BORDER_ASCII: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};
