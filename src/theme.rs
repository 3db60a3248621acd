use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{Theme, BUILTIN_THEMES, THEME_CLASSIC};

const USER_THEME_APP_DIR: &str = "classic-snake";

/// A theme paired with the id it is selected by.
#[derive(Debug, Clone)]
pub struct ThemeItem {
    pub id: String,
    pub theme: Theme,
}

/// All themes known to this run: built-ins overlaid with user files.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<ThemeItem>,
    selected_idx: usize,
}

impl ThemeCatalog {
    /// Loads the built-in themes, then overlays user-provided themes from
    /// the config directory. A user file whose id matches a built-in
    /// replaces it; new ids are appended in file-name order.
    #[must_use]
    pub fn load() -> Self {
        let mut themes: Vec<ThemeItem> = BUILTIN_THEMES
            .iter()
            .map(|&(id, theme)| ThemeItem {
                id: id.to_owned(),
                theme,
            })
            .collect();

        if let Some(dir) = user_theme_dir() {
            merge_theme_dir(&dir, &mut themes);
        }

        Self {
            themes,
            selected_idx: 0,
        }
    }

    /// Selects the theme with the given id. Returns false and leaves the
    /// selection unchanged when the id is unknown.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        if let Some(idx) = self.themes.iter().position(|item| item.id == id) {
            self.selected_idx = idx;
            return true;
        }

        false
    }

    #[must_use]
    pub fn current_theme(&self) -> &Theme {
        &self.themes[self.selected_idx].theme
    }

    #[must_use]
    pub fn current_id(&self) -> &str {
        &self.themes[self.selected_idx].id
    }
}

/// Error raised by one theme file; never fatal to the catalog.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown color {0:?}")]
    UnknownColor(String),
}

/// On-disk theme format: any subset of the theme's color slots.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    snake_head: Option<String>,
    snake_body: Option<String>,
    snake_tail: Option<String>,
    food: Option<String>,
    play_bg: Option<String>,
    border_fg: Option<String>,
    border_bg: Option<String>,
    hud_score: Option<String>,
    menu_title: Option<String>,
    menu_footer: Option<String>,
}

fn user_theme_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_THEME_APP_DIR).join("themes"))
}

fn merge_theme_dir(dir: &Path, themes: &mut Vec<ThemeItem>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_json_file(path))
        .collect();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    for path in paths {
        let Some(id) = path
            .file_stem()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
        else {
            continue;
        };

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) => {
                eprintln!(
                    "Warning: failed to read theme file {}: {error}",
                    path.display()
                );
                continue;
            }
        };

        match parse_theme(&raw) {
            Ok(theme) => insert_theme(themes, id, theme),
            Err(error) => {
                eprintln!(
                    "Warning: invalid theme file {}; skipping: {error}",
                    path.display()
                );
            }
        }
    }
}

fn insert_theme(themes: &mut Vec<ThemeItem>, id: String, theme: Theme) {
    if let Some(existing) = themes.iter_mut().find(|item| item.id == id) {
        existing.theme = theme;
        return;
    }

    themes.push(ThemeItem { id, theme });
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Parses one theme file; slots it does not set keep the classic palette.
fn parse_theme(raw: &str) -> Result<Theme, ThemeError> {
    let file = serde_json::from_str::<ThemeFile>(raw)?;
    let mut theme = THEME_CLASSIC;

    apply(&mut theme.snake_head, file.snake_head)?;
    apply(&mut theme.snake_body, file.snake_body)?;
    apply(&mut theme.snake_tail, file.snake_tail)?;
    apply(&mut theme.food, file.food)?;
    apply(&mut theme.play_bg, file.play_bg)?;
    apply(&mut theme.border_fg, file.border_fg)?;
    apply(&mut theme.border_bg, file.border_bg)?;
    apply(&mut theme.hud_score, file.hud_score)?;
    apply(&mut theme.menu_title, file.menu_title)?;
    apply(&mut theme.menu_footer, file.menu_footer)?;

    Ok(theme)
}

fn apply(slot: &mut Color, value: Option<String>) -> Result<(), ThemeError> {
    if let Some(raw) = value {
        *slot = parse_color(&raw)?;
    }

    Ok(())
}

/// Parses a color name or a `#rrggbb` hex triplet.
fn parse_color(raw: &str) -> Result<Color, ThemeError> {
    if let Some(hex) = raw.strip_prefix('#') {
        if hex.len() == 6 {
            if let Ok(value) = u32::from_str_radix(hex, 16) {
                let [_, r, g, b] = value.to_be_bytes();
                return Ok(Color::Rgb(r, g, b));
            }
        }

        return Err(ThemeError::UnknownColor(raw.to_owned()));
    }

    match raw.to_ascii_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        _ => Err(ThemeError::UnknownColor(raw.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use ratatui::style::Color;

    use super::{merge_theme_dir, parse_color, parse_theme, ThemeCatalog, ThemeError, ThemeItem};
    use crate::config::BUILTIN_THEMES;

    #[test]
    fn valid_theme_file_overrides_named_slots() {
        let theme = parse_theme(r##"{"snake_body": "green", "food": "#ff8800"}"##)
            .expect("valid theme should parse");

        assert_eq!(theme.snake_body, Color::Green);
        assert_eq!(theme.food, Color::Rgb(0xff, 0x88, 0x00));
        // Unset slots keep the classic palette.
        assert_eq!(theme.play_bg, Color::Black);
    }

    #[test]
    fn unknown_color_name_is_an_error() {
        let result = parse_theme(r#"{"snake_body": "chartreuse-ish"}"#);
        assert!(matches!(result, Err(ThemeError::UnknownColor(_))));

        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#zzzzzz").is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_theme("not-json"),
            Err(ThemeError::Json(_))
        ));
        assert!(parse_theme(r#"{"no_such_slot": "red"}"#).is_err());
    }

    #[test]
    fn catalog_selects_builtins_by_id() {
        let mut catalog = ThemeCatalog::load();

        assert!(catalog.select_by_id("neon"));
        assert_eq!(catalog.current_id(), "neon");

        assert!(!catalog.select_by_id("no-such-theme"));
        assert_eq!(catalog.current_id(), "neon");
    }

    #[test]
    fn merge_skips_broken_files_and_keeps_good_ones() {
        let dir = unique_test_dir("merge");
        fs::create_dir_all(&dir).expect("test dir should be creatable");
        fs::write(dir.join("lava.json"), r#"{"snake_body": "lightred"}"#)
            .expect("test write should succeed");
        fs::write(dir.join("broken.json"), "{").expect("test write should succeed");
        fs::write(dir.join("notes.txt"), "ignored").expect("test write should succeed");

        let mut themes: Vec<ThemeItem> = BUILTIN_THEMES
            .iter()
            .map(|&(id, theme)| ThemeItem {
                id: id.to_owned(),
                theme,
            })
            .collect();
        merge_theme_dir(&dir, &mut themes);

        assert!(themes.iter().any(|item| item.id == "lava"));
        assert!(!themes.iter().any(|item| item.id == "broken"));
        assert!(!themes.iter().any(|item| item.id == "notes"));

        let _ = fs::remove_dir_all(&dir);
    }

    fn unique_test_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("classic-snake-theme-tests")
            .join(format!("{label}-{nanos}"))
    }
}
