use std::env;
use std::fs;

/// Runtime platform capabilities relevant to rendering.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Platform {
    is_wsl: bool,
    is_linux_console: bool,
}

impl Platform {
    /// Detects platform details from the current runtime environment.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            is_wsl: detect_wsl(),
            is_linux_console: env::var("TERM").is_ok_and(|term| term == "linux"),
        }
    }

    /// Returns true when the terminal's font is unlikely to carry the
    /// block and arrow glyphs: legacy WSL consoles and the bare Linux
    /// virtual console. The renderer then uses the ASCII glyph set.
    #[must_use]
    pub fn prefers_ascii_glyphs(self) -> bool {
        self.is_wsl || self.is_linux_console
    }
}

fn detect_wsl() -> bool {
    let Ok(version) = fs::read_to_string("/proc/version") else {
        return false;
    };

    version.to_ascii_lowercase().contains("microsoft")
}
