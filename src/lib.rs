//! Classic arcade Snake: a pure game model (`game`, `snake`, `food`) driven
//! by a ratatui terminal front end (`renderer`, `ui`, `input`, `main`).

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
