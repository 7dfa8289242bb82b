//! Terminal front end for strictly_timeline.
//!
//! # Architecture
//!
//! - **App**: owns the game history and the presentation-only state
//!   (move list order, focus, selection)
//! - **UI**: stateless ratatui rendering of an [`App`]
//! - **Replay**: non-interactive play-through for scripts and tests
//! - **Config**: TOML settings and tracing setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod moves;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::{App, Control, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TimelineConfig};
pub use moves::{SortOrder, describe};
pub use replay::{ReplaySummary, render_json, render_text, replay};
