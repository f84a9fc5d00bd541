//! Terminal front end for peg solitaire.
//!
//! - **Config**: optional TOML file merged with command-line flags
//! - **Prompts**: board size and mode, asked when not configured
//! - **Players**: manual (numbered menu) or seeded random move selection
//! - **Session**: the game loop, wrapped by the outcome log
//! - **Stats**: totals over the outcome log

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod game_log;
pub mod players;
pub mod prompt;
pub mod render;
pub mod session;
pub mod stats;

pub use config::{ConfigError, GameConfig, Mode};
pub use game_log::{GameLog, LogError};
pub use players::{ManualSelector, MoveSelector, RandomSelector, Selection, SelectionError};
pub use render::Painter;
pub use stats::LogStats;
