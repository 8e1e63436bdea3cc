mod board;
mod common;
mod config;
mod game;
mod layout;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use layout::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ship::*;
pub use ui::*;
