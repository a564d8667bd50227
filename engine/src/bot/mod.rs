mod bot_controller;
pub mod minimax;

pub use bot_controller::{
    Bot, BotInput, Difficulty, HardOpening, OPENING_CELLS, calculate_move,
};
