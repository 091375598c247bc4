pub mod basic_types;
pub mod board;
pub mod errors;
pub mod game;
pub mod mask;
pub mod random;
pub mod reveal;
pub mod tile;
