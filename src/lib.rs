mod minefield_logic;
pub use minefield_logic::basic_types::{Position, SizeType};
pub use minefield_logic::board::Board;
pub use minefield_logic::errors::Error;
pub use minefield_logic::game::{is_won, Game, Snapshot, Status, TileView};
pub use minefield_logic::mask::Mask;
pub use minefield_logic::random::{RandomSource, SeededRandom, ThreadRandom};
pub use minefield_logic::tile::Tile;
