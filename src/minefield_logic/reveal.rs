use super::basic_types::{Position, SizeType};
use super::board::Board;
use super::mask::Mask;
use super::tile::Tile;
use indexmap::IndexSet;

struct TileVisiter {
    tiles_to_visit: IndexSet<Position>,
}

impl TileVisiter {
    fn new(x: SizeType, y: SizeType) -> TileVisiter {
        let mut tiles_to_visit = IndexSet::new();
        tiles_to_visit.insert((x, y));
        TileVisiter { tiles_to_visit }
    }

    fn extend_with_hidden_neighbors(
        &mut self,
        board: &Board,
        revealed: &Mask,
        x: SizeType,
        y: SizeType,
    ) {
        self.tiles_to_visit.extend(
            board
                .get_neighbor_positions(x, y)
                .into_iter()
                .filter(|&(nx, ny)| !revealed.get(nx, ny)),
        );
    }

    fn next(&mut self) -> Option<Position> {
        self.tiles_to_visit.pop()
    }
}

// Depth-first fill: reveals the starting tile and, from every empty tile,
// keeps revealing the 8 surrounding tiles. Numbered tiles are revealed but
// not expanded further. Flagged tiles are skipped entirely.
pub(super) fn flood_fill(
    board: &Board,
    revealed: &mut Mask,
    flagged: &Mask,
    x: SizeType,
    y: SizeType,
) {
    if x >= board.get_width() || y >= board.get_height() {
        return;
    }

    let mut visiter = TileVisiter::new(x, y);
    while let Some((x, y)) = visiter.next() {
        if flagged.get(x, y) || revealed.get(x, y) {
            continue;
        }
        revealed.set(x, y, true);
        if let Ok(Tile::Empty) = board.get_tile(x, y) {
            visiter.extend_with_hidden_neighbors(board, revealed, x, y);
        }
    }
}
