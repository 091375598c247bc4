use super::basic_types::SizeType;
use super::board::Board;
use super::errors::Error;
use super::mask::Mask;
use super::random::RandomSource;
use super::reveal::flood_fill;
use super::tile::Tile;
use strum_macros::Display;

#[derive(Eq, PartialEq, Display, Debug, Clone, Copy)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        self != &Status::InProgress
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum TileView {
    Hidden,
    Flagged,
    Revealed(Tile),
}

impl TileView {
    pub fn get_char_repr(&self) -> char {
        match self {
            TileView::Hidden => 'O',
            TileView::Flagged => 'H',
            TileView::Revealed(tile) => tile.get_char_repr(),
        }
    }
}

pub fn is_won(board: &Board, revealed: &Mask) -> bool {
    for y in 0..board.get_height() {
        for x in 0..board.get_width() {
            if !board.is_bomb(x, y) && !revealed.get(x, y) {
                return false;
            }
        }
    }
    true
}

pub struct Game {
    board: Board,
    revealed: Mask,
    flagged: Mask,
    status: Status,
}

impl Game {
    pub fn new(board: Board) -> Game {
        let width = board.get_width();
        let height = board.get_height();
        Game {
            board,
            revealed: Mask::new(width, height),
            flagged: Mask::new(width, height),
            status: Status::InProgress,
        }
    }

    pub fn generate(
        width: SizeType,
        height: SizeType,
        bomb_count: SizeType,
    ) -> Result<Game, Error> {
        Ok(Game::new(Board::generate(width, height, bomb_count)?))
    }

    pub fn generate_with(
        width: SizeType,
        height: SizeType,
        bomb_count: SizeType,
        random: &mut dyn RandomSource,
    ) -> Result<Game, Error> {
        Ok(Game::new(Board::generate_with(
            width, height, bomb_count, random,
        )?))
    }

    pub fn reveal(&mut self, x: SizeType, y: SizeType) -> Result<Status, Error> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        if x >= self.board.get_width() || y >= self.board.get_height() {
            return Err(Error::OutOfBounds);
        }
        if self.flagged.get(x, y) {
            return Ok(self.status);
        }
        if self.board.is_bomb(x, y) {
            self.revealed.set(x, y, true);
            self.status = Status::Lost;
            return Ok(self.status);
        }

        flood_fill(&self.board, &mut self.revealed, &self.flagged, x, y);
        if is_won(&self.board, &self.revealed) {
            self.status = Status::Won;
        }
        Ok(self.status)
    }

    pub fn toggle_flag(&mut self, x: SizeType, y: SizeType) -> Result<(), Error> {
        if self.status.is_terminal() {
            return Ok(());
        }
        if x >= self.board.get_width() || y >= self.board.get_height() {
            return Err(Error::OutOfBounds);
        }
        if !self.revealed.get(x, y) {
            self.flagged.toggle(x, y);
        }
        Ok(())
    }

    pub fn get_status(&self) -> Status {
        self.status
    }

    pub fn get_width(&self) -> SizeType {
        self.board.get_width()
    }

    pub fn get_height(&self) -> SizeType {
        self.board.get_height()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: &self.board,
            revealed: &self.revealed,
            flagged: &self.flagged,
            status: self.status,
        }
    }
}

pub struct Snapshot<'a> {
    board: &'a Board,
    revealed: &'a Mask,
    flagged: &'a Mask,
    status: Status,
}

impl<'a> Snapshot<'a> {
    pub fn get_width(&self) -> SizeType {
        self.board.get_width()
    }

    pub fn get_height(&self) -> SizeType {
        self.board.get_height()
    }

    pub fn get_status(&self) -> Status {
        self.status
    }

    pub fn get_tile_view(&self, x: SizeType, y: SizeType) -> Result<TileView, Error> {
        let tile = self.board.get_tile(x, y)?;
        if self.flagged.get(x, y) {
            Ok(TileView::Flagged)
        } else if !self.revealed.get(x, y) {
            Ok(TileView::Hidden)
        } else {
            Ok(TileView::Revealed(tile))
        }
    }

    pub fn get_char_repr(&self, x: SizeType, y: SizeType) -> Result<char, Error> {
        Ok(self.get_tile_view(x, y)?.get_char_repr())
    }
}
