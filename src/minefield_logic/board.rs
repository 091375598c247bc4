use super::basic_types::{Position, SizeType};
use super::errors::Error;
use super::random::{RandomSource, ThreadRandom};
use super::tile::Tile;
use std::collections::HashSet;

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn get_tile_count(width: SizeType, height: SizeType) -> Result<SizeType, Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions);
    }
    match width.checked_mul(height) {
        Some(tile_count) => Ok(tile_count),
        None => Err(Error::InvalidDimensions),
    }
}

fn generate_bomb_locations(
    width: SizeType,
    height: SizeType,
    bomb_count: SizeType,
    random: &mut dyn RandomSource,
) -> HashSet<Position> {
    let mut bomb_locations = HashSet::new();
    while bomb_locations.len() < bomb_count {
        bomb_locations.insert((random.below(width), random.below(height)));
    }
    bomb_locations
}

fn get_neighbor_positions(
    width: SizeType,
    height: SizeType,
    x: SizeType,
    y: SizeType,
) -> HashSet<Position> {
    fn add(u: SizeType, i: i8) -> Option<SizeType> {
        if i.is_negative() {
            u.checked_sub(i.wrapping_abs() as u8 as usize)
        } else {
            u.checked_add(i as usize)
        }
    }

    let mut neighbors = HashSet::new();

    for offset in NEIGHBOR_OFFSETS.iter() {
        match (add(x, offset.0), add(y, offset.1)) {
            (Some(nx), Some(ny)) if nx < width && ny < height => {
                neighbors.insert((nx, ny));
            }
            _ => (),
        }
    }

    neighbors
}

fn count_adjacent_bombs(
    width: SizeType,
    height: SizeType,
    x: SizeType,
    y: SizeType,
    bomb_locations: &HashSet<Position>,
) -> u8 {
    let mut count: u8 = 0;

    for (nx, ny) in get_neighbor_positions(width, height, x, y) {
        if bomb_locations.contains(&(nx, ny)) {
            count = count + 1;
        }
    }

    count
}

fn generate_tiles(
    width: SizeType,
    height: SizeType,
    bomb_locations: &HashSet<Position>,
) -> Vec<Vec<Tile>> {
    let mut tiles = Vec::new();

    for y in 0..height {
        let mut row = Vec::new();
        for x in 0..width {
            if bomb_locations.contains(&(x, y)) {
                row.push(Tile::Bomb);
            } else {
                let count = count_adjacent_bombs(width, height, x, y, bomb_locations);
                if count == 0 {
                    row.push(Tile::Empty);
                } else {
                    row.push(Tile::Numbered(count));
                }
            }
        }
        tiles.push(row);
    }
    tiles
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    width: SizeType,
    height: SizeType,
    bomb_locations: HashSet<Position>,
    tiles: Vec<Vec<Tile>>,
}

impl Board {
    pub(super) fn with_bombs(
        width: SizeType,
        height: SizeType,
        bomb_locations: HashSet<Position>,
    ) -> Result<Board, Error> {
        get_tile_count(width, height)?;
        let tiles = generate_tiles(width, height, &bomb_locations);
        Ok(Board {
            width,
            height,
            bomb_locations,
            tiles,
        })
    }

    pub fn generate(
        width: SizeType,
        height: SizeType,
        bomb_count: SizeType,
    ) -> Result<Board, Error> {
        Board::generate_with(width, height, bomb_count, &mut ThreadRandom)
    }

    pub fn generate_with(
        width: SizeType,
        height: SizeType,
        bomb_count: SizeType,
        random: &mut dyn RandomSource,
    ) -> Result<Board, Error> {
        let tile_count = get_tile_count(width, height)?;
        if bomb_count >= tile_count {
            return Err(Error::InvalidBombCount);
        }
        let bomb_locations = generate_bomb_locations(width, height, bomb_count, random);
        Board::with_bombs(width, height, bomb_locations)
    }

    pub fn get_width(&self) -> SizeType {
        self.width
    }

    pub fn get_height(&self) -> SizeType {
        self.height
    }

    pub fn get_bomb_count(&self) -> SizeType {
        self.bomb_locations.len()
    }

    pub fn get_tile(&self, x: SizeType, y: SizeType) -> Result<Tile, Error> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds);
        }
        Ok(self.tiles[y][x])
    }

    pub fn is_bomb(&self, x: SizeType, y: SizeType) -> bool {
        self.bomb_locations.contains(&(x, y))
    }

    pub(super) fn get_neighbor_positions(&self, x: SizeType, y: SizeType) -> HashSet<Position> {
        get_neighbor_positions(self.width, self.height, x, y)
    }
}
