use strum_macros::Display;

#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum Tile {
    Empty,
    Numbered(u8),
    Bomb,
}

impl Tile {
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self == &Tile::Empty
    }

    #[allow(dead_code)]
    pub fn is_bomb(&self) -> bool {
        self == &Tile::Bomb
    }

    #[allow(dead_code)]
    pub fn is_numbered(&self) -> bool {
        match self {
            Tile::Numbered(_) => true,
            _ => false,
        }
    }

    pub fn get_char_repr(&self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Numbered(x) => std::char::from_digit(*x as u32, 10).unwrap(),
            Tile::Bomb => 'X',
        }
    }
}
