use super::basic_types::SizeType;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Mask {
    values: Vec<Vec<bool>>,
}

impl Mask {
    pub fn new(width: SizeType, height: SizeType) -> Mask {
        Mask {
            values: vec![vec![false; width]; height],
        }
    }

    pub fn get(&self, x: SizeType, y: SizeType) -> bool {
        self.values[y][x]
    }

    pub fn set(&mut self, x: SizeType, y: SizeType, value: bool) {
        self.values[y][x] = value;
    }

    pub fn toggle(&mut self, x: SizeType, y: SizeType) {
        self.values[y][x] = !self.values[y][x];
    }
}
