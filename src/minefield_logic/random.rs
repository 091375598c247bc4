use super::basic_types::SizeType;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait RandomSource {
    // Draws a uniform number from 0..upper. upper must be positive.
    fn below(&mut self, upper: SizeType) -> SizeType;
}

pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&mut self, upper: SizeType) -> SizeType {
        rand::thread_rng().gen_range(0, upper)
    }
}

pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> SeededRandom {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, upper: SizeType) -> SizeType {
        self.rng.gen_range(0, upper)
    }
}
