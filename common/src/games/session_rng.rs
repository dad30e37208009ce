use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform picks behind the computer's tie-breaks.
pub trait ChoiceSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl ChoiceSource for SessionRng {
    fn choose_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Replays a fixed list of picks, wrapping each into range. Falls back to
/// index 0 once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedChoices {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }

    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl ChoiceSource for ScriptedChoices {
    fn choose_index(&mut self, len: usize) -> usize {
        let pick = self.picks.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        pick % len
    }
}
