//!
//! Choice strategies used in the Eulerian traversal
//!
//! The traversal asks the chooser which unused edge to follow and which
//! node to restart from. Any answer is valid, so the chooser only changes
//! the ordering of the output, never its correctness.
//!
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

pub trait EdgeChooser {
    /// Pick an index in `0..n`. `n` is always positive.
    fn choose(&mut self, n: usize) -> usize;
}

impl<C: EdgeChooser + ?Sized> EdgeChooser for &mut C {
    fn choose(&mut self, n: usize) -> usize {
        (**self).choose(n)
    }
}

///
/// Uniformly random choice from the wrapped rng
///
#[derive(Debug, Clone)]
pub struct RandomChooser<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    pub fn new(rng: R) -> Self {
        RandomChooser { rng }
    }
}

impl RandomChooser<Xoshiro256PlusPlus> {
    /// Reproducible chooser from a seed
    pub fn from_seed(seed: u64) -> Self {
        RandomChooser::new(Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<R: Rng> EdgeChooser for RandomChooser<R> {
    fn choose(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

///
/// Always picks the first candidate
///
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChooser;

impl EdgeChooser for FirstChooser {
    fn choose(&mut self, _n: usize) -> usize {
        0
    }
}

///
/// Replays a fixed sequence of indices (modulo `n`), then falls back to 0.
///
/// Used to force specific orderings.
///
#[derive(Debug, Clone, Default)]
pub struct ScriptedChooser {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedChooser {
    pub fn new(script: Vec<usize>) -> Self {
        ScriptedChooser {
            script,
            position: 0,
        }
    }
}

impl EdgeChooser for ScriptedChooser {
    fn choose(&mut self, n: usize) -> usize {
        let i = self.script.get(self.position).copied().unwrap_or(0);
        self.position += 1;
        i % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_chooser_is_reproducible() {
        let mut a = RandomChooser::from_seed(3);
        let mut b = RandomChooser::from_seed(3);
        let xs: Vec<usize> = (0..20).map(|_| a.choose(7)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.choose(7)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 7));
        assert_eq!(a.choose(1), 0);
    }
    #[test]
    fn scripted_chooser() {
        let mut c = ScriptedChooser::new(vec![1, 5, 2]);
        assert_eq!(c.choose(3), 1);
        assert_eq!(c.choose(3), 2);
        assert_eq!(c.choose(4), 2);
        assert_eq!(c.choose(4), 0);
        assert_eq!(FirstChooser.choose(10), 0);
    }
    #[test]
    fn chooser_by_reference() {
        fn pick<C: EdgeChooser>(mut c: C) -> usize {
            c.choose(5)
        }
        let mut c = ScriptedChooser::new(vec![4]);
        assert_eq!(pick(&mut c), 4);
        assert_eq!(pick(&mut c), 0);
    }
}
