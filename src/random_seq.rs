use crate::common::{Sequence, VALID_BASES};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

///
/// generate random bases of given length from seed
///
pub fn generate(length: usize, seed: u64) -> Sequence {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..length)
        .map(|_| VALID_BASES[rng.gen_range(0..VALID_BASES.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::sequence_to_string;

    #[test]
    fn random_seq() {
        let s = generate(50, 0);
        println!("{:?}", sequence_to_string(&s));
        assert_eq!(s.len(), 50);
        assert!(s.iter().all(|b| VALID_BASES.contains(b)));
        assert_eq!(s, generate(50, 0));
        assert_eq!(&generate(10, 0)[..], &s[..10]);
        assert_ne!(s, generate(50, 11));
        assert!(generate(0, 0).is_empty());
    }
}
