use log::info;
use rand::prelude::{SeedableRng, StdRng};

/// Creates the RNG backing a simulation run.
///
/// A seed makes every draw reproducible for this build. Without one the generator is seeded from
/// OS entropy, so two runs will almost never produce the same flips.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!("Seeding RNG with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rngs_produce_the_same_stream() {
        let mut lhs = create_rng(Some(42));
        let mut rhs = create_rng(Some(42));

        let lhs: Vec<u32> = (0..16).map(|_| lhs.gen()).collect();
        let rhs: Vec<u32> = (0..16).map(|_| rhs.gen()).collect();

        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut lhs = create_rng(Some(1));
        let mut rhs = create_rng(Some(2));

        let lhs: Vec<u64> = (0..4).map(|_| lhs.gen()).collect();
        let rhs: Vec<u64> = (0..4).map(|_| rhs.gen()).collect();

        assert_ne!(lhs, rhs);
    }
}
