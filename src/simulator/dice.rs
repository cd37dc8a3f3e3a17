//! Random source used by the hallway simulations.

use rand::Rng;

/// Uniform draws a simulated playthrough needs.
///
/// Every `rand::Rng` is a `HallwayDice`. Tests plug in scripted sources to pin
/// exact trial outcomes.
pub trait HallwayDice {
    /// Uniform value in `[0, 1)` compared against a success threshold.
    fn roll(&mut self) -> f64;

    /// Uniform hallway layout id in `[1, max_hall_number]`.
    fn pick_hall(&mut self, max_hall_number: u32) -> u32;
}

impl<R: Rng> HallwayDice for R {
    fn roll(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn pick_hall(&mut self, max_hall_number: u32) -> u32 {
        self.gen_range(1..=max_hall_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roll_in_unit_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let r = rng.roll();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_pick_hall_covers_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let hall = rng.pick_hall(4);
            assert!((1..=4).contains(&hall));
            seen[(hall - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_single_hall() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(rng.pick_hall(1), 1);
    }
}
