use std::sync::Arc;

use dinopark_domain::SizeClass;

use crate::infrastructure::ports::RandomPort;

/// Derives a random length from a free-text specification.
///
/// The size class is read from the first size keyword in the text ("huge",
/// "omg", "😱", "large"); the length is then drawn uniformly from that
/// class's range. Text without a keyword yields a small dinosaur.
pub struct DinosaurLengthDeterminator {
    random: Arc<dyn RandomPort>,
}

impl DinosaurLengthDeterminator {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    pub fn length_from_specification(&self, specification: &str) -> u32 {
        let range = SizeClass::from_specification(specification).length_range();
        self.random.gen_range(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockRandomPort;
    use crate::infrastructure::random::SystemRandom;
    use mockall::predicate::*;

    const TRIALS: usize = 1000;

    fn assert_lengths_within(specification: &str, min: u32, max: u32) {
        let determinator = DinosaurLengthDeterminator::new(Arc::new(SystemRandom::new()));
        for _ in 0..TRIALS {
            let length = determinator.length_from_specification(specification);
            assert!(
                (min..=max).contains(&length),
                "{specification:?} produced {length}, expected {min}..={max}"
            );
        }
    }

    #[test]
    fn huge_specifications_are_between_30_and_100() {
        assert_lengths_within("huge dinosaur", 30, 100);
        assert_lengths_within("OMG what a monster", 30, 100);
        assert_lengths_within("😱 run", 30, 100);
    }

    #[test]
    fn large_specifications_are_between_10_and_29() {
        assert_lengths_within("large herbivore", 10, 29);
        assert_lengths_within("A LARGE carnivore", 10, 29);
    }

    #[test]
    fn other_specifications_are_between_1_and_9() {
        assert_lengths_within("give me all the cookies!!", 1, 9);
        assert_lengths_within("", 1, 9);
    }

    #[test]
    fn draws_from_range_of_first_keyword() {
        let mut random = MockRandomPort::new();
        random
            .expect_gen_range()
            .with(eq(10), eq(29))
            .times(1)
            .returning(|min, _| min);

        let determinator = DinosaurLengthDeterminator::new(Arc::new(random));

        assert_eq!(
            determinator.length_from_specification("large and then huge"),
            10
        );
    }
}
