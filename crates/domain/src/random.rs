use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Return an index in `0..upper`. `upper` must not be zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Reproducible random source.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}

/// Cycles through a fixed list of values, each reduced modulo the requested bound.
///
/// An empty sequence always yields zero.
#[derive(Debug, Default, Clone)]
pub struct Sequence {
    values: Vec<usize>,
    position: usize,
}

impl Sequence {
    #[must_use]
    pub fn new(values: &[usize]) -> Self {
        Self {
            values: values.to_vec(),
            position: 0,
        }
    }
}

impl RandomSource for Sequence {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % upper
    }
}

/// Return a shuffled copy using the Fisher-Yates algorithm.
pub fn shuffle<T: Clone>(items: &[T], random: &mut impl RandomSource) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = random.next_index(i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::identity(&[3, 2, 1], vec![1, 2, 3, 4])]
    #[case::rotate(&[0], vec![2, 3, 4, 1])]
    #[case::mixed(&[1], vec![1, 3, 4, 2])]
    fn test_shuffle(#[case] values: &[usize], #[case] expected: Vec<u32>) {
        let mut random = Sequence::new(values);
        assert_eq!(shuffle(&[1, 2, 3, 4], &mut random), expected);
    }

    #[test]
    fn test_shuffle_empty() {
        assert_eq!(shuffle::<u32>(&[], &mut ThreadRandom), Vec::<u32>::new());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let items = (0..20).collect::<Vec<u32>>();
        let mut shuffled = shuffle(&items, &mut ThreadRandom);
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let items = (0..20).collect::<Vec<u32>>();
        assert_eq!(
            shuffle(&items, &mut SeededRandom::new(42)),
            shuffle(&items, &mut SeededRandom::new(42))
        );
    }

    #[test]
    fn test_sequence() {
        let mut random = Sequence::new(&[5, 1]);
        assert_eq!(random.next_index(3), 2);
        assert_eq!(random.next_index(3), 1);
        assert_eq!(random.next_index(10), 5);
        assert_eq!(Sequence::default().next_index(4), 0);
    }

    #[test]
    fn test_thread_random_bounds() {
        let mut random = ThreadRandom;
        for upper in 1..50 {
            assert!(random.next_index(upper) < upper);
        }
    }
}
