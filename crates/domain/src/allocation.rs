/// Time held per stretch including the transition to the next one.
pub const SECONDS_PER_STRETCH: u32 = 35;

/// Distribution of the session time and the number of exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub main_minutes: u32,
    pub cardio_minutes: u32,
    pub weights_minutes: u32,
    pub cardio_count: usize,
    pub weights_count: usize,
}

impl Allocation {
    #[must_use]
    pub fn new(duration_minutes: u32, stretching_minutes: u32, cardio_split: u32) -> Self {
        let split = cardio_split.min(100);
        let main_minutes = duration_minutes.saturating_sub(stretching_minutes);
        let cardio_minutes = u32::try_from(u64::from(main_minutes) * u64::from(split) / 100)
            .unwrap_or(main_minutes);
        let total = main_exercise_count(duration_minutes);
        let cardio_count = total * split as usize / 100;

        Self {
            main_minutes,
            cardio_minutes,
            weights_minutes: main_minutes - cardio_minutes,
            cardio_count,
            weights_count: total - cardio_count,
        }
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.cardio_count + self.weights_count
    }
}

/// Number of main exercises for a session of the given total duration.
#[must_use]
pub fn main_exercise_count(duration_minutes: u32) -> usize {
    match duration_minutes {
        0..=20 => 5,
        21..=45 => 8,
        46..=75 => 10,
        _ => 14,
    }
}

/// Upper bound of distinct stretches for the given stretching time.
#[must_use]
pub fn stretch_cap(stretching_minutes: u32) -> usize {
    match stretching_minutes {
        0..=5 => 5,
        6..=10 => 6,
        11..=15 => 8,
        16..=20 => 10,
        _ => 12,
    }
}

/// Number of times each stretch is repeated to fill the stretching time.
#[must_use]
pub fn rounds_per_stretch(stretching_minutes: u32, stretches: usize) -> u32 {
    let slots = u64::from(stretching_minutes) * 60 / u64::from(SECONDS_PER_STRETCH);
    let stretches = u64::try_from(stretches.max(1)).unwrap_or(u64::MAX);
    u32::try_from(slots / stretches).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(30, 5, 30, Allocation { main_minutes: 25, cardio_minutes: 7, weights_minutes: 18, cardio_count: 2, weights_count: 6 })]
    #[case(20, 0, 0, Allocation { main_minutes: 20, cardio_minutes: 0, weights_minutes: 20, cardio_count: 0, weights_count: 5 })]
    #[case(60, 10, 100, Allocation { main_minutes: 50, cardio_minutes: 50, weights_minutes: 0, cardio_count: 10, weights_count: 0 })]
    #[case(90, 15, 50, Allocation { main_minutes: 75, cardio_minutes: 37, weights_minutes: 38, cardio_count: 7, weights_count: 7 })]
    #[case::clamped_split(30, 0, 150, Allocation { main_minutes: 30, cardio_minutes: 30, weights_minutes: 0, cardio_count: 8, weights_count: 0 })]
    #[case::large_duration(50_000_000, 0, 100, Allocation { main_minutes: 50_000_000, cardio_minutes: 50_000_000, weights_minutes: 0, cardio_count: 14, weights_count: 0 })]
    #[case::saturating(10, 15, 30, Allocation { main_minutes: 0, cardio_minutes: 0, weights_minutes: 0, cardio_count: 1, weights_count: 4 })]
    fn test_allocation_new(
        #[case] duration: u32,
        #[case] stretching: u32,
        #[case] split: u32,
        #[case] expected: Allocation,
    ) {
        assert_eq!(Allocation::new(duration, stretching, split), expected);
    }

    #[rstest]
    #[case(0, 5)]
    #[case(20, 5)]
    #[case(21, 8)]
    #[case(45, 8)]
    #[case(46, 10)]
    #[case(75, 10)]
    #[case(76, 14)]
    #[case(120, 14)]
    fn test_main_exercise_count(#[case] duration: u32, #[case] expected: usize) {
        assert_eq!(main_exercise_count(duration), expected);
    }

    #[rstest]
    #[case(1, 5)]
    #[case(5, 5)]
    #[case(6, 6)]
    #[case(10, 6)]
    #[case(15, 8)]
    #[case(20, 10)]
    #[case(21, 12)]
    fn test_stretch_cap(#[case] minutes: u32, #[case] expected: usize) {
        assert_eq!(stretch_cap(minutes), expected);
    }

    #[rstest]
    #[case(5, 5, 1)]
    #[case(10, 6, 2)]
    #[case(20, 4, 8)]
    #[case(1, 3, 1)]
    #[case(5, 0, 8)]
    #[case(80_000_000, 12, 11_428_571)]
    fn test_rounds_per_stretch(#[case] minutes: u32, #[case] stretches: usize, #[case] expected: u32) {
        assert_eq!(rounds_per_stretch(minutes, stretches), expected);
    }
}
