//! Randomized option ordering.
//!
//! Questions store their correct answer at index 0. Before display the options
//! are shuffled, and the shuffler reports where that first option ended up so
//! the state machine can score the player's pick.

use rand::Rng;

/// Shuffled options plus the display position of the correct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleResult<T> {
    pub options: Vec<T>,
    pub correct_index: usize,
}

/// Shuffle `options` with the thread-local RNG.
///
/// See [`shuffle_options_with`].
pub fn shuffle_options<T: Clone>(options: &[T]) -> ShuffleResult<T> {
    shuffle_options_with(options, &mut rand::thread_rng())
}

/// Fisher-Yates shuffle of a copy of `options`, tracking where the element
/// originally at index 0 lands.
///
/// The correct option is followed by its original position, not by value, so
/// duplicate option text can't shift the reported index. The input slice is
/// left untouched. An empty input yields an empty list and index 0.
pub fn shuffle_options_with<T, R>(options: &[T], rng: &mut R) -> ShuffleResult<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = options.to_vec();
    let mut origins: Vec<usize> = (0..shuffled.len()).collect();
    let mut correct_index = 0;

    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
        origins.swap(i, j);

        if origins[i] == 0 {
            correct_index = i;
        } else if origins[j] == 0 {
            correct_index = j;
        }
    }

    ShuffleResult {
        options: shuffled,
        correct_index,
    }
}

/// Identity ordering, for when shuffling is turned off in settings.
pub fn unshuffled<T: Clone>(options: &[T]) -> ShuffleResult<T> {
    ShuffleResult {
        options: options.to_vec(),
        correct_index: 0,
    }
}
