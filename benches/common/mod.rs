#![allow(dead_code)]

use rand::distributions::{Distribution, Uniform};
use rand::prelude::ThreadRng;
use rand::seq::index::sample;

/// Numbers of set bits the density benchmark generates words for.
pub const DENSITIES: [usize; 9] = [0, 1, 4, 8, 16, 32, 48, 60, 64];

pub fn fill_random_vec(rng: &mut ThreadRng, len: usize) -> Vec<u64> {
    let sample = Uniform::new_inclusive(0, u64::MAX);

    let mut vec = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(sample.sample(rng));
    }

    vec
}

/// Generate a word with exactly `ones` set bits at random positions.
pub fn word_with_density(rng: &mut ThreadRng, ones: usize) -> u64 {
    sample(rng, 64, ones)
        .into_iter()
        .fold(0, |word, bit| word | (1 << bit))
}
