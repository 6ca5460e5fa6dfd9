//! Deterministic yearly hypothesis draws.
//!
//! The digest is BLAKE3 over the UTF-8 bytes of `"{seed}-{year}"`, read as
//! eight big-endian `u32` words. Word `i` picks the `i`-th topic from the
//! shrinking pool, so a draw never repeats a topic and is reproducible in
//! any language that implements the same scheme.

use ohaeng_types::Topic;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Topics drawn for one year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearHypotheses {
    pub year: i32,
    pub topics: Vec<Topic>,
}

/// Seed string used by the session layer: `"{birth_year}-{element}"`.
pub fn seed_for(birth_year: i32, dominant: ohaeng_types::Element) -> String {
    format!("{}-{}", birth_year, dominant.as_str())
}

fn digest_words(seed: &str, year: i32) -> [u32; 8] {
    let digest = blake3::hash(format!("{seed}-{year}").as_bytes());
    let bytes = digest.as_bytes();
    let mut words = [0u32; 8];
    for (i, word) in words.iter_mut().enumerate() {
        let chunk = [
            bytes[i * 4],
            bytes[i * 4 + 1],
            bytes[i * 4 + 2],
            bytes[i * 4 + 3],
        ];
        *word = u32::from_be_bytes(chunk);
    }
    words
}

/// Draw `k` distinct topics for `year`. `k` is clamped to the catalogue size.
pub fn generate(seed: &str, year: i32, k: usize) -> Vec<Topic> {
    let k = k.min(Topic::CATALOGUE.len());
    let words = digest_words(seed, year);
    let mut pool = Topic::CATALOGUE.to_vec();
    let mut drawn = Vec::with_capacity(k);
    for word in words.iter().take(k) {
        let idx = (*word as usize) % pool.len();
        drawn.push(pool.remove(idx));
    }
    drawn
}

/// Draws for every year in `start..=end` (empty when `start > end`).
pub fn generate_range(seed: &str, start: i32, end: i32, k: usize) -> Vec<YearHypotheses> {
    let out: Vec<YearHypotheses> = (start..=end)
        .map(|year| YearHypotheses {
            year,
            topics: generate(seed, year, k),
        })
        .collect();
    debug!(seed, start, end, k, years = out.len(), "Hypotheses generated");
    out
}
