//! Fuzzy skill matching.
//!
//! Rules, first applicable wins:
//! 1. normalized forms are equal
//! 2. both normalized forms are longer than `min_substring_len` and one
//!    contains the other ("react" vs "react js")
//! 3. Ratcliff/Obershelp similarity ≥ `threshold`, only for strings of at
//!    most `MAX_SIMILARITY_CHARS` characters

use crate::scoring::config::MatcherConfig;
use crate::scoring::normalizer::normalize_skill;

/// Longest input the similarity rule is computed for; longer pairs only get
/// the exact and substring rules.
pub const MAX_SIMILARITY_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, Default)]
pub struct SkillMatcher {
    config: MatcherConfig,
}

impl SkillMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Normalizes both skills and decides whether they denote the same skill.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        self.matches_normalized(&normalize_skill(a), &normalize_skill(b))
    }

    fn matches_normalized(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }

        let (len_a, len_b) = (a.chars().count(), b.chars().count());
        let min_len = self.config.min_substring_len;
        if len_a > min_len && len_b > min_len && (a.contains(b) || b.contains(a)) {
            return true;
        }

        if len_a > MAX_SIMILARITY_CHARS || len_b > MAX_SIMILARITY_CHARS {
            return false;
        }

        similarity(a, b) >= self.config.threshold
    }
}

/// Ratcliff/Obershelp ratio in `[0, 1]`: twice the matched characters over the
/// combined length, where matches are found by taking the longest common block
/// and recursing into the unmatched pieces on either side.
///
/// Inputs are put in a fixed order first so ties in block selection resolve
/// the same way regardless of argument order, keeping the ratio symmetric.
pub fn similarity(a: &str, b: &str) -> f64 {
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (start_a, start_b, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_chars(&a[..start_a], &b[..start_b])
        + matching_chars(&a[start_a + len..], &b[start_b + len..])
}

/// Longest common contiguous run as `(start_a, start_b, len)`; earliest wins on ties.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    let mut row = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            row[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            let run = row[j + 1];
            if run > best.2 {
                best = (i + 1 - run, j + 1 - run, run);
            }
        }
        std::mem::swap(&mut prev, &mut row);
    }

    best
}
