//! Normalized metrics derived from raw distances and similarities.

#[inline(always)]
fn longest(len1: usize, len2: usize) -> Option<f64> {
    match len1.max(len2) {
        0 => None,
        x => Some(x as f64),
    }
}

/// `distance / max(len1, len2)`, clamped to `[0, 1]`. Two empty sequences are at distance `0`.
pub fn simple_matching_distance(distance: usize, len1: usize, len2: usize) -> f64 {
    match longest(len1, len2) {
        None => 0.0,
        Some(longest) => (distance as f64 / longest).clamp(0.0, 1.0),
    }
}

/// `1 - simple_matching_distance`.
pub fn simple_matching_coefficient(distance: usize, len1: usize, len2: usize) -> f64 {
    1.0 - simple_matching_distance(distance, len1, len2)
}

/// `similarity / max(len1, len2)`, clamped to `[0, 1]`. Two empty sequences are identical, i.e. `1`.
pub fn normalized_similarity(similarity: usize, len1: usize, len2: usize) -> f64 {
    match longest(len1, len2) {
        None => 1.0,
        Some(longest) => (similarity as f64 / longest).clamp(0.0, 1.0),
    }
}
