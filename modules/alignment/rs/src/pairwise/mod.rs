//! Pairwise alignments with a linear gap penalty.
//!
//! Both the global and the local builders fill the full `(m+1)x(n+1)` score matrix. Common affixes
//! are never trimmed here: the bordering matches may belong to the optimal local alignment, and
//! the global score depends on them through the gap placement.

pub mod alignment;
pub mod global;
pub mod local;
