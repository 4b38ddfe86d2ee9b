use seqdp_alignment_rs::pairwise::alignment::{Aligned, Op};

mod global;

pub type Score = i32;

pub fn invrle(rle: &str) -> String {
    let gapfirst = Op::GapFirst.symbol();
    let gapsecond = Op::GapSecond.symbol();
    rle.chars()
        .map(|x| {
            if x == gapfirst {
                gapsecond
            } else if x == gapsecond {
                gapfirst
            } else {
                x
            }
        })
        .collect::<String>()
}

/// Aligned symbols without the gaps.
pub fn strip(aligned: &[Aligned<u8>]) -> Vec<u8> {
    aligned.iter().filter_map(|x| x.symbol().copied()).collect()
}

pub const SEQUENCES: &[&[u8]] = &[
    b"",
    b"A",
    b"ACGT",
    b"TGCA",
    b"GATTACA",
    b"GCATGCA",
    b"AAAXB",
    b"AAAYB",
    b"TGTTACGG",
    b"GGTTGACTA",
];
