// src/composition.rs

pub const RNA_BASES: [char; 4] = ['A', 'U', 'C', 'G'];

/// Fraction of G/C bases in the window. Zero-length windows score 0.
pub fn gc_fraction(window: &str) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    let gc_count = window
        .bytes()
        .filter(|b| matches!(b, b'G' | b'C'))
        .count();
    gc_count as f64 / window.len() as f64
}

/// True iff any base repeats `max_len` times consecutively anywhere in the
/// window. A run of exactly `max_len` already counts; this is the minimum
/// disallowed run length.
pub fn has_homopolymer_run(window: &str, max_len: usize) -> bool {
    RNA_BASES.iter().any(|&base| {
        let run: String = std::iter::repeat(base).take(max_len).collect();
        window.contains(&run)
    })
}
