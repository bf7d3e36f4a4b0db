// src/guide_enumeration.rs

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::composition::{gc_fraction, has_homopolymer_run};
use crate::errors::{DesignError, Result};

/// Filter settings for one enumeration pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignParameters {
    pub guide_len: usize,
    pub gc_min: f64,
    pub gc_max: f64,
    pub homopolymer_len: usize,
    pub n_guides: usize,
}

impl DesignParameters {
    pub fn validate(&self) -> Result<()> {
        if self.guide_len < 1 {
            return Err(DesignError::InvalidParameter(
                "guide length must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.gc_min) || !(0.0..=1.0).contains(&self.gc_max) {
            return Err(DesignError::InvalidParameter(
                "GC bounds must lie in [0, 1]".to_string(),
            ));
        }
        if self.gc_min > self.gc_max {
            return Err(DesignError::InvalidParameter(format!(
                "minimum GC content {} exceeds maximum {}",
                self.gc_min, self.gc_max
            )));
        }
        if self.homopolymer_len < 1 {
            return Err(DesignError::InvalidParameter(
                "homopolymer length must be at least 1".to_string(),
            ));
        }
        if self.n_guides < 1 {
            return Err(DesignError::InvalidParameter(
                "requested guide count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One retained guide window. Positions are 1-based within the target
/// region, not within the full genome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideCandidate {
    pub position: usize,
    pub sequence: String,
    pub gc_content: f64,
    pub approx_amino_acid_position: usize,
}

/// Slides a `guide_len` window across the region with unit stride and keeps
/// windows whose GC content lies in `[gc_min, gc_max]` and which carry no
/// homopolymer run of `homopolymer_len` or more.
///
/// A region shorter than the guide length yields an empty list, not an
/// error. Output order is the left-to-right scan order.
pub fn enumerate_guides(region: &str, params: &DesignParameters) -> Vec<GuideCandidate> {
    let mut candidates = Vec::new();
    if region.len() < params.guide_len {
        return candidates;
    }

    for i in 0..=region.len() - params.guide_len {
        let window = &region[i..i + params.guide_len];
        let gc = gc_fraction(window);
        if params.gc_min <= gc
            && gc <= params.gc_max
            && !has_homopolymer_run(window, params.homopolymer_len)
        {
            candidates.push(GuideCandidate {
                position: i + 1,
                sequence: window.to_string(),
                gc_content: (gc * 1000.0).round() / 1000.0,
                // Fixed-frame heuristic anchored at the region start; it
                // deliberately ignores the true reading frame.
                approx_amino_acid_position: i / 3 + 1,
            });
        }
    }
    candidates
}

/// Uniform shuffle then truncate, so every candidate has an equal chance of
/// inclusion. A seed makes the sample reproducible; without one the RNG is
/// seeded from entropy.
pub fn sample_guides(
    mut candidates: Vec<GuideCandidate>,
    n_guides: usize,
    seed: Option<u64>,
) -> Vec<GuideCandidate> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    candidates.shuffle(&mut rng);
    candidates.truncate(n_guides);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn params(guide_len: usize, gc_min: f64, gc_max: f64, homopolymer_len: usize) -> DesignParameters {
        DesignParameters {
            guide_len,
            gc_min,
            gc_max,
            homopolymer_len,
            n_guides: 50,
        }
    }

    #[test]
    fn retains_gc_rich_window_and_rejects_homopolymer() {
        let region = "AUGCGCGCGCAUUUAGGC";
        let candidates = enumerate_guides(region, &params(4, 0.5, 1.0, 3));

        let kept: Vec<&str> = candidates.iter().map(|c| c.sequence.as_str()).collect();
        assert!(kept.contains(&"GCGC"));
        // "UUUA" fails both ways: gc 0.0 and a run of three U's.
        assert!(!kept.contains(&"UUUA"));
        for c in &candidates {
            assert!(!c.sequence.contains("UUU"));
            assert!(c.gc_content >= 0.5);
        }
    }

    #[test]
    fn region_shorter_than_guide_yields_empty_list() {
        let candidates = enumerate_guides("AUG", &params(4, 0.0, 1.0, 10));
        assert!(candidates.is_empty());
    }

    #[test]
    fn windows_tile_region_with_unit_stride() {
        let region = "AUGCGAUCGA";
        let candidates = enumerate_guides(region, &params(4, 0.0, 1.0, 10));
        assert_eq!(candidates.len(), region.len() - 4 + 1);
        for (idx, c) in candidates.iter().enumerate() {
            assert_eq!(c.position, idx + 1);
            assert_eq!(c.sequence.len(), 4);
        }
    }

    #[test]
    fn positions_and_codon_index_are_one_based() {
        let candidates = enumerate_guides("GCGCGC", &params(3, 0.0, 1.0, 10));
        assert_eq!(candidates[0].position, 1);
        assert_eq!(candidates[0].approx_amino_acid_position, 1);
        assert_eq!(candidates[3].position, 4);
        assert_eq!(candidates[3].approx_amino_acid_position, 2);
    }

    #[test]
    fn gc_content_is_rounded_to_three_decimals() {
        // One G in a window of 3 -> 0.3333... -> 0.333
        let candidates = enumerate_guides("GAU", &params(3, 0.0, 1.0, 10));
        assert_eq!(candidates[0].gc_content, 0.333);
    }

    #[test]
    fn gc_bounds_are_inclusive() {
        let candidates = enumerate_guides("AUGC", &params(4, 0.5, 0.5, 10));
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn enumeration_is_deterministic_before_sampling() {
        let region = "AUGCGCGCGCAUUUAGGCAUCGAUCG";
        let p = params(6, 0.3, 0.8, 3);
        let first = enumerate_guides(region, &p);
        let second = enumerate_guides(region, &p);
        assert_eq!(first, second);
    }

    #[test]
    fn sample_is_bounded_by_candidate_count() {
        let candidates = enumerate_guides("AUGCGA", &params(4, 0.0, 1.0, 10));
        assert_eq!(candidates.len(), 3);
        let sample = sample_guides(candidates, 5, Some(7));
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn sample_truncates_to_requested_count() {
        let candidates = enumerate_guides("AUGCGAUCGAUGCA", &params(4, 0.0, 1.0, 10));
        assert!(candidates.len() > 2);
        let sample = sample_guides(candidates, 2, Some(7));
        assert_eq!(sample.len(), 2);
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let candidates = enumerate_guides("AUGCGAUCGAUGCAGGCAUU", &params(5, 0.0, 1.0, 10));
        let a = sample_guides(candidates.clone(), 4, Some(42));
        let b = sample_guides(candidates, 4, Some(42));
        assert_eq!(a, b);
    }

    #[test]
    fn sampling_never_invents_candidates() {
        let candidates = enumerate_guides("AUGCGAUCGAUGCAGGCAUU", &params(5, 0.0, 1.0, 10));
        let positions: HashSet<usize> = candidates.iter().map(|c| c.position).collect();
        let sample = sample_guides(candidates, 6, None);
        let sampled: HashSet<usize> = sample.iter().map(|c| c.position).collect();
        assert_eq!(sample.len(), sampled.len());
        assert!(sampled.is_subset(&positions));
    }

    #[test]
    fn validate_rejects_each_bad_field() {
        let good = DesignParameters {
            guide_len: 28,
            gc_min: 0.3,
            gc_max: 0.7,
            homopolymer_len: 4,
            n_guides: 50,
        };
        assert!(good.validate().is_ok());

        let cases = [
            DesignParameters { guide_len: 0, ..good.clone() },
            DesignParameters { gc_min: -0.1, ..good.clone() },
            DesignParameters { gc_max: 1.5, ..good.clone() },
            DesignParameters { gc_min: 0.8, gc_max: 0.2, ..good.clone() },
            DesignParameters { homopolymer_len: 0, ..good.clone() },
            DesignParameters { n_guides: 0, ..good.clone() },
        ];
        for bad in cases {
            assert!(
                matches!(bad.validate(), Err(DesignError::InvalidParameter(_))),
                "{:?} should fail validation",
                bad
            );
        }
    }
}
