// src/export.rs

use std::path::Path;
use tracing::info;

use crate::errors::Result;
use crate::guide_enumeration::GuideCandidate;

/// Writes the sampled candidates as a header-plus-rows CSV with no index
/// column. The header is written up front so an empty result still
/// produces a well-formed file.
pub fn write_candidates_csv(path: &Path, candidates: &[GuideCandidate]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record([
        "Nucleotide_Position",
        "Guide_Sequence",
        "GC_Content",
        "Approx_Amino_Acid_Position",
    ])?;
    for candidate in candidates {
        wtr.serialize(candidate)?;
    }
    wtr.flush()?;
    info!("Wrote {} guide candidates to {}", candidates.len(), path.display());
    Ok(())
}
