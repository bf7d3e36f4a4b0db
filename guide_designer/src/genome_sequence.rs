// src/genome_sequence.rs

use tracing::info;

use crate::api_handler::APIHandler;
use crate::errors::{DesignError, Result};

const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

/// Fetches a nucleotide record from NCBI efetch as FASTA and returns the
/// sequence transcribed to the RNA alphabet (T replaced by U).
///
/// The contact email is passed per request as NCBI usage policy asks, not
/// held as process-wide state.
pub fn fetch_genome_sequence(accession: &str, email: &str) -> Result<String> {
    info!("Fetching nucleotide record for accession: {}", accession);
    let api = APIHandler::new(EUTILS_BASE_URL)?;
    let fasta = api.get_plain_text(
        "efetch.fcgi",
        &[
            ("db", "nucleotide"),
            ("id", accession),
            ("rettype", "fasta"),
            ("retmode", "text"),
            ("email", email),
        ],
    )?;

    let sequence = parse_fasta_body(&fasta)?;
    info!("Fetched sequence of length {}", sequence.len());
    Ok(transcribe_to_rna(&sequence))
}

/// Strips FASTA header lines and concatenates the sequence lines, uppercased.
pub fn parse_fasta_body(body: &str) -> Result<String> {
    let sequence: String = body
        .lines()
        .filter(|line| !line.starts_with('>'))
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .concat()
        .to_uppercase();

    if sequence.is_empty() {
        return Err(DesignError::Retrieval(
            "Response contained no sequence data".to_string(),
        ));
    }
    Ok(sequence)
}

/// One-shot DNA-to-RNA transcription over the whole sequence.
pub fn transcribe_to_rna(sequence: &str) -> String {
    sequence.replace('T', "U")
}
