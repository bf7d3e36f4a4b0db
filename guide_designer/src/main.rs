// src/main.rs

mod api_handler;
mod composition;
mod errors;
mod export;
mod genome_sequence;
mod guide_enumeration;
mod region;

use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::errors::DesignError;
use crate::genome_sequence::fetch_genome_sequence;
use crate::guide_enumeration::{enumerate_guides, sample_guides, DesignParameters, GuideCandidate};
use crate::region::extract_region;

/// Cas13 guide RNA designer: fetches a viral genome from NCBI, extracts a
/// target region, and samples guide candidates passing GC and homopolymer
/// filters. Defaults target the SARS-CoV-2 spike gene.
#[derive(Debug, Parser)]
#[command(name = "guide_designer")]
#[command(version, about)]
struct Cli {
    /// NCBI contact email (required for E-utilities requests)
    #[arg(long)]
    email: String,

    /// NCBI nucleotide accession
    #[arg(long, default_value = "NC_045512.2")]
    accession: String,

    /// Target region start, 1-based inclusive
    #[arg(long, default_value_t = 21563)]
    region_start: usize,

    /// Target region end, 1-based inclusive
    #[arg(long, default_value_t = 25384)]
    region_end: usize,

    /// Guide RNA length in nucleotides
    #[arg(long, default_value_t = 28)]
    guide_len: usize,

    /// Minimum GC content fraction
    #[arg(long, default_value_t = 0.3)]
    gc_min: f64,

    /// Maximum GC content fraction
    #[arg(long, default_value_t = 0.7)]
    gc_max: f64,

    /// Shortest disallowed homopolymer run
    #[arg(long, default_value_t = 4)]
    homopolymer_len: usize,

    /// Number of guides to sample from the filtered candidates
    #[arg(long, default_value_t = 50)]
    n_guides: usize,

    /// Seed for the sampling RNG; omit for a fresh random sample per run
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file holding the filter parameters, overriding the flags above
    #[arg(long)]
    params: Option<PathBuf>,

    /// Write the sampled candidates to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbosity (-v = debug, default info)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn design_parameters(&self) -> Result<DesignParameters, DesignError> {
        let params = match &self.params {
            Some(path) => {
                let file = File::open(path)?;
                serde_json::from_reader(file).map_err(|e| {
                    DesignError::InvalidParameter(format!(
                        "could not parse {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
            None => DesignParameters {
                guide_len: self.guide_len,
                gc_min: self.gc_min,
                gc_max: self.gc_max,
                homopolymer_len: self.homopolymer_len,
                n_guides: self.n_guides,
            },
        };
        params.validate()?;
        Ok(params)
    }

    fn validate_identity_and_region(&self) -> Result<(), DesignError> {
        if self.email.trim().is_empty() {
            return Err(DesignError::InvalidParameter(
                "an NCBI contact email is required".to_string(),
            ));
        }
        if self.region_start < 1 {
            return Err(DesignError::InvalidParameter(
                "region start must be at least 1".to_string(),
            ));
        }
        if self.region_end <= self.region_start {
            return Err(DesignError::InvalidParameter(format!(
                "region end {} must be greater than region start {}",
                self.region_end, self.region_start
            )));
        }
        Ok(())
    }
}

const MAX_GUIDES_TO_DISPLAY: usize = 10;

fn print_guide_table(guides: &[GuideCandidate]) {
    println!(
        "{:>10}  {:<40}  {:>6}  {:>8}",
        "Position", "Guide sequence", "GC", "Approx AA"
    );
    for guide in guides.iter().take(MAX_GUIDES_TO_DISPLAY) {
        println!(
            "{:>10}  {:<40}  {:>6.3}  {:>8}",
            guide.position, guide.sequence, guide.gc_content, guide.approx_amino_acid_position
        );
    }
    if guides.len() > MAX_GUIDES_TO_DISPLAY {
        println!("...and {} more guides", guides.len() - MAX_GUIDES_TO_DISPLAY);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("Starting guide RNA design for accession {}", cli.accession);

    cli.validate_identity_and_region()?;
    let params = cli.design_parameters()?;

    let genome_rna = fetch_genome_sequence(&cli.accession, &cli.email)?;
    info!("Genome length after transcription: {}", genome_rna.len());

    let target_region = extract_region(&genome_rna, cli.region_start, cli.region_end)?;
    info!(
        "Target region {}..{} extracted ({} nt)",
        cli.region_start,
        cli.region_end,
        target_region.len()
    );

    let candidates = enumerate_guides(&target_region, &params);
    info!("{} candidate windows passed the filters", candidates.len());

    let guides = sample_guides(candidates, params.n_guides, cli.seed);

    if guides.is_empty() {
        warn!("No valid guide RNAs found. Try adjusting your design parameters.");
    } else {
        println!("{} guide RNAs successfully generated.", guides.len());
        print_guide_table(&guides);
    }

    if let Some(path) = &cli.output {
        export::write_candidates_csv(path, &guides)?;
    }

    Ok(())
}
