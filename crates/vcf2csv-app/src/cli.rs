//! Command line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use vcf2csv_core::codec::TextCodec;
use vcf2csv_core::config::{HeaderMode, Settings};

use crate::error::AppResult;
use crate::pipeline::ConvertOptions;

/// Convert vCard (.vcf) files to CSV.
#[derive(Debug, Parser)]
#[command(name = "vcf2csv", version, about)]
pub struct Cli {
    /// Path to the input vCard file
    pub input_vcf: PathBuf,

    /// Path to the output CSV file
    pub output_csv: PathBuf,

    /// Path for the intermediate fixed vCard file [default: <INPUT_STEM>_fixed.vcf]
    #[arg(long = "fixed", value_name = "FIXED_VCF")]
    pub fixed_vcf: Option<PathBuf>,

    /// Character encoding of every file, as a WHATWG label (overrides config)
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// How the CSV header is derived: first-record or union (overrides config)
    #[arg(long, value_name = "MODE")]
    pub header_mode: Option<HeaderMode>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter directive: `-v` flags win over the configured level.
    #[must_use]
    pub fn log_level<'a>(&self, configured: &'a str) -> &'a str {
        match self.verbose {
            0 => configured,
            1 => "debug",
            _ => "trace",
        }
    }

    /// ## Summary
    /// Merges the flags with loaded settings into conversion options.
    ///
    /// ## Errors
    /// Returns an error if the chosen encoding label is unknown or cannot be
    /// written.
    pub fn to_options(&self, settings: &Settings) -> AppResult<ConvertOptions> {
        let codec = match self.encoding.as_deref() {
            Some(label) => TextCodec::for_label(label)?,
            None => settings.conversion.codec()?,
        };

        Ok(ConvertOptions {
            input: self.input_vcf.clone(),
            output: self.output_csv.clone(),
            fixed: self.fixed_vcf.clone(),
            codec,
            header_mode: self.header_mode.unwrap_or(settings.conversion.header_mode),
        })
    }
}
