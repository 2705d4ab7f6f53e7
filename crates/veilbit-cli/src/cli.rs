use clap::{Parser, Subcommand, ValueEnum};
use veilbit_core::Domain;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Extract(extract::ExtractArgs),
    Analyse(analyse::AnalyseArgs),
}

/// Where in the carrier the payload bits are stored.
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum DomainArg {
    /// Least significant bits of the RGB pixel values
    #[default]
    Lsb,
    /// Least significant bits of quantized DCT coefficients
    Dct,
}

impl From<DomainArg> for Domain {
    fn from(value: DomainArg) -> Self {
        match value {
            DomainArg::Lsb => Domain::spatial(),
            DomainArg::Dct => Domain::frequency(),
        }
    }
}
