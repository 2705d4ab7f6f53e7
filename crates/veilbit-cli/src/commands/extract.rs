use std::path::PathBuf;

use clap::Args;
use veilbit_core::Result;

use crate::cli::DomainArg;

/// Recovers a hidden payload from a stego image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Stego image that contains the hidden payload
    #[arg(value_name = "stego file")]
    pub stego: PathBuf,

    /// Recovered payload will be stored as file
    #[arg(value_name = "out file")]
    pub write_to_file: PathBuf,

    /// Password used to decrypt the payload
    #[arg(value_name = "password")]
    pub password: String,

    /// Embedding domain
    #[arg(long, value_enum, default_value = "lsb")]
    pub domain: DomainArg,
}

impl ExtractArgs {
    pub fn run(self) -> Result<()> {
        veilbit_core::commands::extract(
            &self.stego,
            &self.write_to_file,
            Some(self.password),
            self.domain.into(),
        )?;

        println!("[+] Written extracted data to {}", self.write_to_file.display());

        Ok(())
    }
}
