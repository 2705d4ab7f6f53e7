use std::path::PathBuf;

use clap::Args;
use veilbit_core::Result;

use crate::cli::DomainArg;

/// Hides an encrypted payload file inside a carrier image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as a PNG or JPEG file, used readonly
    #[arg(value_name = "img file")]
    pub image: PathBuf,

    /// Payload file to hide in the image
    #[arg(value_name = "payload file")]
    pub payload: PathBuf,

    /// Password used to encrypt the payload
    #[arg(value_name = "password")]
    pub password: String,

    /// Final stego image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        default_value = "out_stego.png"
    )]
    pub write_to_file: PathBuf,

    /// Embedding domain
    #[arg(long, value_enum, default_value = "lsb")]
    pub domain: DomainArg,
}

impl HideArgs {
    pub fn run(self) -> Result<()> {
        veilbit_core::commands::hide(
            &self.image,
            &self.payload,
            &self.write_to_file,
            Some(self.password),
            self.domain.into(),
        )?;

        println!(
            "[+] {} embedded into {}",
            self.payload.display(),
            self.write_to_file.display()
        );

        Ok(())
    }
}
