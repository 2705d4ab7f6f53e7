use std::path::PathBuf;

use clap::Args;
use veilbit_core::Result;

/// Prints windowed LSB averages of an image, a quick steganalysis aid
#[derive(Args, Debug)]
pub struct AnalyseArgs {
    /// Image to analyse
    #[arg(value_name = "img file")]
    pub image: PathBuf,
}

impl AnalyseArgs {
    pub fn run(self) -> Result<()> {
        let stats = veilbit_core::commands::analyse(&self.image)?;
        if stats.windows() == 0 {
            println!("[-] Image too small to analyse");
            return Ok(());
        }

        for (name, series) in [
            ("red", &stats.red),
            ("green", &stats.green),
            ("blue", &stats.blue),
        ] {
            let mean = series.iter().sum::<f64>() / series.len() as f64;
            let min = series.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            println!(
                "{name:>5}: mean LSB {mean:.3} (min {min:.3}, max {max:.3}) over {} windows",
                series.len()
            );
        }

        Ok(())
    }
}
