//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_FILE;

/// homedex: manage a collection of smart home devices
#[derive(Debug, Parser)]
#[command(name = "homedex", version, about, long_about = None)]
pub struct Cli {
    /// Data file holding the device collection
    #[arg(env = "HOMEDEX_FILE", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file
    #[arg(long, short = 'c', env = "HOMEDEX_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl Cli {
    /// Data file chosen on the command line or through the environment.
    pub fn data_file(&self) -> Option<PathBuf> {
        self.file
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
    }
}
