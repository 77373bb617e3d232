use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use clap::Parser;

use crate::error::StartupError;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// File to open. Exactly one file can be edited at a time.
    #[clap(value_name = "FILE", help = "file to view")]
    files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    files: Vec<PathBuf>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self { files: args.files }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self { files: args.files }
    }

    /// The single file to edit
    pub fn file(&self) -> Result<&Path, StartupError> {
        match self.files.as_slice() {
            [] => Err(StartupError::NoFile),
            [file] => Ok(file.as_path()),
            _ => Err(StartupError::TooManyFiles),
        }
    }
}
