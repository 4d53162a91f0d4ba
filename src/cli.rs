use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, Mode};
use crate::error::TarError;

#[derive(Parser, Debug)]
#[command(name = "tarwalk")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(about = "List and extract ustar archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  tarwalk -tf archive.tar             list all members\n  \
  tarwalk -xvf archive.tar a.txt      extract a.txt, printing its name\n  \
  tarwalk -x -f archive.tar -C out    extract everything into out/")]
pub struct Cli {
    /// Archive file to read
    #[arg(short = 'f', value_name = "ARCHIVE")]
    pub file: Option<PathBuf>,

    /// List member names
    #[arg(short = 't')]
    pub list: bool,

    /// Extract members
    #[arg(short = 'x')]
    pub extract: bool,

    /// Print member names while extracting
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Extract into DIR instead of the current directory
    #[arg(short = 'C', value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Members to list or extract (default: all)
    #[arg(value_name = "NAME")]
    pub members: Vec<String>,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.extract { Mode::Extract } else { Mode::List }
    }

    /// Validate the flags and build the run configuration.
    ///
    /// Either an archive or `-t` must be given.
    pub fn into_config(self) -> Result<Config, TarError> {
        if self.file.is_none() && !self.list {
            return Err(TarError::MissingOperation);
        }

        Ok(Config {
            mode: self.mode(),
            archive: self.file,
            verbose: self.verbose,
            output_dir: self.directory,
            members: self.members,
        })
    }
}
