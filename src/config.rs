use std::path::PathBuf;

/// What the walker does with each selected member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print member names
    #[default]
    List,
    /// Write member payloads to disk
    Extract,
}

/// Run configuration, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Archive to read. `None` means the default tape device, which is unsupported.
    pub archive: Option<PathBuf>,
    pub mode: Mode,
    /// Print member names while extracting
    pub verbose: bool,
    /// Directory extracted members are written into
    pub output_dir: PathBuf,
    /// Requested member names, in command-line order. Empty selects everything.
    pub members: Vec<String>,
}

impl Config {
    pub fn new(mode: Mode) -> Self {
        Self {
            archive: None,
            mode,
            verbose: false,
            output_dir: PathBuf::from("."),
            members: Vec::new(),
        }
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
