//! Run configuration built from command-line arguments.

use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    paths,
};

/// Validated inputs for a conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Color resource file to read.
    input: PathBuf,
    /// Existing directory that receives the colorsets.
    output: PathBuf,
}

impl Config {
    /// Validate the input file and output directory.
    ///
    /// The output directory must already exist; it is never created.
    pub(crate) fn new(input: &Path, output: &Path) -> Result<Self> {
        if !input.is_file() {
            return Err(Error::InputMissing {
                path: input.to_path_buf(),
            });
        }

        if !output.exists() {
            return Err(Error::OutputMissing {
                path: output.to_path_buf(),
            });
        }
        if !output.is_dir() {
            return Err(Error::OutputNotDirectory {
                path: output.to_path_buf(),
            });
        }

        Ok(Self {
            input: input.to_path_buf(),
            output: paths::normalize_path(output),
        })
    }

    /// Return the color resource file.
    pub(crate) fn input(&self) -> &Path {
        &self.input
    }

    /// Return the output directory.
    pub(crate) fn output(&self) -> &Path {
        &self.output
    }
}
