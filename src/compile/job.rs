// ABOUTME: One LaTeX compile cycle bound to a scoped temporary directory
// ABOUTME: Writes the source, runs the interpreter twice and reads back the PDF

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use tempfile::TempDir;
use tracing::{debug, warn};

use super::error::{CompileError, Result};

/// Fixed file names inside the job's working directory. LaTeX derives its
/// output names from the input job name, so everything is keyed off "texput".
pub const SOURCE_FILE: &str = "texput.tex";
pub const ARTIFACT_FILE: &str = "texput.pdf";
pub const LOG_FILE: &str = "texput.log";

/// A single compilation job.
///
/// Owns an exclusive temporary directory for its whole lifetime; the
/// directory and all contents are removed when the job is dropped, on every
/// exit path. Jobs are never shared, so concurrent compilations need no
/// coordination.
pub struct CompileJob {
    workdir: TempDir,
    interpreter: PathBuf,
}

impl CompileJob {
    /// Create a job for the given interpreter, resolving it up front so a
    /// missing binary fails before any work happens.
    pub fn new(interpreter: &str) -> Result<Self> {
        let interpreter = which::which(interpreter)
            .map_err(|_| CompileError::CompilerNotFound(interpreter.to_string()))?;
        let workdir = TempDir::new()?;
        Ok(Self {
            workdir,
            interpreter,
        })
    }

    /// Run the full compile cycle and return the PDF bytes.
    ///
    /// The interpreter runs twice unconditionally: cross-references (tables
    /// of contents, counters, labels) are only resolved on a second pass over
    /// state the first pass wrote out. Callers get no switch to skip it.
    pub fn run(&self, source: &str) -> Result<Vec<u8>> {
        fs::write(self.workdir.path().join(SOURCE_FILE), source)?;
        debug!(workdir = %self.workdir.path().display(), "source written");

        // Some interpreters exit nonzero on benign warnings; the first pass
        // tolerates that as long as the artifact showed up. The second pass
        // does not get the same leniency.
        let first = self.invoke(1)?;
        if !first.success() && !self.artifact_path().exists() {
            return Err(self.failed(first));
        }

        let second = self.invoke(2)?;
        if !second.success() {
            return Err(self.failed(second));
        }

        if !self.artifact_path().exists() {
            return Err(self.failed(second));
        }
        let artifact = fs::read(self.artifact_path())?;
        debug!(bytes = artifact.len(), "artifact read");
        Ok(artifact)
    }

    fn invoke(&self, pass: u32) -> Result<ExitStatus> {
        debug!(pass, interpreter = %self.interpreter.display(), "running interpreter");
        Command::new(&self.interpreter)
            .arg("--interaction=batchmode")
            .arg(SOURCE_FILE)
            .current_dir(self.workdir.path())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    CompileError::CompilerNotFound(self.interpreter.display().to_string())
                }
                _ => CompileError::Io(e),
            })
    }

    fn failed(&self, status: ExitStatus) -> CompileError {
        warn!(?status, "interpreter reported failure");
        let log = fs::read_to_string(self.log_path()).unwrap_or_default();
        CompileError::CompilationFailed { log }
    }

    fn artifact_path(&self) -> PathBuf {
        self.workdir.path().join(ARTIFACT_FILE)
    }

    fn log_path(&self) -> PathBuf {
        self.workdir.path().join(LOG_FILE)
    }
}
