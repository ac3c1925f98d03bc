// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides test fixtures, reference contexts and a stub LaTeX interpreter

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use texpress::TexConfig;

/// A minimal document every LaTeX installation can compile
pub const MINIMAL_DOCUMENT: &str = "\\documentclass{article}\n\
     \\begin{document}\n\
     This is a test!\n\
     \\end{document}\n";

/// The same document missing its closing construct
pub const UNBALANCED_DOCUMENT: &str = "\\documentclass{article}\n\
     \\begin{document}\n\
     This is a test!\n";

/// Directory holding the test template fixtures
pub fn template_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/templates")
}

/// Config pointing at the fixture templates, German locale
pub fn german_config() -> TexConfig {
    TexConfig::default()
        .with_template_dir(template_dir())
        .with_locale("de")
}

/// How the stub interpreter should behave across the two passes
pub enum StubBehavior {
    /// Exit 0 on both passes, artifact written each time
    Success,
    /// Exit 1 on the first pass but still produce the artifact (benign warning)
    WarnFirstPass,
    /// Exit 1 and never produce an artifact
    Fail,
    /// First pass succeeds with artifact, second pass exits 1
    FailSecondPass,
}

/// A fake LaTeX interpreter installed as a shell script.
///
/// Counts its invocations and records the working directory it ran in, so
/// tests can observe the two-pass policy and the temp-dir cleanup without a
/// TeX installation.
pub struct StubInterpreter {
    dir: TempDir,
    pub bin: PathBuf,
    count_file: PathBuf,
    cwd_file: PathBuf,
}

impl StubInterpreter {
    pub fn install(behavior: StubBehavior) -> Self {
        let dir = TempDir::new().unwrap();
        let count_file = dir.path().join("invocations");
        let cwd_file = dir.path().join("last-cwd");
        let bin = dir.path().join("stublatex");

        let count = count_file.display();
        let cwd = cwd_file.display();
        let prologue = format!(
            "#!/bin/sh\n\
             n=0\n\
             [ -f \"{count}\" ] && n=$(cat \"{count}\")\n\
             n=$((n + 1))\n\
             printf '%s' \"$n\" > \"{count}\"\n\
             pwd > \"{cwd}\"\n"
        );

        let body = match behavior {
            StubBehavior::Success => {
                "printf '%%PDF-1.4 stub' > texput.pdf\n\
                 printf 'stub pass ok\\n' > texput.log\n\
                 exit 0\n"
            }
            StubBehavior::WarnFirstPass => {
                "printf '%%PDF-1.4 stub' > texput.pdf\n\
                 printf 'stub warning\\n' > texput.log\n\
                 [ \"$n\" = \"1\" ] && exit 1\n\
                 exit 0\n"
            }
            StubBehavior::Fail => {
                "printf '! Emergency stop.\\n' > texput.log\n\
                 exit 1\n"
            }
            StubBehavior::FailSecondPass => {
                "printf '%%PDF-1.4 stub' > texput.pdf\n\
                 printf 'failed on the second pass\\n' > texput.log\n\
                 [ \"$n\" = \"1\" ] && exit 0\n\
                 exit 1\n"
            }
        };

        fs::write(&bin, format!("{prologue}{body}")).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
        }

        Self {
            dir,
            bin,
            count_file,
            cwd_file,
        }
    }

    /// Config using this stub as the interpreter
    pub fn config(&self) -> TexConfig {
        TexConfig::default()
            .with_template_dir(template_dir())
            .with_interpreter(self.bin.to_string_lossy())
    }

    /// Number of times the stub was invoked
    pub fn invocations(&self) -> u32 {
        fs::read_to_string(&self.count_file)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// The working directory of the most recent invocation
    pub fn recorded_workdir(&self) -> Option<PathBuf> {
        fs::read_to_string(&self.cwd_file)
            .ok()
            .map(|s| PathBuf::from(s.trim()))
    }
}
