//! Fixture writer.
//!
//! A case directory holds `input.txt`, `expected.txt` and, for sort cases, an
//! optional `description.txt`. All artifacts are written into a hidden staging
//! directory next to the target and moved into place with a single rename, so
//! a failed run never leaves a half-written case behind.

use crate::element::Elements;
use crate::error::{FixtureError, Result};
use crate::map::Operation;
use crate::oracle;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const INPUT_FILE: &str = "input.txt";
pub const EXPECTED_FILE: &str = "expected.txt";
pub const DESCRIPTION_FILE: &str = "description.txt";

const ARTIFACT_FILES: [&str; 3] = [INPUT_FILE, EXPECTED_FILE, DESCRIPTION_FILE];

/// What was written for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureSummary {
    pub name: String,
    pub dir: PathBuf,
    /// Operations or elements in `input.txt`.
    pub input_len: usize,
    /// Entries in `expected.txt`.
    pub expected_len: usize,
    pub input_sha256: String,
    pub expected_sha256: String,
}

// ---------------------------------------------------------------------------
// Hashing writer
// ---------------------------------------------------------------------------

/// Passes bytes through to `inner` while hashing them.
pub struct HashingWriter<W: Write> {
    inner: W,
    hasher: Sha256,
}

impl<W: Write> HashingWriter<W> {
    pub fn new(inner: W) -> Self {
        HashingWriter {
            inner,
            hasher: Sha256::new(),
        }
    }

    /// Flush and return the inner writer with the hex digest of everything written.
    pub fn finish(mut self) -> io::Result<(W, String)> {
        self.inner.flush()?;
        Ok((self.inner, hex::encode(self.hasher.finalize())))
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

pub type ArtifactWriter = HashingWriter<BufWriter<File>>;

// ---------------------------------------------------------------------------
// Staging directory
// ---------------------------------------------------------------------------

/// A staging directory that replaces `final_dir` on [`CaseStaging::commit`]
/// and is removed if dropped uncommitted.
pub struct CaseStaging {
    final_dir: PathBuf,
    staging_dir: PathBuf,
    committed: bool,
}

impl CaseStaging {
    pub fn begin(final_dir: &Path) -> Result<Self> {
        let name = case_name(final_dir)?;
        ensure_replaceable(final_dir)?;
        let parent = final_dir.parent().unwrap_or_else(|| Path::new(""));
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| FixtureError::io(parent, e))?;
        }
        let staging_dir = parent.join(format!(".{}.staging-{}", name, std::process::id()));
        if staging_dir.exists() {
            fs::remove_dir_all(&staging_dir).map_err(|e| FixtureError::io(&staging_dir, e))?;
        }
        fs::create_dir(&staging_dir).map_err(|e| FixtureError::io(&staging_dir, e))?;
        tracing::debug!(staging = %staging_dir.display(), "staging case");
        Ok(CaseStaging {
            final_dir: final_dir.to_path_buf(),
            staging_dir,
            committed: false,
        })
    }

    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    /// Write one artifact through `body` and return its SHA-256 hex digest.
    pub fn write_artifact<F>(&self, file_name: &str, body: F) -> Result<String>
    where
        F: FnOnce(&mut ArtifactWriter) -> io::Result<()>,
    {
        let path = self.staging_dir.join(file_name);
        let file = File::create(&path).map_err(|e| FixtureError::io(&path, e))?;
        let mut writer = HashingWriter::new(BufWriter::new(file));
        body(&mut writer).map_err(|e| FixtureError::io(&path, e))?;
        let (buffered, digest) = writer.finish().map_err(|e| FixtureError::io(&path, e))?;
        let file = buffered
            .into_inner()
            .map_err(|e| FixtureError::io(&path, e.into_error()))?;
        file.sync_all().map_err(|e| FixtureError::io(&path, e))?;
        Ok(digest)
    }

    /// Move the staged artifacts into the final case directory.
    pub fn commit(mut self) -> Result<()> {
        if self.final_dir.exists() {
            clear_case_dir(&self.final_dir)?;
        }
        fs::rename(&self.staging_dir, &self.final_dir).map_err(|e| FixtureError::io(&self.final_dir, e))?;
        self.committed = true;
        tracing::debug!(dir = %self.final_dir.display(), "committed case");
        Ok(())
    }
}

impl Drop for CaseStaging {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_dir_all(&self.staging_dir);
        }
    }
}

/// A target may be replaced only if it is absent or holds nothing but artifacts.
fn ensure_replaceable(final_dir: &Path) -> Result<()> {
    if !final_dir.exists() {
        return Ok(());
    }
    if !final_dir.is_dir() {
        return Err(FixtureError::Usage(format!(
            "'{}' exists and is not a directory",
            final_dir.display()
        )));
    }
    let entries = fs::read_dir(final_dir).map_err(|e| FixtureError::io(final_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| FixtureError::io(final_dir, e))?;
        let file_name = entry.file_name();
        let is_artifact = ARTIFACT_FILES.iter().any(|a| file_name == *a)
            && entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_artifact {
            return Err(FixtureError::Usage(format!(
                "'{}' holds '{}', which is not a fixture artifact; refusing to replace it",
                final_dir.display(),
                file_name.to_string_lossy()
            )));
        }
    }
    Ok(())
}

/// Remove the artifacts of a previous case, then the emptied directory.
fn clear_case_dir(final_dir: &Path) -> Result<()> {
    for file in ARTIFACT_FILES {
        let path = final_dir.join(file);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(FixtureError::io(&path, e)),
        }
    }
    fs::remove_dir(final_dir).map_err(|e| FixtureError::io(final_dir, e))
}

/// Last path component of a case directory.
pub fn case_name(case_dir: &Path) -> Result<String> {
    case_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            FixtureError::Usage(format!(
                "'{}' does not name a case directory",
                case_dir.display()
            ))
        })
}

// ---------------------------------------------------------------------------
// Case writers
// ---------------------------------------------------------------------------

fn write_pretty_json<T: Serialize + ?Sized>(w: &mut ArtifactWriter, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value).map_err(io::Error::from)?;
    w.write_all(b"\n")
}

/// Write a map case: the operations and the state they replay to.
pub fn write_map_fixture(case_dir: &Path, ops: &[Operation]) -> Result<FixtureSummary> {
    let name = case_name(case_dir)?;
    let state = oracle::replay(ops);

    let staging = CaseStaging::begin(case_dir)?;
    let input_sha256 = staging.write_artifact(INPUT_FILE, |w| write_pretty_json(w, ops))?;
    let expected_sha256 = staging.write_artifact(EXPECTED_FILE, |w| write_pretty_json(w, &state))?;
    staging.commit()?;

    let summary = FixtureSummary {
        name,
        dir: case_dir.to_path_buf(),
        input_len: ops.len(),
        expected_len: state.len(),
        input_sha256,
        expected_sha256,
    };
    tracing::info!(
        case = %summary.name,
        operations = summary.input_len,
        keys = summary.expected_len,
        "wrote map fixture"
    );
    Ok(summary)
}

/// Write a sort case. `elements` is sorted in place after the input is written.
pub fn write_sort_fixture(
    case_dir: &Path,
    mut elements: Elements,
    description: Option<&str>,
) -> Result<FixtureSummary> {
    let name = case_name(case_dir)?;
    let staging = CaseStaging::begin(case_dir)?;

    if let Some(text) = description {
        staging.write_artifact(DESCRIPTION_FILE, |w| writeln!(w, "{}", text))?;
    }
    let input_sha256 = staging.write_artifact(INPUT_FILE, |w| elements.write_list(w))?;
    oracle::sort_in_place(&mut elements);
    let expected_sha256 = staging.write_artifact(EXPECTED_FILE, |w| elements.write_list(w))?;
    staging.commit()?;

    let summary = FixtureSummary {
        name,
        dir: case_dir.to_path_buf(),
        input_len: elements.len(),
        expected_len: elements.len(),
        input_sha256,
        expected_sha256,
    };
    tracing::info!(
        case = %summary.name,
        kind = elements.kind().as_str(),
        elements = summary.input_len,
        "wrote sort fixture"
    );
    Ok(summary)
}
