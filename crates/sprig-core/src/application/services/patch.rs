//! Anchored text insertion into an existing file.

use std::path::Path;

use crate::application::ports::Filesystem;
use crate::error::SprigResult;

/// What `patch_anchor` did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The insertion was written immediately after the anchor.
    Inserted,
    /// The insertion literal was already present; the file was not touched.
    AlreadyPresent,
    /// The anchor literal was not found; the file was not touched.
    AnchorMissing,
}

/// Insert `insertion` immediately after the first occurrence of `anchor`
/// in the file at `path`.
///
/// Idempotent by construction: if the insertion literal is already present
/// anywhere in the file, nothing is written and `AlreadyPresent` is
/// returned, so repeated invocations cannot duplicate the insertion.
/// A missing anchor is reported as `AnchorMissing`, distinct from the hard
/// I/O errors the filesystem port raises.
pub fn patch_anchor(
    fs: &dyn Filesystem,
    path: &Path,
    anchor: &str,
    insertion: &str,
) -> SprigResult<PatchOutcome> {
    let text = fs.read_to_string(path)?;

    if text.contains(insertion) {
        return Ok(PatchOutcome::AlreadyPresent);
    }
    let Some(at) = text.find(anchor) else {
        return Ok(PatchOutcome::AnchorMissing);
    };

    let end = at + anchor.len();
    let mut patched = String::with_capacity(text.len() + insertion.len());
    patched.push_str(&text[..end]);
    patched.push_str(insertion);
    patched.push_str(&text[end..]);

    fs.write_file(path, &patched)?;
    Ok(PatchOutcome::Inserted)
}

// ── tests ─────────────────────────────────────────────────────────────────────
