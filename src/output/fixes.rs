use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::IoError;
use crate::rule::{Diagnostic, TextEdit};

/// Applies non-overlapping edits to `source`. When two edits overlap, the one
/// starting earlier wins and the other is dropped.
pub fn apply_edits(source: &str, edits: &[&TextEdit]) -> String {
    let mut ordered: Vec<&TextEdit> = edits.to_vec();
    ordered.sort_by_key(|edit| (edit.start_byte, edit.end_byte));

    let mut accepted: Vec<&TextEdit> = Vec::with_capacity(ordered.len());
    let mut cursor = 0;
    for edit in ordered {
        if edit.start_byte < cursor
            || edit.end_byte > source.len()
            || !source.is_char_boundary(edit.start_byte)
            || !source.is_char_boundary(edit.end_byte)
        {
            debug!(start = edit.start_byte, end = edit.end_byte, "skipping edit");
            continue;
        }
        cursor = edit.end_byte;
        accepted.push(edit);
    }

    let mut out = String::with_capacity(source.len() + accepted.len() * 8);
    let mut last = 0;
    for edit in accepted {
        out.push_str(&source[last..edit.start_byte]);
        out.push_str(&edit.replacement);
        last = edit.end_byte;
    }
    out.push_str(&source[last..]);
    out
}

/// Writes every available fix for `diagnostics` back to `path`.
/// Returns the number of edits applied.
pub fn fix_file(path: &Path, diagnostics: &[Diagnostic]) -> Result<usize, IoError> {
    let edits: Vec<&TextEdit> = diagnostics.iter().filter_map(|d| d.fix.as_ref()).collect();
    if edits.is_empty() {
        return Ok(0);
    }

    let source = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
    let fixed = apply_edits(&source, &edits);
    if fixed == source {
        return Ok(0);
    }
    fs::write(path, fixed).map_err(|e| IoError::write_error(path, e))?;

    info!(file = %path.display(), edits = edits.len(), "applied fixes");
    Ok(edits.len())
}
