use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Result, TracksError};
use crate::infer::{TrackType, infer_track_type};

/// Lines consulted around an `imported` line, backward when checking for an
/// existing `type` property and forward when picking a value from `path`.
pub const SCAN_WINDOW: usize = 10;

/// Insert missing `tracks/<N>/type = ...` lines into a scene document.
///
/// Scans line by line for `tracks/<N>/imported = ` markers. When no matching
/// `type` line exists within the preceding [`SCAN_WINDOW`] lines, a new one
/// is inserted immediately before the marker, with its value taken from the
/// first `path` line for the same track within the following window
/// (rotation when there is none).
///
/// A `type` line placed outside the backward window is not detected, so a
/// second pass over such a document inserts a duplicate. That matches how
/// these scene files are laid out in practice and is left as is.
pub fn add_missing_track_types(content: &str) -> Result<String> {
    static IMPORTED_REGEX: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    let imported_re = IMPORTED_REGEX
        .get_or_init(|| Regex::new(r"^tracks/(\d+)/imported = "))
        .as_ref()
        .map_err(|e| TracksError::Regex(e.clone()))?;

    let lines: Vec<&str> = content.split('\n').collect();
    let mut fixed_lines: Vec<String> = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        if let Some(caps) = imported_re.captures(line) {
            let track_num = caps.get(1).unwrap().as_str();

            let type_key = format!("tracks/{}/type = ", track_num);
            let start = i.saturating_sub(SCAN_WINDOW);
            let has_type = lines[start..i].iter().any(|prev| prev.contains(&type_key));

            if !has_type {
                let path_key = format!("tracks/{}/path = ", track_num);
                let end = (i + SCAN_WINDOW).min(lines.len());
                let track_type = lines[i..end]
                    .iter()
                    .find(|next| next.contains(&path_key))
                    .map(|path_line| infer_track_type(path_line))
                    .unwrap_or(TrackType::Rotation);

                fixed_lines.push(format!(
                    "tracks/{}/type = {}",
                    track_num,
                    track_type.as_str()
                ));
            }
        }

        fixed_lines.push((*line).to_string());
    }

    Ok(fixed_lines.join("\n"))
}
