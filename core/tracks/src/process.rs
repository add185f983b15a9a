use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::patcher::add_missing_track_types;

/// Patch a scene file in place, inserting missing track type properties.
pub fn tracks_fix(input: &Path) -> Result<()> {
    let content = fs::read_to_string(input)?;
    let fixed = add_missing_track_types(&content)?;
    fs::write(input, fixed)?;
    println!("Added missing track types in {:?}", input);
    Ok(())
}
