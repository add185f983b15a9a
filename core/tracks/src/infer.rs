//! Track type inference from a `path` property line.

/// Value written for a missing `tracks/<N>/type` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackType {
    Rotation,
    Position,
}

impl TrackType {
    /// Rendered form as it appears in the scene file, quotes included.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackType::Rotation => "\"rotation\"",
            TrackType::Position => "\"position\"",
        }
    }
}

// Torso paths that actually address one of these bones stay rotation tracks.
const EXCLUDED_BONES: [&str; 4] = ["HeadBone", "LeftArmBone", "RightArmBone", "CloakBone"];

/// Decide the track type from the text of a `tracks/<N>/path = ...` line.
///
/// Paths ending at the torso bone hold position tracks; everything else
/// defaults to rotation. Plain substring matching, no structural parsing.
pub fn infer_track_type(path_line: &str) -> TrackType {
    if path_line.contains("TorsoBone\")")
        && !EXCLUDED_BONES.iter().any(|bone| path_line.contains(bone))
    {
        TrackType::Position
    } else {
        TrackType::Rotation
    }
}
