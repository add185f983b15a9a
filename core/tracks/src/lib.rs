//! Repair of imported animation tracks in Godot scene (.tscn) files.
//!
//! Some exporters emit track blocks with `imported`, `path` and key data but
//! no `type` property, which the engine refuses to load. This crate scans a
//! scene file line by line and inserts the missing `tracks/<N>/type` lines,
//! inferring the value from the track's bone path.

pub mod error;
pub mod infer;
pub mod patcher;
pub mod process;

pub use error::{Result, TracksError};
pub use infer::{TrackType, infer_track_type};
pub use patcher::{SCAN_WINDOW, add_missing_track_types};
