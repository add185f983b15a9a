use std::fs;

use tracks::TracksError;
use tracks::process::tracks_fix;

#[test]
fn test_fix_scene_file_in_place() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("soldier.tscn");

    let scene = concat!(
        "[sub_resource type=\"Animation\" id=\"Animation_walk\"]\n",
        "tracks/0/imported = true\n",
        "tracks/0/enabled = true\n",
        "tracks/0/path = NodePath(\"Skeleton3D:TorsoBone\")\n",
        "tracks/1/type = \"rotation\"\n",
        "tracks/1/imported = true\n",
        "tracks/1/path = NodePath(\"Skeleton3D:HeadBone\")\n",
    );
    fs::write(&path, scene).expect("Failed to write scene file");

    tracks_fix(&path).expect("Patch failed");

    let patched = fs::read_to_string(&path).expect("Failed to read scene file");
    let expected = concat!(
        "[sub_resource type=\"Animation\" id=\"Animation_walk\"]\n",
        "tracks/0/type = \"position\"\n",
        "tracks/0/imported = true\n",
        "tracks/0/enabled = true\n",
        "tracks/0/path = NodePath(\"Skeleton3D:TorsoBone\")\n",
        "tracks/1/type = \"rotation\"\n",
        "tracks/1/imported = true\n",
        "tracks/1/path = NodePath(\"Skeleton3D:HeadBone\")\n",
    );
    assert_eq!(patched, expected);
}

#[test]
fn test_fix_leaves_complete_scene_untouched() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("complete.tscn");

    let scene = concat!(
        "tracks/0/type = \"rotation\"\n",
        "tracks/0/imported = true\n",
        "tracks/0/path = NodePath(\"Skeleton3D:CloakBone\")\n",
    );
    fs::write(&path, scene).expect("Failed to write scene file");

    tracks_fix(&path).expect("Patch failed");

    let patched = fs::read_to_string(&path).expect("Failed to read scene file");
    assert_eq!(patched, scene);
}

#[test]
fn test_fix_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.tscn");

    let result = tracks_fix(&path);
    assert!(matches!(result, Err(TracksError::Io(_))));
}
