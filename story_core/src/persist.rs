//! Whole-file load and save.
//!
//! A save serializes the complete tree to memory first and writes it with a
//! single call, so a failed encode never leaves a half-written file behind.

use std::fs;
use std::path::Path;

use story_model::StoryTree;

use crate::{parse_str, to_json_string, SaveConfig, TreeError};

/// Load a tree from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<StoryTree, TreeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = parse_str(&text)?;
    log::debug!("loaded {}", path.display());
    Ok(tree)
}

/// Save a tree to a JSON file, replacing its contents.
pub fn save(tree: &StoryTree, path: impl AsRef<Path>, config: &SaveConfig) -> Result<(), TreeError> {
    let path = path.as_ref();
    let text = to_json_string(tree, config.pretty)?;
    fs::write(path, text).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("saved {} base routes to {}", tree.route_count(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_model::Route;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let result = load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(TreeError::Io { .. })));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"routes\": [ { \"deaths\": [] } ] }").unwrap();

        assert!(matches!(load(&path), Err(TreeError::Parse(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tree.json");

        let mut tree = StoryTree::new();
        tree.add_route(Route::new("Prologue"));
        save(&tree, &path, &SaveConfig::default()).unwrap();

        let loaded = load(&path).unwrap();
        let names: Vec<_> = loaded.routes().map(|(_, r)| r.name.clone()).collect();
        assert_eq!(names, vec!["Prologue"]);
    }

    #[test]
    fn test_unwritable_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("tree.json");
        let result = save(&StoryTree::new(), &path, &SaveConfig::default());
        assert!(matches!(result, Err(TreeError::Io { .. })));
    }
}
