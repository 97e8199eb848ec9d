//! An editing session: the open tree and where it came from and goes to.

use std::path::{Path, PathBuf};

use story_core::{load, save, Config, TreeError};
use story_model::StoryTree;

/// Everything an editor needs besides its prompter.
#[derive(Debug)]
pub struct Session {
    pub tree: StoryTree,
    pub config: Config,
    source: PathBuf,
    output: Option<PathBuf>,
}

impl Session {
    /// Wrap an already loaded tree.
    pub fn new(tree: StoryTree, source: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            tree,
            config,
            source: source.into(),
            output: None,
        }
    }

    /// Load `source` into a new session.
    pub fn open(source: impl Into<PathBuf>, config: Config) -> Result<Self, TreeError> {
        let source = source.into();
        let tree = load(&source)?;
        Ok(Self::new(tree, source, config))
    }

    /// Set where saves go.
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Save to the known output path. Returns `Ok(None)` when none is set yet.
    pub fn save(&self) -> Result<Option<PathBuf>, TreeError> {
        match &self.output {
            Some(path) => {
                save(&self.tree, path, &self.config.save)?;
                Ok(Some(path.clone()))
            }
            None => Ok(None),
        }
    }

    /// Save to `path` and remember it for later saves.
    pub fn save_to(&mut self, path: impl Into<PathBuf>) -> Result<(), TreeError> {
        let path = path.into();
        save(&self.tree, &path, &self.config.save)?;
        log::info!("saved {}", path.display());
        self.output = Some(path);
        Ok(())
    }
}
