use std::path::{Path, PathBuf};

pub const TEMPLATES_DIR: &str = "templates";
pub const SOURCE_DIR: &str = "project";
pub const BUILD_DIR: &str = "build";

/// Local directories the provisioning workflow reads from and writes to.
///
/// All paths hang off the main working tree root. The scratch tree lives
/// inside the build folder and is recreated for every pushed branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldLayout {
    root: PathBuf,
}

impl ScaffoldLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Main working tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of template documents, one document per file.
    pub fn templates(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    /// Candidate project source subtree.
    pub fn source(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    pub fn build(&self) -> PathBuf {
        self.root.join(BUILD_DIR)
    }

    /// Scratch working tree used to assemble and push branches.
    pub fn scratch(&self) -> PathBuf {
        self.build().join(SOURCE_DIR)
    }
}
