use crate::domain::ScaffoldLayout;
use crate::ports::{Git, GitHub, ProjectFilesystem};

/// Application context holding the collaborators a command runs against.
pub struct AppContext<G: Git, H: GitHub, F: ProjectFilesystem> {
    layout: ScaffoldLayout,
    git: G,
    github: H,
    filesystem: F,
}

impl<G: Git, H: GitHub, F: ProjectFilesystem> AppContext<G, H, F> {
    /// Create a new application context.
    pub fn new(layout: ScaffoldLayout, git: G, github: H, filesystem: F) -> Self {
        Self { layout, git, github, filesystem }
    }

    pub fn layout(&self) -> &ScaffoldLayout {
        &self.layout
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn github(&self) -> &H {
        &self.github
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}
