use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::domain::{Language, TaskDescriptor};

/// Ephemeral filesystem area owned by exactly one execution. Holds either a
/// scratch directory or a single scratch file; removal happens on drop, so
/// every exit path of a run releases it.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    is_dir: bool,
}

impl Workspace {
    /// Decides the workspace shape and creates it under `base`.
    ///
    /// A directory is required whenever the language resolves functions by
    /// file name (Octave) or the task ships an auxiliary data file; a lone
    /// scratch file suffices otherwise. Names are uuid-unique, so concurrent
    /// provisioning never collides.
    pub async fn provision(
        base: &Path,
        language: Language,
        task: Option<&TaskDescriptor>,
        extension: &str,
    ) -> std::io::Result<Self> {
        let asset = task.and_then(|t| t.asset());
        let needs_dir = language == Language::Octave || asset.is_some();

        let workspace = if needs_dir {
            let root = base.join(format!("submission_{}", Uuid::new_v4()));
            tokio::fs::create_dir_all(&root).await?;
            Self { root, is_dir: true }
        } else {
            tokio::fs::create_dir_all(base).await?;
            let root = base.join(format!("submission_{}.{extension}", Uuid::new_v4()));
            // Claim the name up front so the drop cleanup always has a
            // file to remove.
            tokio::fs::write(&root, "").await?;
            Self {
                root,
                is_dir: false,
            }
        };
        tracing::debug!("provisioned workspace {}", workspace.root.display());

        // Auxiliary data goes in before any submission files.
        if let Some((filename, text)) = asset {
            workspace.write_file(filename, text).await?;
        }

        Ok(workspace)
    }

    /// Writes one named file into a directory workspace; for a lone scratch
    /// file the name is ignored and the file itself is (re)written.
    pub async fn write_file(&self, name: &str, contents: &str) -> std::io::Result<()> {
        tokio::fs::write(self.resolve(name), contents).await
    }

    pub fn resolve(&self, name: &str) -> PathBuf {
        if self.is_dir {
            self.root.join(name)
        } else {
            self.root.clone()
        }
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Directory the child process runs in: the scratch directory itself,
    /// or `None` to inherit the process working directory for lone files.
    pub fn working_dir(&self) -> Option<&Path> {
        self.is_dir.then_some(self.root.as_path())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let removed = if self.is_dir {
            std::fs::remove_dir_all(&self.root)
        } else {
            std::fs::remove_file(&self.root)
        };
        if let Err(e) = removed {
            tracing::warn!("failed to remove workspace {}: {}", self.root.display(), e);
        }
    }
}
