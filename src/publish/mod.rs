//! Version-control publishing of generated artifacts.
//!
//! Only the playbook command talks to a repository, so the handle is opened
//! lazily inside that command and injected as a collaborator. Every other
//! command works without a repository being present at all.

use std::path::Path;

use git2::{Cred, CredentialType, PushOptions, RemoteCallbacks, Repository};
use tracing::debug;

use crate::error::Result;

/// Stage/commit/push against whatever repository and branch are checked out.
pub trait Publisher {
    fn stage(&mut self, path: &Path) -> Result<()>;
    fn commit(&mut self, message: &str) -> Result<()>;
    fn push(&mut self) -> Result<()>;
}

/// Publisher backed by the git repository at the working directory.
pub struct GitPublisher {
    repo: Repository,
}

impl GitPublisher {
    /// Open the repository containing `workdir`.
    pub fn open(workdir: &Path) -> Result<Self> {
        let repo = Repository::discover(workdir)?;
        Ok(Self { repo })
    }

    /// Remote to push to: the upstream of the checked-out branch, falling
    /// back to `origin`.
    fn push_remote(&self, refname: &str) -> String {
        self.repo
            .branch_upstream_remote(refname)
            .ok()
            .and_then(|buf| buf.as_str().map(str::to_string))
            .unwrap_or_else(|| "origin".to_string())
    }
}

impl Publisher for GitPublisher {
    fn stage(&mut self, path: &Path) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_path(path)?;
        index.write()?;
        debug!(path = %path.display(), "staged");
        Ok(())
    }

    fn commit(&mut self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;
        let parent = self.repo.head()?.peel_to_commit()?;
        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;
        debug!(%oid, "committed");
        Ok(())
    }

    fn push(&mut self) -> Result<()> {
        let head = self.repo.head()?;
        let refname = head
            .name()
            .unwrap_or("refs/heads/master")
            .to_string();
        let remote_name = self.push_remote(&refname);
        let mut remote = self.repo.find_remote(&remote_name)?;

        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(|url, username, allowed| {
            if allowed.contains(CredentialType::SSH_KEY) {
                Cred::ssh_key_from_agent(username.unwrap_or("git"))
            } else {
                let config = git2::Config::open_default()?;
                Cred::credential_helper(&config, url, username)
            }
        });
        let mut options = PushOptions::new();
        options.remote_callbacks(callbacks);

        debug!(remote = %remote_name, refspec = %refname, "pushing");
        remote.push(&[&refname], Some(&mut options))?;
        Ok(())
    }
}
