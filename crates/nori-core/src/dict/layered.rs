use std::path::Path;

use tracing::{debug_span, info};

use super::system::SystemDictionary;
use super::user::UserDictionary;
use super::{Candidate, ConnectionMatrix, EntrySource, LoadError, Origin, OverridePolicy};
use crate::settings::settings;

/// System dictionary with an optional user dictionary layered on top.
///
/// Immutable once built; share it across threads with `Arc`.
pub struct Dictionary {
    system: SystemDictionary,
    user: Option<UserDictionary>,
    policy: OverridePolicy,
}

/// Load a system dictionary file and an optional user dictionary file.
pub fn load_dictionary(
    system_path: &Path,
    user_path: Option<&Path>,
) -> Result<Dictionary, LoadError> {
    Dictionary::load(system_path, user_path)
}

impl Dictionary {
    /// Either both files load and validate or an error naming the failing
    /// file is returned.
    pub fn load(system_path: &Path, user_path: Option<&Path>) -> Result<Self, LoadError> {
        let _span = debug_span!("load_dictionary").entered();
        let system = SystemDictionary::open(system_path).map_err(|e| LoadError::System {
            path: system_path.to_path_buf(),
            source: Box::new(e),
        })?;
        let user = user_path
            .map(|path| {
                UserDictionary::open(path, system.user_entry_ids()).map_err(|e| LoadError::User {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                })
            })
            .transpose()?;

        let stats = system.stats();
        info!(
            path = %system_path.display(),
            surfaces = stats.surfaces,
            entries = stats.entries,
            num_ids = stats.num_ids,
            user_words = user.as_ref().map_or(0, UserDictionary::len),
            "dictionary loaded"
        );
        Ok(Self::from_parts(system, user))
    }

    /// Compose already-built layers. The override policy comes from settings.
    pub fn from_parts(system: SystemDictionary, user: Option<UserDictionary>) -> Self {
        Self {
            system,
            user,
            policy: settings().user_dict.override_policy,
        }
    }

    pub fn with_override_policy(mut self, policy: OverridePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn override_policy(&self) -> OverridePolicy {
        self.policy
    }

    pub fn system(&self) -> &SystemDictionary {
        &self.system
    }

    pub fn user(&self) -> Option<&UserDictionary> {
        self.user.as_ref()
    }

    pub fn connection(&self) -> &ConnectionMatrix {
        self.system.connection()
    }

    /// Layers in precedence order, user first.
    fn layers(&self) -> impl Iterator<Item = &dyn EntrySource> {
        let user = self.user.as_ref().map(|u| u as &dyn EntrySource);
        user.into_iter()
            .chain(std::iter::once(&self.system as &dyn EntrySource))
    }

    /// Entries whose surface equals `surface`, user entries first. Under
    /// `Override` a user match hides the system entries.
    pub fn lookup_exact(&self, surface: &str) -> Vec<Candidate<'_>> {
        let char_len = surface.chars().count();
        let mut out = Vec::new();
        for layer in self.layers() {
            let origin = layer.origin();
            if origin == Origin::System
                && self.policy == OverridePolicy::Override
                && !out.is_empty()
            {
                break;
            }
            out.extend(layer.lookup(surface).iter().map(|entry| Candidate {
                entry,
                char_len,
                origin,
            }));
        }
        out
    }

    /// Every entry whose surface is a prefix of `text[position..]`, all
    /// lengths included. User candidates come first.
    pub fn lookup<'a>(&'a self, text: &[char], position: usize) -> Vec<Candidate<'a>> {
        let Some(rest) = text.get(position..) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut longest_user = 0;
        for layer in self.layers() {
            let origin = layer.origin();
            for m in layer.common_prefix_search(rest) {
                match origin {
                    Origin::User => longest_user = longest_user.max(m.char_len),
                    Origin::System => {
                        if self.policy == OverridePolicy::Override && m.char_len <= longest_user {
                            continue;
                        }
                    }
                }
                out.extend(m.entries.iter().map(|entry| Candidate {
                    entry,
                    char_len: m.char_len,
                    origin,
                }));
            }
        }
        out
    }
}
