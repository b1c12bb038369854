//! Component specification and identifier derivation.

use std::path::PathBuf;

use crate::domain::DomainError;

/// A validated, slash-separated component path such as `widgets/cardItem`.
///
/// The final segment, capitalized, is the canonical component identifier:
/// it names both generated files and the heading rendered by the generated
/// source. Intermediate segments become directories under the project's
/// components root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    path: String,
}

impl ComponentSpec {
    pub fn new(path: impl AsRef<str>) -> Result<Self, DomainError> {
        let path = path.as_ref().trim();
        if path.is_empty() {
            return Err(DomainError::EmptyComponentPath);
        }
        if path.starts_with('/') {
            return Err(DomainError::InvalidComponentPath {
                path: path.to_string(),
                reason: "path must be relative".into(),
            });
        }
        for segment in path.split('/') {
            if segment.is_empty() {
                return Err(DomainError::InvalidComponentPath {
                    path: path.to_string(),
                    reason: "empty path segment".into(),
                });
            }
            if segment == "." || segment == ".." {
                return Err(DomainError::InvalidComponentPath {
                    path: path.to_string(),
                    reason: format!("'{segment}' segment not allowed"),
                });
            }
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The capitalized identifier derived from the final path segment.
    ///
    /// Only the first character is uppercased; the rest of the segment is
    /// preserved, so `cardItem` becomes `CardItem`.
    pub fn identifier(&self) -> String {
        let base = self
            .path
            .rsplit('/')
            .next()
            .expect("validated path has at least one segment");
        capitalize(base)
    }

    /// The component's directory relative to the components root,
    /// e.g. `widgets/cardItem` for the path `widgets/cardItem`.
    pub fn relative_dir(&self) -> PathBuf {
        self.path.split('/').collect()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
