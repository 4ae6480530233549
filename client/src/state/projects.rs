//! Static project catalog and tile activation rules.
//!
//! DESIGN
//! ======
//! Records are deserialized from an embedded JSON document into a loose
//! intermediate shape and then normalized into [`ProjectRecord`], so every
//! optional field has exactly one defined default and the rest of the crate
//! never sees a half-filled record.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Deserialize;

use crate::error::UiError;
use crate::state::toast::{Notice, Notifier};

const BUILTIN_CATALOG: &str = include_str!("projects.json");

/// Title used when a record does not carry one.
pub const UNTITLED_PROJECT: &str = "Untitled Project";

/// Error toast for tiles that reference an unknown project.
pub const PROJECT_NOT_FOUND: &str = "Project data not found.";

/// Inline transform applied while the pointer hovers a tile.
pub const TILE_HOVER_TRANSFORM: &str = "translateY(-8px) scale(1.02)";

/// One portfolio project as shown in the details modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub features: Vec<String>,
    pub demo_url: Option<String>,
    pub source_url: Option<String>,
}

impl Default for ProjectRecord {
    fn default() -> Self {
        Self {
            title: UNTITLED_PROJECT.to_owned(),
            description: String::new(),
            tech: Vec::new(),
            features: Vec::new(),
            demo_url: None,
            source_url: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawProject {
    title: Option<String>,
    description: Option<String>,
    tech: Vec<String>,
    features: Vec<String>,
    demo_url: Option<String>,
    source_url: Option<String>,
}

impl From<RawProject> for ProjectRecord {
    fn from(raw: RawProject) -> Self {
        Self {
            title: non_blank(raw.title).unwrap_or_else(|| UNTITLED_PROJECT.to_owned()),
            description: raw.description.unwrap_or_default(),
            tech: raw.tech,
            features: raw.features,
            demo_url: non_blank(raw.demo_url),
            source_url: non_blank(raw.source_url),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Read-only mapping from project identifier to record.
#[derive(Clone, Debug, Default)]
pub struct ProjectCatalog {
    records: BTreeMap<String, ProjectRecord>,
}

impl ProjectCatalog {
    /// The catalog shipped with the site.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Catalog`] if the embedded document is malformed.
    pub fn builtin() -> Result<Self, UiError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document: a JSON object keyed by
    /// project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Catalog`] on invalid JSON or a blank identifier.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let parsed: BTreeMap<String, RawProject> =
            serde_json::from_str(raw).map_err(|e| UiError::Catalog(e.to_string()))?;
        let mut records = BTreeMap::new();
        for (id, project) in parsed {
            let id = id.trim().to_owned();
            if id.is_empty() {
                return Err(UiError::Catalog("project identifier must not be blank".to_owned()));
            }
            records.insert(id, ProjectRecord::from(project));
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.get(id)
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

/// Outcome of loading the catalog at boot.
///
/// A failed load is kept rather than raised, so only the features that need
/// the catalog stand down and the rest of the page still wires.
#[derive(Clone, Debug)]
pub struct CatalogSlot {
    loaded: Result<Rc<ProjectCatalog>, String>,
}

impl CatalogSlot {
    #[must_use]
    pub fn builtin() -> Self {
        Self::load(BUILTIN_CATALOG)
    }

    #[must_use]
    pub fn load(raw: &str) -> Self {
        let loaded = ProjectCatalog::from_json(raw).map(Rc::new).map_err(|err| match err {
            UiError::Catalog(reason) => reason,
            other => other.to_string(),
        });
        Self { loaded }
    }

    /// The catalog, or the load failure as [`UiError::Catalog`].
    ///
    /// # Errors
    ///
    /// Returns the error recorded when the catalog failed to load.
    pub fn get(&self) -> Result<Rc<ProjectCatalog>, UiError> {
        self.loaded.clone().map_err(UiError::Catalog)
    }
}

/// Handle a tile activation.
///
/// Tiles without a `data-project` value do nothing. Unknown identifiers
/// emit one error toast and never reach `open`. Known identifiers are passed
/// to `open`, whose result is returned.
pub fn activate_tile<R>(
    catalog: &ProjectCatalog,
    project_attr: Option<&str>,
    notifier: &dyn Notifier,
    open: impl FnOnce(&ProjectRecord) -> R,
) -> Option<R> {
    let id = project_attr.map(str::trim).filter(|id| !id.is_empty())?;
    let Some(record) = catalog.get(id) else {
        notifier.notify(Notice::error(PROJECT_NOT_FOUND));
        return None;
    };
    Some(open(record))
}

/// Accessible name given to the tile at `index` (zero-based).
#[must_use]
pub fn tile_aria_label(index: usize) -> String {
    format!("View details for project {}", index + 1)
}

/// Keys that activate a focused tile, matching native button behaviour.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}
