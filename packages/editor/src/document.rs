//! # Document Handle
//!
//! A mockup document is a JSON list of nested elements. A `Document` holds
//! the forest parsed from one such file plus its editing state.
//!
//! Documents can be:
//! - **Memory-backed**: built from a string or element list, for tests and hosts
//! - **File-backed**: loaded from disk and saved back
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Parse → Edit → Save
//!   ↓      ↓       ↓      ↓
//! File  Forest  Snapshots File
//! ```
//!
//! Action scripts (a JSON list of [`Action`]s) are read with
//! [`parse_script`] / [`load_script`].

use crate::element::MockupElement;
use crate::forest::Forest;
use crate::state::Action;
use crate::EditorError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Editable mockup document
#[derive(Debug)]
pub struct Document {
    /// Path to source file (if any)
    pub path: PathBuf,

    /// Current version number (increments on each replaced snapshot)
    pub version: u64,

    storage: DocumentStorage,
}

/// Storage backend for document
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only
    Memory { forest: Forest },

    /// File-backed
    File { forest: Forest, dirty: bool },
}

impl Document {
    /// Create document from JSON text (memory-backed)
    pub fn from_source(path: PathBuf, source: &str) -> Result<Self, EditorError> {
        let forest = Forest::from_elements(parse_elements(source)?);

        Ok(Self {
            path,
            version: 0,
            storage: DocumentStorage::Memory { forest },
        })
    }

    /// Load document from file (file-backed)
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, EditorError> {
        let path = path.into();
        let forest = Forest::from_elements(load_elements(&path)?);

        Ok(Self {
            path,
            version: 0,
            storage: DocumentStorage::File {
                forest,
                dirty: false,
            },
        })
    }

    pub fn forest(&self) -> &Forest {
        match &self.storage {
            DocumentStorage::Memory { forest } => forest,
            DocumentStorage::File { forest, .. } => forest,
        }
    }

    /// Replace the current snapshot
    pub fn replace(&mut self, next: Forest) {
        self.version += 1;

        match &mut self.storage {
            DocumentStorage::Memory { forest } => *forest = next,
            DocumentStorage::File { forest, dirty } => {
                *forest = next;
                *dirty = true;
            }
        }
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            _ => false,
        }
    }

    /// Save document to disk (if file-backed)
    pub fn save(&mut self) -> Result<(), EditorError> {
        let source = self.source()?;

        match &mut self.storage {
            DocumentStorage::File { dirty, .. } => {
                std::fs::write(&self.path, source)?;
                *dirty = false;
                debug!(path = %self.path.display(), version = self.version, "Saved document");
                Ok(())
            }
            _ => Err(EditorError::NotFileBacked),
        }
    }

    /// Pretty JSON of the current forest
    pub fn source(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(self.forest())?)
    }
}

pub fn parse_elements(source: &str) -> Result<Vec<MockupElement>, EditorError> {
    Ok(serde_json::from_str(source)?)
}

pub fn load_elements(path: &Path) -> Result<Vec<MockupElement>, EditorError> {
    let source = std::fs::read_to_string(path)?;
    let elements = parse_elements(&source)?;
    debug!(path = %path.display(), count = elements.len(), "Loaded elements");
    Ok(elements)
}

pub fn parse_script(source: &str) -> Result<Vec<Action>, EditorError> {
    Ok(serde_json::from_str(source)?)
}

pub fn load_script(path: &Path) -> Result<Vec<Action>, EditorError> {
    let source = std::fs::read_to_string(path)?;
    parse_script(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementType;

    const SOURCE: &str = r#"[
        {
            "id": "hero",
            "type": "hero",
            "name": "Hero",
            "x": 0, "y": 0, "width": 1440, "height": 400,
            "zIndex": 1,
            "children": [
                {
                    "id": "title",
                    "type": "text",
                    "name": "Title",
                    "x": 40, "y": 40, "width": 600, "height": 60,
                    "zIndex": 1,
                    "content": "Hello"
                }
            ]
        }
    ]"#;

    #[test]
    fn test_create_memory_document() {
        let doc = Document::from_source(PathBuf::from("page.json"), SOURCE).unwrap();

        assert_eq!(doc.version, 0);
        assert!(!doc.is_dirty());
        assert_eq!(doc.forest().node_count(), 2);

        let title = doc.forest().get("title").unwrap();
        assert_eq!(title.element_type, ElementType::Text);
        assert_eq!(title.content.as_deref(), Some("Hello"));
        assert!(title.visible);
        assert_eq!(title.opacity, 1.0);
    }

    #[test]
    fn test_replace_increments_version() {
        let mut doc = Document::from_source(PathBuf::from("page.json"), SOURCE).unwrap();
        doc.replace(Forest::new());

        assert_eq!(doc.version, 1);
        assert!(doc.forest().is_empty());
    }

    #[test]
    fn test_memory_document_cannot_save() {
        let mut doc = Document::from_source(PathBuf::from("page.json"), SOURCE).unwrap();
        assert!(matches!(doc.save(), Err(EditorError::NotFileBacked)));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let result = Document::from_source(PathBuf::from("page.json"), "[{\"id\": 3}]");
        assert!(matches!(result, Err(EditorError::Json(_))));
    }

    #[test]
    fn test_parse_script() {
        let actions = parse_script(
            r#"[
                {"type": "addElement", "elementType": "card"},
                {"type": "setZoom", "zoom": 150},
                {"type": "undo"}
            ]"#,
        )
        .unwrap();

        assert_eq!(actions.len(), 3);
        assert_eq!(actions[2], Action::Undo);
    }
}
