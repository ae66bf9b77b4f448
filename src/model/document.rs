use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{DocumentError, Result};

use super::element::{Element, ElementRecord, OpeningElement, WallElement};

/// Version string written into saved documents.
pub const FORMAT_VERSION: &str = "1.0";

/// The editable element collection plus its save format.
///
/// Mutations replace elements wholesale. The geometry stages never hold on
/// to a `Floorplan`; they rebuild from [`Floorplan::elements`] each time.
#[derive(Debug, Clone, PartialEq)]
pub struct Floorplan {
    version: String,
    elements: Vec<Element>,
}

#[derive(Serialize)]
struct FloorplanFile<'a> {
    version: &'a str,
    elements: &'a [Element],
}

impl Default for Floorplan {
    fn default() -> Self {
        Self::new()
    }
}

impl Floorplan {
    /// Creates an empty floorplan.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: FORMAT_VERSION.to_owned(),
            elements: Vec::new(),
        }
    }

    /// Creates a floorplan holding `elements` in z-order (last is topmost).
    #[must_use]
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            version: FORMAT_VERSION.to_owned(),
            elements,
        }
    }

    /// Format version the document was loaded with.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All elements in z-order (last is topmost).
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Iterates the walls in z-order.
    pub fn walls(&self) -> impl Iterator<Item = &WallElement> {
        self.elements.iter().filter_map(Element::as_wall)
    }

    /// Iterates the doors and windows in z-order.
    pub fn openings(&self) -> impl Iterator<Item = &OpeningElement> {
        self.elements.iter().filter_map(Element::as_opening)
    }

    /// Returns the element with `id`, if present.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Returns the wall with `id`, if present.
    #[must_use]
    pub fn wall(&self, id: &str) -> Option<&WallElement> {
        self.walls().find(|w| w.id == id)
    }

    /// Appends an element on top of the z-order.
    pub fn add_element(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Replaces the element with the same id. Returns `false` if none exists.
    pub fn update_element(&mut self, element: impl Into<Element>) -> bool {
        let element = element.into();
        match self.elements.iter_mut().find(|e| e.id() == element.id()) {
            Some(slot) => {
                *slot = element;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element with `id`.
    ///
    /// Openings hosted by a removed wall stay in the collection; they are
    /// skipped at render time until their wall reappears or they are deleted.
    pub fn delete_element(&mut self, id: &str) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(index))
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Serializes the floorplan as `{ "version": .., "elements": [..] }`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Serialize`] if JSON encoding fails.
    pub fn to_json(&self) -> Result<String> {
        let file = FloorplanFile {
            version: FORMAT_VERSION,
            elements: &self.elements,
        };
        serde_json::to_string_pretty(&file)
            .map_err(|e| DocumentError::Serialize(e.to_string()).into())
    }

    /// Parses a saved floorplan document.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] when the text is not a JSON object, when
    /// `elements` is missing or not an array, when an element is malformed,
    /// or when two elements share an id.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| DocumentError::Parse(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(DocumentError::Parse("document is not a JSON object".to_owned()).into());
        };
        let raw = map.get("elements").ok_or(DocumentError::MissingElements)?;
        let items = raw.as_array().ok_or(DocumentError::ElementsNotArray)?;

        let mut seen = HashSet::with_capacity(items.len());
        let mut elements = Vec::with_capacity(items.len());
        for item in items {
            let record =
                ElementRecord::deserialize(item).map_err(|e| DocumentError::Parse(e.to_string()))?;
            let element = Element::try_from(record)?;
            if !seen.insert(element.id().to_owned()) {
                return Err(DocumentError::DuplicateId(element.id().to_owned()).into());
            }
            elements.push(element);
        }

        let version = map
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or(FORMAT_VERSION)
            .to_owned();

        Ok(Self { version, elements })
    }

    /// Replaces the element collection with the one in `json`.
    ///
    /// On failure the current elements are left untouched.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Floorplan::from_json`].
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        match Self::from_json(json) {
            Ok(loaded) => {
                debug!(elements = loaded.elements.len(), version = %loaded.version, "floorplan loaded");
                *self = loaded;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "floorplan load rejected");
                Err(err)
            }
        }
    }
}
