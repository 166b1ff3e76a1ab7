//! Named-entity recognition capability.
use crate::error::Error;

/// Entity label of tokens outside any named entity.
pub const OUTSIDE_TAG: &str = "O";

/// A token along with its entity label (`"O"` when outside any entity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityToken {
    surface: String,
    label: String,
}

impl EntityToken {
    pub fn new<S: Into<String>, L: Into<String>>(surface: S, label: L) -> Self {
        Self {
            surface: surface.into(),
            label: label.into(),
        }
    }

    /// Get a reference to the token's surface form.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Get a reference to the token's entity label.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_entity(&self) -> bool {
        self.label != OUTSIDE_TAG
    }
}

pub trait EntityRecognizer {
    /// Label every token of a sentence.
    fn entities(&self, sentence: &str) -> Result<Vec<EntityToken>, Error>;
}
