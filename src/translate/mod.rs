/*! Word translation

Holds the [Translate] trait. Translation is the only recoverable capability
of the pipeline: a per-word failure degrades to [TRANSLATION_ERROR] instead
of aborting the batch.
!*/
mod http;

pub use http::HttpTranslator;

use crate::error::Error;

/// Sentinel substituted for a failed translation.
pub const TRANSLATION_ERROR: &str = "translation_error";

pub trait Translate {
    /// Translate a single display form.
    fn translate(&self, text: &str) -> Result<String, Error>;
}
