/*! Word segmentation, POS tagging and entity recognition

Holds the [Tagger] and [EntityRecognizer] traits consumed by the cleaning and
selection layers, plus the pointwise-prediction adapters backing both.

The current segmenter/tagger used is [vaporetto](https://github.com/daac-tools/vaporetto) !*/
mod entity;
mod tagger;
mod vaporetto;

pub use entity::{EntityRecognizer, EntityToken, OUTSIDE_TAG};
pub use tagger::{TaggedToken, Tagger, PROPER_NOUN_TAG};

pub use self::vaporetto::{VaporettoRecognizer, VaporettoTagger};
