/*! Candidate selection

Eligibility assessment of tagged tokens, bounded random sampling of the
eligible ones, stopword loading and the word-id allocator.
!*/
mod candidate;
mod sample;
mod stopwords;

pub use candidate::{assess, eligible, Candidate, Eligibility, IneligibilityReason};
pub use sample::{sample, IdGen};
pub use stopwords::load_stopwords;
