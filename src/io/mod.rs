/*! Sentence-table reading and word-table writing

Both tables are CSV with a header row.
!*/
mod reader;
mod writer;

pub use reader::{read_sentences, SentenceRecord};
pub use writer::{WordRecord, WordWriter};
