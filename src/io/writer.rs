//! Word table writer
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Error;

/// One output row of the word table.
///
/// `viet_similar_words` and `eng_similar_words` are comma-joined ordered
/// lists; `idx` points back into the tagged token sequence of sentence
/// `s_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordRecord {
    pub w_id: u32,
    pub s_id: u32,
    pub idx: usize,
    pub viet: String,
    pub viet_similar_words: String,
    pub eng: String,
    pub eng_similar_words: String,
}

/// CSV writer for [WordRecord]s. The header row comes out with the first
/// record.
pub struct WordWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl WordWriter<File> {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> WordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn write(&mut self, record: &WordRecord) -> Result<(), Error> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> WordRecord {
        WordRecord {
            w_id: 1,
            s_id: 3,
            idx: 2,
            viet: "cà phê".to_string(),
            viet_similar_words: "trà, nước".to_string(),
            eng: "coffee".to_string(),
            eng_similar_words: "tea, water".to_string(),
        }
    }

    #[test]
    fn test_header_and_row() {
        let mut writer = WordWriter::new(Vec::new());
        writer.write(&record()).unwrap();
        writer.flush().unwrap();

        let out = String::from_utf8(writer.writer.into_inner().unwrap()).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("w_id,s_id,idx,viet,viet_similar_words,eng,eng_similar_words")
        );
        assert_eq!(
            lines.next(),
            Some("1,3,2,cà phê,\"trà, nước\",coffee,\"tea, water\"")
        );
    }
}
