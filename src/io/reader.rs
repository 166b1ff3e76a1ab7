//! Sentence table reader
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// One translated sentence pair.
///
/// `topic_name` is accepted as a header alias for `topic`; both are
/// optional.
#[derive(Debug, Clone, Deserialize)]
pub struct SentenceRecord {
    pub s_id: u32,
    pub viet: String,
    pub eng: String,
    #[serde(default, alias = "topic_name")]
    pub topic: Option<String>,
}

/// Read the whole sentence table. Input is immutable: one row per sentence
/// pair, header row required.
pub fn read_sentences(path: &Path) -> Result<Vec<SentenceRecord>, Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader.deserialize().collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "s_id,viet,eng,topic").unwrap();
        writeln!(file, "1,con chó chạy nhanh,the dog runs fast,animals").unwrap();
        writeln!(file, "2,tôi uống cà phê,i drink coffee,food").unwrap();
        file.flush().unwrap();

        let records = read_sentences(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].s_id, 1);
        assert_eq!(records[0].viet, "con chó chạy nhanh");
        assert_eq!(records[1].topic.as_deref(), Some("food"));
    }

    #[test]
    fn test_topic_name_alias() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "s_id,viet,eng,topic_name").unwrap();
        writeln!(file, "1,xin chào,hello,greetings").unwrap();
        file.flush().unwrap();

        let records = read_sentences(file.path()).unwrap();
        assert_eq!(records[0].topic.as_deref(), Some("greetings"));
    }

    #[test]
    fn test_topic_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "s_id,viet,eng").unwrap();
        writeln!(file, "1,xin chào,hello").unwrap();
        file.flush().unwrap();

        let records = read_sentences(file.path()).unwrap();
        assert_eq!(records[0].topic, None);
    }
}
