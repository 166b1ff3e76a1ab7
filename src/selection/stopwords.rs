//! Stopword list loading
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;

/// Load a stopword list, one entry per line.
///
/// Inner spaces become `_` so multi-word entries match compound tokens.
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>, Error> {
    let file = File::open(path)?;
    let mut words = HashSet::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let normalized = line.trim().replace(' ', "_");
        if !normalized.is_empty() {
            words.insert(normalized);
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_normalizes_compounds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "của").unwrap();
        writeln!(file, "tuy nhiên").unwrap();
        writeln!(file).unwrap();
        file.flush().unwrap();

        let words = load_stopwords(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("của"));
        assert!(words.contains("tuy_nhiên"));
    }
}
