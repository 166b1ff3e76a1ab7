//! Word-table generation pipeline
//!
//! The sentence table is a CSV of translated sentence pairs,
//! each pair carrying a stable `s_id`.
//!
//! # Processing
//! 1. Each sentence is cleaned (entity stripping, lowercasing, punctuation
//!    and whitespace normalization), then segmented and POS-tagged.
//! 1. The corpus vocabulary feeds the embedding cache, built once over a
//!    bounded worker pool and persisted; later runs with an unchanged
//!    vocabulary load the blob back without touching the embedding model.
//! 1. Per sentence, tokens that are not proper nouns and have a cached
//!    embedding are eligible; a bounded random subset of them is selected.
//! 1. Each selected word gets its closest cache neighbours and a
//!    translation. Translation failures degrade to a sentinel value and
//!    never abort the batch.
//! 1. One record per selected word lands in the output CSV, `w_id`s
//!    contiguous from 1.
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use itertools::Itertools;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cleaning::SentenceCleaner;
use crate::embedding::{top_similar, Embedder, EmbeddingCache};
use crate::error::Error;
use crate::io::{read_sentences, SentenceRecord, WordRecord, WordWriter};
use crate::pipelines::pipeline::Pipeline;
use crate::selection::{assess, eligible, sample, Candidate, IdGen};
use crate::tagging::{EntityRecognizer, Tagger};
use crate::translate::{Translate, TRANSLATION_ERROR};

/// Default number of words selected per sentence.
pub const DEFAULT_CAP: usize = 5;
/// Default number of similar words attached to each selection.
pub const DEFAULT_TOP_N: usize = 2;

/// Selection and build tunables.
#[derive(Debug, Clone)]
pub struct WordGenParams {
    /// Max words selected per sentence.
    pub cap: usize,
    /// Similar words per selected word.
    pub top_n: usize,
    /// Embedding worker threads.
    pub workers: usize,
    /// RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Optional stopword set excluded from selection.
    pub stopwords: Option<HashSet<String>>,
}

impl Default for WordGenParams {
    fn default() -> Self {
        Self {
            cap: DEFAULT_CAP,
            top_n: DEFAULT_TOP_N,
            workers: 4,
            seed: None,
            stopwords: None,
        }
    }
}

/// Extract the corpus vocabulary: clean and tag every sentence, union the
/// resulting surface forms.
///
/// No POS filtering happens here; proper nouns enter the vocabulary too.
pub fn extract_vocabulary<R, T>(
    sentences: &[SentenceRecord],
    cleaner: &SentenceCleaner<R>,
    tagger: &T,
) -> Result<BTreeSet<String>, Error>
where
    R: EntityRecognizer,
    T: Tagger,
{
    let mut vocab = BTreeSet::new();
    for record in sentences {
        let cleaned = cleaner.clean(&record.viet)?;
        for token in tagger.tag(&cleaned)? {
            vocab.insert(token.surface().to_string());
        }
    }
    Ok(vocab)
}

/// Word-table generation pipeline.
pub struct WordGen<R, T, E, Tr> {
    src: PathBuf,
    dst: PathBuf,
    cache_path: PathBuf,
    cleaner: SentenceCleaner<R>,
    tagger: T,
    embedder: E,
    translator: Tr,
    params: WordGenParams,
}

impl<R, T, E, Tr> WordGen<R, T, E, Tr>
where
    R: EntityRecognizer,
    T: Tagger,
    E: Embedder + Sync,
    Tr: Translate,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        cache_path: PathBuf,
        cleaner: SentenceCleaner<R>,
        tagger: T,
        embedder: E,
        translator: Tr,
        params: WordGenParams,
    ) -> Self {
        Self {
            src,
            dst,
            cache_path,
            cleaner,
            tagger,
            embedder,
            translator,
            params,
        }
    }

    fn translate_or_sentinel(&self, text: &str) -> String {
        match self.translator.translate(text) {
            Ok(translated) => translated.to_lowercase(),
            Err(e) => {
                warn!("translation error for {:?}: {:?}", text, e);
                TRANSLATION_ERROR.to_string()
            }
        }
    }

    fn build_record(
        &self,
        record: &SentenceRecord,
        candidate: &Candidate,
        cache: &EmbeddingCache,
        idgen: &mut IdGen,
    ) -> WordRecord {
        // compounds display with spaces, the `_` joiner stays internal
        let display = candidate.word.replace('_', " ");
        let similar = top_similar(&candidate.word, cache, self.params.top_n);
        let similar_display: Vec<String> = similar
            .iter()
            .map(|w| w.replace('_', " ").to_lowercase())
            .collect();

        let eng = self.translate_or_sentinel(&display);
        let eng_similar: Vec<String> = similar
            .iter()
            .map(|w| self.translate_or_sentinel(&w.replace('_', " ")))
            .collect();

        WordRecord {
            w_id: idgen.next_id(),
            s_id: record.s_id,
            idx: candidate.idx,
            viet: display,
            viet_similar_words: similar_display.iter().join(", "),
            eng,
            eng_similar_words: eng_similar.iter().join(", "),
        }
    }

    /// Derive the records of one sentence: assess, sample, build.
    pub fn process_sentence(
        &self,
        record: &SentenceRecord,
        cache: &EmbeddingCache,
        idgen: &mut IdGen,
        rng: &mut (impl Rng + ?Sized),
    ) -> Result<Vec<WordRecord>, Error> {
        let cleaned = self.cleaner.clean(&record.viet)?;
        let tokens = self.tagger.tag(&cleaned)?;
        let candidates = eligible(assess(&tokens, cache, self.params.stopwords.as_ref()));
        let selected = sample(&candidates, self.params.cap, rng);

        debug!(
            "sentence {}: {} candidates, {} selected",
            record.s_id,
            candidates.len(),
            selected.len()
        );

        Ok(selected
            .into_iter()
            .map(|candidate| self.build_record(record, candidate, cache, idgen))
            .collect())
    }

    /// Sequential pass over the whole table.
    ///
    /// Emission order follows sentence order, then sampling order within a
    /// sentence; `w_id`s are contiguous from 1 across the run.
    pub fn derive(
        &self,
        sentences: &[SentenceRecord],
        cache: &EmbeddingCache,
        rng: &mut (impl Rng + ?Sized),
    ) -> Result<Vec<WordRecord>, Error> {
        let mut idgen = IdGen::new();
        let mut records = Vec::new();
        for record in sentences {
            records.extend(self.process_sentence(record, cache, &mut idgen, rng)?);
        }
        Ok(records)
    }
}

impl<R, T, E, Tr> Pipeline<()> for WordGen<R, T, E, Tr>
where
    R: EntityRecognizer,
    T: Tagger,
    E: Embedder + Sync,
    Tr: Translate,
{
    /// Run the whole pipeline.
    fn run(&self) -> Result<(), Error> {
        let sentences = read_sentences(&self.src)?;
        info!("processing {} sentences", sentences.len());

        let vocab = extract_vocabulary(&sentences, &self.cleaner, &self.tagger)?;
        info!("vocabulary: {} distinct words", vocab.len());

        let cache =
            EmbeddingCache::get_or_build(&self.cache_path, &vocab, &self.embedder, self.params.workers)?;

        let mut rng: StdRng = match self.params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let records = self.derive(&sentences, &cache, &mut rng)?;

        let mut writer = WordWriter::from_path(&self.dst)?;
        for record in &records {
            writer.write(record)?;
        }
        writer.flush()?;

        info!("word table written: {} records", records.len());
        Ok(())
    }
}
