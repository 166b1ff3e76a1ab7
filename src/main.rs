//! # Lexigen
//!
//! Lexigen derives the word table of a language-learning corpus from its
//! sentence table: per sentence, a bounded random subset of vocabulary
//! words, each with embedding-based similar-word suggestions and a
//! translation.
//!
//! ## Getting started
//!
//! ```sh
//! lexigen 0.3.0
//! word table generation tool.
//!
//! USAGE:
//!     lexigen <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     embed       Build or refresh the word-embedding cache
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Derive the word table from a sentence table
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use lexigen::cleaning::SentenceCleaner;
use lexigen::embedding::{EmbeddingCache, FastTextEmbedder};
use lexigen::io::read_sentences;
use lexigen::pipelines::words::{extract_vocabulary, WordGen, WordGenParams};
use lexigen::pipelines::Pipeline;
use lexigen::selection::load_stopwords;
use lexigen::tagging::{VaporettoRecognizer, VaporettoTagger};
use lexigen::translate::HttpTranslator;

fn main() -> Result<(), lexigen::error::Error> {
    env_logger::init();

    let opt = cli::Lexigen::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Lexigen::Pipeline(p) => {
            let cleaner = SentenceCleaner::new(VaporettoRecognizer::from_path(&p.models.ner_path)?);
            let tagger = VaporettoTagger::from_path(&p.models.seg_path)?;
            let embedder = FastTextEmbedder::from_path(&p.models.emb_path)?;
            let translator = HttpTranslator::new(&p.translate_url, &p.source_lang, &p.target_lang)?;
            let stopwords = p.stopwords.as_deref().map(load_stopwords).transpose()?;

            let params = WordGenParams {
                cap: p.cap,
                top_n: p.top_n,
                workers: p.workers,
                seed: p.seed,
                stopwords,
            };

            let pipeline = WordGen::new(
                p.src,
                p.dst,
                p.models.cache_path,
                cleaner,
                tagger,
                embedder,
                translator,
                params,
            );
            pipeline.run()?;
        }

        cli::Lexigen::Embed(e) => {
            let cleaner = SentenceCleaner::new(VaporettoRecognizer::from_path(&e.models.ner_path)?);
            let tagger = VaporettoTagger::from_path(&e.models.seg_path)?;
            let embedder = FastTextEmbedder::from_path(&e.models.emb_path)?;

            let sentences = read_sentences(&e.src)?;
            info!("extracting vocabulary from {} sentences", sentences.len());
            let vocab = extract_vocabulary(&sentences, &cleaner, &tagger)?;
            info!("vocabulary: {} distinct words", vocab.len());

            let cache =
                EmbeddingCache::get_or_build(&e.models.cache_path, &vocab, &embedder, e.workers)?;
            info!("embedding cache ready ({} words)", cache.len());
        }
    };
    Ok(())
}
