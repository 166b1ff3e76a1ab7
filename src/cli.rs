//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lexigen", about = "word table generation tool.")]
/// Holds every command that is callable by the `lexigen` command.
pub enum Lexigen {
    #[structopt(about = "Derive the word table from a sentence table")]
    Pipeline(Pipeline),
    #[structopt(about = "Build or refresh the word-embedding cache")]
    Embed(Embed),
}

#[derive(Debug, StructOpt)]
/// Model and cache locations shared by both commands.
pub struct ModelPaths {
    #[structopt(
        parse(from_os_str),
        long = "seg-path",
        help = "Path to the segmentation + POS tagging model",
        default_value = "seg.model"
    )]
    pub seg_path: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "ner-path",
        help = "Path to the entity-recognition model",
        default_value = "ner.model"
    )]
    pub ner_path: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "emb-path",
        help = "Path to the fasttext embedding model",
        default_value = "cc.vi.300.bin"
    )]
    pub emb_path: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "cache",
        help = "embedding cache location",
        default_value = "word_embeddings.bin"
    )]
    pub cache_path: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
pub struct Pipeline {
    #[structopt(parse(from_os_str), help = "sentence table (csv)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "word table destination (csv)")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub models: ModelPaths,
    #[structopt(
        long = "cap",
        help = "max words selected per sentence",
        default_value = "5"
    )]
    pub cap: usize,
    #[structopt(
        long = "top-n",
        help = "similar words per selected word",
        default_value = "2"
    )]
    pub top_n: usize,
    #[structopt(
        long = "workers",
        help = "number of embedding worker threads",
        default_value = "4"
    )]
    pub workers: usize,
    #[structopt(
        long = "translate-url",
        help = "LibreTranslate-compatible translation endpoint",
        default_value = "http://localhost:5000/translate"
    )]
    pub translate_url: String,
    #[structopt(long = "source-lang", default_value = "vi")]
    pub source_lang: String,
    #[structopt(long = "target-lang", default_value = "en")]
    pub target_lang: String,
    #[structopt(
        parse(from_os_str),
        long = "stopwords",
        help = "optional stopword list, one entry per line"
    )]
    pub stopwords: Option<PathBuf>,
    #[structopt(long = "seed", help = "RNG seed for reproducible selection")]
    pub seed: Option<u64>,
}

#[derive(Debug, StructOpt)]
/// Embed command and parameters.
pub struct Embed {
    #[structopt(parse(from_os_str), help = "sentence table (csv)")]
    pub src: PathBuf,
    #[structopt(flatten)]
    pub models: ModelPaths,
    #[structopt(
        long = "workers",
        help = "number of embedding worker threads",
        default_value = "4"
    )]
    pub workers: usize,
}
