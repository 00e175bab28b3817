use std::path::PathBuf;

use seqbatch::Dataset;

use crate::{corpus_args::CorpusArgs, logging::LogArgs};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[clap(flatten)]
    corpus: CorpusArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Max source vocab size, including the reserved tokens.
    #[arg(long, default_value = "50000")]
    src_max_vocab: usize,

    /// Max target vocab size, including the reserved tokens.
    #[arg(long, default_value = "50000")]
    tgt_max_vocab: usize,

    /// Source vocabulary output file.
    #[arg(long)]
    src_out: PathBuf,

    /// Target vocabulary output file.
    #[arg(long)]
    tgt_out: PathBuf,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let options = self
            .corpus
            .dataset_options()?
            .with_src_max_vocab(self.src_max_vocab)
            .with_tgt_max_vocab(self.tgt_max_vocab);

        log::info!("corpus: {}", self.corpus.corpus.display());
        let ds: Dataset = Dataset::from_file(&self.corpus.corpus, options)?;

        log::info!("source vocabulary: {}", ds.input_vocab());
        ds.input_vocab().save(&self.src_out)?;
        log::info!("output: {}", self.src_out.display());

        log::info!("target vocabulary: {}", ds.output_vocab());
        ds.output_vocab().save(&self.tgt_out)?;
        log::info!("output: {}", self.tgt_out.display());

        Ok(())
    }
}
