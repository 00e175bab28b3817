use std::{path::PathBuf, sync::Arc};

use seqbatch::{DatasetOptions, corpus::RegexSplitter};

/// Corpus input arg group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Pair corpus file; one "source<TAB>target" pair per line.
    pub corpus: PathBuf,

    /// Drop pairs whose source has more tokens than this.
    #[arg(long, default_value = "10")]
    pub max_src_len: usize,

    /// Drop pairs whose target has more tokens than this.
    #[arg(long, default_value = "10")]
    pub max_tgt_len: usize,

    /// Source/target field delimiter.
    #[arg(long, default_value = "\t")]
    pub delimiter: char,

    /// Token regex; every match is a token. Splits on whitespace when unset.
    #[arg(long, default_value = None)]
    pub token_pattern: Option<String>,
}

impl CorpusArgs {
    /// Dataset options for this corpus; vocabularies are left at their defaults.
    pub fn dataset_options(&self) -> seqbatch::Result<DatasetOptions> {
        let mut options = DatasetOptions::new(self.max_src_len, self.max_tgt_len)
            .with_field_delimiter(self.delimiter);

        if let Some(pattern) = &self.token_pattern {
            options = options.with_splitter(Arc::new(RegexSplitter::new(pattern)?));
        }

        Ok(options)
    }
}
