use std::{io::Write, path::PathBuf};

use seqbatch::{Dataset, TokenType};

use crate::{corpus_args::CorpusArgs, input_output::OutputArgs, logging::LogArgs};

/// Args for the stats command.
#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[clap(flatten)]
    corpus: CorpusArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Load the source vocabulary from this file.
    #[arg(long, default_value = None)]
    src_vocab: Option<PathBuf>,

    /// Load the target vocabulary from this file.
    #[arg(long, default_value = None)]
    tgt_vocab: Option<PathBuf>,

    /// Max source vocab size for a freshly built vocabulary.
    #[arg(long, default_value = None, conflicts_with = "src_vocab")]
    src_max_vocab: Option<usize>,

    /// Max target vocab size for a freshly built vocabulary.
    #[arg(long, default_value = None, conflicts_with = "tgt_vocab")]
    tgt_max_vocab: Option<usize>,

    /// Pairs per batch.
    #[arg(long, default_value = "32")]
    batch_size: usize,

    /// Shuffle with this seed before batching.
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    #[command(flatten)]
    output: OutputArgs,
}

impl StatsArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut options = self.corpus.dataset_options()?;
        if let Some(path) = &self.src_vocab {
            options = options.with_src_vocab_path(path);
        } else if let Some(max_size) = self.src_max_vocab {
            options = options.with_src_max_vocab(max_size);
        }
        if let Some(path) = &self.tgt_vocab {
            options = options.with_tgt_vocab_path(path);
        } else if let Some(max_size) = self.tgt_max_vocab {
            options = options.with_tgt_max_vocab(max_size);
        }

        let mut ds: Dataset = Dataset::from_file(&self.corpus.corpus, options)?;
        if let Some(seed) = self.seed {
            log::info!("shuffling with seed {seed}");
            ds.shuffle(Some(seed));
        }

        if let Some(path) = self.output.output_path() {
            log::info!("output: {}", path.display());
        }
        let mut writer = self.output.open_writer()?;
        write_report(&ds, self.batch_size, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write a plain text dataset report.
fn write_report<T: TokenType, W: Write>(
    ds: &Dataset<T>,
    batch_size: usize,
    writer: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = ds.stats();
    writeln!(writer, "total pairs: {}", stats.total_pairs)?;
    writeln!(writer, "retained pairs: {}", stats.retained_pairs)?;
    writeln!(writer, "dropped pairs: {}", stats.dropped_pairs)?;
    writeln!(writer, "source vocab size: {}", ds.input_vocab().get_vocab_size())?;
    writeln!(writer, "target vocab size: {}", ds.output_vocab().get_vocab_size())?;

    let sizes = ds
        .make_batches(batch_size)?
        .map(|batch| batch.len())
        .collect::<Vec<_>>();
    writeln!(writer, "batch size: {batch_size}")?;
    writeln!(writer, "batches: {}", sizes.len())?;
    if let Some(last) = sizes.last() {
        writeln!(writer, "last batch: {last}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use seqbatch::DatasetOptions;

    use super::*;

    fn dataset() -> Dataset {
        let src = ["I am fat", "I am busy", "I am calm", "I am cold", "I am very very very tired"];
        let tgt = ["Je suis gras", "Je suis occupe", "Je suis calme", "J`ai froid", "Je suis las"];
        Dataset::from_list(&src, &tgt, DatasetOptions::new(4, 4)).unwrap()
    }

    #[test]
    fn test_write_report() {
        let ds = dataset();
        let mut out = Vec::new();
        write_report(&ds, 3, &mut out).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert_eq!(
            report,
            [
                "total pairs: 5",
                "retained pairs: 4",
                "dropped pairs: 1",
                "source vocab size: 9",
                "target vocab size: 10",
                "batch size: 3",
                "batches: 2",
                "last batch: 1",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_write_report_overflow() {
        let ds = dataset();
        let mut out = Vec::new();
        assert!(write_report(&ds, 5, &mut out).is_err());
    }
}
