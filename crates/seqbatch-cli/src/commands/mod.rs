mod stats;
mod vocab;

/// Subcommands for seqbatch
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build and save source/target vocabularies from a corpus.
    Vocab(vocab::VocabArgs),

    /// Report dataset and batching statistics for a corpus.
    Stats(stats::StatsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Stats(cmd) => cmd.run(),
        }
    }
}
