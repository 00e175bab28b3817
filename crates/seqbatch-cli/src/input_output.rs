use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// The output file, if not stdout.
    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match self.output_path() {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
