use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Aggregate the configured log records and write the HTML charts (default).
    Generate {
        /// Open the written charts in the system browser.
        #[clap(long)]
        open: bool,
    },
    /// Aggregate and print the count tables without rendering.
    Summary,
    /// Write a sample configuration and pattern catalog.
    Init,
    /// Check the configuration and list every problem found.
    Validate,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Generate { open: false }
    }
}
