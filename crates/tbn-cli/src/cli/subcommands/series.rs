use clap::Subcommand;

/// Series commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SeriesCommands {
    /// List series alphabetically.
    List,
}
