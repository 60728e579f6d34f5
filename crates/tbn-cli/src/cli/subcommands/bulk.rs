use clap::Subcommand;

/// Bulk volume commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BulkCommands {
    /// Delete many volumes.
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Set the reading status of many volumes.
    Status {
        status: String,
        #[arg(required = true)]
        ids: Vec<String>,
    },
}
