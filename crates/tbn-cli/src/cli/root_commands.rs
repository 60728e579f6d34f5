use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    BulkCommands, CollectionCommands, LookupCommands, SeriesCommands, VolumeCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Volumes in the library.
    Volume {
        #[command(subcommand)]
        action: VolumeCommands,
    },
    /// Status changes and deletions over many volumes at once.
    Bulk {
        #[command(subcommand)]
        action: BulkCommands,
    },
    /// Collections of volumes.
    Collection {
        #[command(subcommand)]
        action: CollectionCommands,
    },
    /// Series.
    Series {
        #[command(subcommand)]
        action: SeriesCommands,
    },
    /// Import volumes from a CSV or JSON file.
    Import(ImportArgs),
    /// Query the external catalogs without touching the library.
    Lookup {
        #[command(subcommand)]
        action: LookupCommands,
    },
}

/// Arguments for `tbn import`.
#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// `.csv` (header row required) or `.json` (array of objects).
    pub file: PathBuf,
}
