use clap::{Args, Subcommand};

/// Volume commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VolumeCommands {
    /// Add a volume, creating its series on first use.
    Add(VolumeAddArgs),
    /// List volumes, newest first.
    List,
    /// Get a volume by ID.
    Get { id: String },
    /// Delete a volume by ID.
    Delete { id: String },
    /// Set the reading status of a volume.
    Status {
        id: String,
        /// unread, reading, completed or collected
        status: String,
    },
}

/// Arguments for `tbn volume add`.
#[derive(Clone, Debug, Args)]
pub struct VolumeAddArgs {
    /// Series title. May be omitted when --isbn resolves to a catalog entry.
    #[arg(long)]
    pub title: Option<String>,
    /// Volume number (free-form: "1", "10.5", "Special").
    #[arg(long)]
    pub number: String,
    #[arg(long)]
    pub author: Option<String>,
    /// Standard, Omnibus, Deluxe or Digital
    #[arg(long)]
    pub edition: Option<String>,
    #[arg(long)]
    pub language: Option<String>,
    /// Typed or scanned ISBN; punctuation is stripped.
    #[arg(long)]
    pub isbn: Option<String>,
    /// Existing collection to file the volume into.
    #[arg(long, conflicts_with = "new_collection")]
    pub collection: Option<String>,
    /// Create a collection with this name and file the volume into it.
    #[arg(long)]
    pub new_collection: Option<String>,
}
