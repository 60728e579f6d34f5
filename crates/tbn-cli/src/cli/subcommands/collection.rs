use clap::Subcommand;

/// Collection commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CollectionCommands {
    /// Create a collection, optionally with initial volumes.
    Create {
        name: String,
        #[arg(long)]
        volume: Vec<String>,
    },
    /// List collections with volume counts.
    List,
    /// Show a collection and its volumes.
    Show { id: String },
    /// List a collection's memberships with their attach times.
    Members { id: String },
    /// Add volumes to a collection.
    Attach {
        id: String,
        #[arg(required = true)]
        volumes: Vec<String>,
    },
    /// Remove volumes from a collection.
    Detach {
        id: String,
        #[arg(required = true)]
        volumes: Vec<String>,
    },
    /// All volumes, flagged with whether they are in any collection.
    Candidates,
}
