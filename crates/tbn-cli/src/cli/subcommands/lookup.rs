use clap::Subcommand;

/// Catalog lookup commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LookupCommands {
    /// Look up a book by ISBN.
    Isbn { code: String },
    /// Look up a manga series by title.
    Title { title: String },
}
