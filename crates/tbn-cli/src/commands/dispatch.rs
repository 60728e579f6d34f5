use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Volume { action } => commands::volume::handle(&action, ctx, flags).await,
        Commands::Bulk { action } => commands::bulk::handle(&action, ctx, flags).await,
        Commands::Collection { action } => commands::collection::handle(&action, ctx, flags).await,
        Commands::Series { action } => commands::series::handle(&action, ctx, flags).await,
        Commands::Import(args) => commands::import::handle(&args, ctx, flags).await,
        Commands::Lookup { action } => commands::lookup::handle(&action, ctx, flags).await,
    }
}
