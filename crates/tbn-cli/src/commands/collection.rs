mod attach;
mod candidates;
mod create;
mod list;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CollectionCommands;
use crate::context::AppContext;

/// Handle `tbn collection`.
pub async fn handle(
    action: &CollectionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CollectionCommands::Create { name, volume } => {
            create::run(name, volume, ctx, flags).await
        }
        CollectionCommands::List => list::run(ctx, flags).await,
        CollectionCommands::Show { id } => show::run(id, ctx, flags).await,
        CollectionCommands::Members { id } => show::run_members(id, ctx, flags).await,
        CollectionCommands::Attach { id, volumes } => {
            attach::run_attach(id, volumes, ctx, flags).await
        }
        CollectionCommands::Detach { id, volumes } => {
            attach::run_detach(id, volumes, ctx, flags).await
        }
        CollectionCommands::Candidates => candidates::run(ctx, flags).await,
    }
}
