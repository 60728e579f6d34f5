mod add;
mod delete;
mod get;
mod list;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VolumeCommands;
use crate::context::AppContext;

/// Handle `tbn volume`.
pub async fn handle(
    action: &VolumeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VolumeCommands::Add(args) => add::run(args, ctx, flags).await,
        VolumeCommands::List => list::run(ctx, flags).await,
        VolumeCommands::Get { id } => get::run(id, ctx, flags).await,
        VolumeCommands::Delete { id } => delete::run(id, ctx, flags).await,
        VolumeCommands::Status { id, status } => status::run(id, status, ctx, flags).await,
    }
}
