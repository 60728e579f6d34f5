use crate::cli::GlobalFlags;
use crate::cli::subcommands::SeriesCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tbn series`.
pub async fn handle(
    action: &SeriesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SeriesCommands::List => {
            let series = ctx.service.list_series(&ctx.owner_id).await?;
            output(&series, flags.format)
        }
    }
}
