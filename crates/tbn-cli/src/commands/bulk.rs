use tbn_core::enums::ReadingStatus;
use tbn_core::responses::BulkResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BulkCommands;
use crate::commands::shared::parse::parse_choice;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tbn bulk`.
pub async fn handle(
    action: &BulkCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (ids, affected) = match action {
        BulkCommands::Delete { ids } => (ids, ctx.service.bulk_delete(&ctx.owner_id, ids).await?),
        BulkCommands::Status { status, ids } => {
            let status: ReadingStatus = parse_choice(status, "status")?;
            let affected = ctx
                .service
                .bulk_set_status(&ctx.owner_id, ids, status)
                .await?;
            (ids, affected)
        }
    };

    let response = BulkResponse {
        requested: ids.len() as u64,
        affected,
    };
    tracing::info!(requested = response.requested, affected, "bulk operation applied");
    output(&response, flags.format)
}
