use tbn_core::enums::ReadingStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_choice;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status: ReadingStatus = parse_choice(status, "status")?;
    ctx.service.update_status(&ctx.owner_id, id, status).await?;
    let volume = ctx.service.get_volume(&ctx.owner_id, id).await?;
    output(&volume, flags.format)
}
