use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let volumes = ctx.service.list_for_owner(&ctx.owner_id).await?;
    output(&volumes, flags.format)
}
