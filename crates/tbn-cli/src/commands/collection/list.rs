use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let collections = ctx.service.list_with_counts(&ctx.owner_id).await?;
    output(&collections, flags.format)
}
