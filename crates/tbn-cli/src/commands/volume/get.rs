use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let volume = ctx.service.get_volume(&ctx.owner_id, id).await?;
    output(&volume, flags.format)
}
