use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let details = ctx.service.get_details(&ctx.owner_id, id).await?;
    output(&details, flags.format)
}

pub async fn run_members(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let memberships = ctx.service.list_memberships(&ctx.owner_id, id).await?;
    output(&memberships, flags.format)
}
