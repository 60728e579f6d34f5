use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let listing = ctx
        .service
        .list_all_with_membership_flag(&ctx.owner_id)
        .await?;
    output(&listing, flags.format)
}
