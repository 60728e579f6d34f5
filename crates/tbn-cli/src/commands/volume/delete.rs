use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let deleted = ctx.service.delete_volume(&ctx.owner_id, id).await?;
    output(&json!({"volume_id": id, "deleted": deleted}), flags.format)
}
