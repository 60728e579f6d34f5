use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run_attach(
    collection_id: &str,
    volume_ids: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let attached = ctx
        .service
        .attach(&ctx.owner_id, collection_id, volume_ids)
        .await?;
    output(
        &json!({"collection_id": collection_id, "attached": attached}),
        flags.format,
    )
}

pub async fn run_detach(
    collection_id: &str,
    volume_ids: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let detached = ctx
        .service
        .detach(&ctx.owner_id, collection_id, volume_ids)
        .await?;
    output(
        &json!({"collection_id": collection_id, "detached": detached}),
        flags.format,
    )
}
