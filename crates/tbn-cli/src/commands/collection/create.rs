use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    volume_ids: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let collection = if volume_ids.is_empty() {
        ctx.service.create_collection(&ctx.owner_id, name).await?
    } else {
        ctx.service
            .create_collection_with_volumes(&ctx.owner_id, name, volume_ids)
            .await?
    };
    output(&collection, flags.format)
}
