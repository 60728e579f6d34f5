use anyhow::bail;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LookupCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tbn lookup`. A miss prints `null` rather than failing.
pub async fn handle(
    action: &LookupCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !ctx.service.has_metadata() {
        bail!("metadata lookups are disabled (metadata.enabled = false or --no-enrich)");
    }
    match action {
        LookupCommands::Isbn { code } => {
            let found = ctx.service.lookup_isbn(code).await;
            output(&json!({"query": code, "result": found}), flags.format)
        }
        LookupCommands::Title { title } => {
            let found = ctx.service.lookup_title(title).await;
            output(&json!({"query": title, "result": found}), flags.format)
        }
    }
}
