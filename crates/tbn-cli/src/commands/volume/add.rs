use anyhow::bail;
use tbn_core::enums::EditionType;
use tbn_db::repos::volume::{CollectionTarget, NewVolume};
use tbn_metadata::IsbnMetadata;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VolumeAddArgs;
use crate::commands::shared::parse::parse_choice;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &VolumeAddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let needs_prefill = args.title.as_deref().is_none_or(|t| t.trim().is_empty())
        || args.author.is_none();
    let prefill = match args.isbn.as_deref() {
        Some(isbn) if needs_prefill => ctx.service.lookup_isbn(isbn).await,
        _ => None,
    };

    let input = build_new_volume(args, prefill.as_ref(), ctx)?;
    let added = ctx.service.add_volume(&ctx.owner_id, &input).await?;
    output(&added, flags.format)
}

/// Merge explicit arguments, ISBN prefill and configured defaults.
/// Explicit arguments always win over prefill.
fn build_new_volume(
    args: &VolumeAddArgs,
    prefill: Option<&IsbnMetadata>,
    ctx: &AppContext,
) -> anyhow::Result<NewVolume> {
    let title = args
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .or_else(|| prefill.map(|p| p.title.as_str()).filter(|t| !t.is_empty()));
    let Some(title) = title else {
        bail!("--title is required unless --isbn resolves to a catalog entry");
    };

    let edition_raw = args
        .edition
        .as_deref()
        .unwrap_or(&ctx.config.general.default_edition);
    let edition: EditionType = parse_choice(edition_raw, "edition")?;
    let language = args
        .language
        .clone()
        .unwrap_or_else(|| ctx.config.general.default_language.clone());

    let mut input = NewVolume::new(title, args.number.as_str())
        .with_edition(edition)
        .with_language(language);

    let author = args
        .author
        .clone()
        .or_else(|| prefill.map(|p| p.author.clone()).filter(|a| !a.is_empty()));
    if let Some(author) = author {
        input = input.with_author(author);
    }
    if let Some(isbn) = &args.isbn {
        input = input.with_isbn(isbn.as_str());
    }
    if let Some(target) =
        CollectionTarget::from_parts(args.collection.as_deref(), args.new_collection.as_deref())
    {
        input = input.with_collection(target);
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use tbn_config::TankobonConfig;

    use super::*;

    async fn test_ctx() -> AppContext {
        let mut config = TankobonConfig::default();
        config.database.path = ":memory:".into();
        config.metadata.enabled = false;
        config.general.default_language = "ja".into();
        config.general.default_edition = "Deluxe".into();
        AppContext::init(config).await.unwrap()
    }

    fn args(title: Option<&str>) -> VolumeAddArgs {
        VolumeAddArgs {
            title: title.map(String::from),
            number: "1".into(),
            author: None,
            edition: None,
            language: None,
            isbn: None,
            collection: None,
            new_collection: None,
        }
    }

    fn catalog_hit() -> IsbnMetadata {
        IsbnMetadata {
            title: "Naruto, Vol. 1".into(),
            author: "Masashi Kishimoto".into(),
            description: String::new(),
            thumbnail: None,
        }
    }

    #[tokio::test]
    async fn configured_defaults_fill_edition_and_language() {
        let ctx = test_ctx().await;
        let input = build_new_volume(&args(Some("Naruto")), None, &ctx).unwrap();
        assert_eq!(input.edition, EditionType::Deluxe);
        assert_eq!(input.language, "ja");
        assert_eq!(input.title, "Naruto");
    }

    #[tokio::test]
    async fn prefill_supplies_missing_title_and_author() {
        let ctx = test_ctx().await;
        let hit = catalog_hit();
        let input = build_new_volume(&args(None), Some(&hit), &ctx).unwrap();
        assert_eq!(input.title, "Naruto, Vol. 1");
        assert_eq!(input.author.as_deref(), Some("Masashi Kishimoto"));
    }

    #[tokio::test]
    async fn explicit_title_beats_prefill() {
        let ctx = test_ctx().await;
        let hit = catalog_hit();
        let input = build_new_volume(&args(Some("Naruto")), Some(&hit), &ctx).unwrap();
        assert_eq!(input.title, "Naruto");
    }

    #[tokio::test]
    async fn missing_title_without_prefill_is_an_error() {
        let ctx = test_ctx().await;
        assert!(build_new_volume(&args(Some("  ")), None, &ctx).is_err());
    }

    #[tokio::test]
    async fn unknown_edition_is_rejected() {
        let ctx = test_ctx().await;
        let mut a = args(Some("Naruto"));
        a.edition = Some("hardcover".into());
        let err = build_new_volume(&a, None, &ctx).unwrap_err();
        assert!(err.to_string().contains("invalid edition"));
    }

    #[tokio::test]
    async fn new_collection_target_is_passed_through() {
        let ctx = test_ctx().await;
        let mut a = args(Some("Naruto"));
        a.new_collection = Some("Shelf A".into());
        let input = build_new_volume(&a, None, &ctx).unwrap();
        assert_eq!(input.collection, Some(CollectionTarget::New("Shelf A".into())));
    }
}
