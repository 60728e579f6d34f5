use std::path::Path;

use anyhow::{Context, bail};
use tbn_core::import::{ImportRow, rows_from_csv, rows_from_json};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tbn import <file>`.
pub async fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = read_rows(&args.file)?;
    tracing::info!(file = %args.file.display(), rows = rows.len(), "importing");

    let outcome = ctx.service.import_rows(&ctx.owner_id, &rows).await;
    if outcome.failure_count > 0 {
        tracing::warn!(
            failed = outcome.failure_count,
            succeeded = outcome.success_count,
            "import finished with failures"
        );
    }
    output(&outcome, flags.format)
}

/// Read an import file, picking the parser from the extension.
fn read_rows(path: &Path) -> anyhow::Result<Vec<ImportRow>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let rows = match extension.as_deref() {
        Some("csv") => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            rows_from_csv(file)?
        }
        Some("json") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            rows_from_json(&text)?
        }
        _ => bail!(
            "unsupported import file {}: expected a .csv or .json extension",
            path.display()
        ),
    };
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::read_rows;

    fn write_temp(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_csv_by_extension() {
        let (_dir, path) = write_temp("library.CSV", "Title,Volume\nNaruto,1\nBleach,2\n");
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("Title"), Some("Bleach"));
    }

    #[test]
    fn reads_json_by_extension() {
        let (_dir, path) = write_temp("library.json", r#"[{"title": "Naruto", "volume": 1}]"#);
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("volume"), Some("1"));
    }

    #[test]
    fn rejects_other_extensions() {
        let (_dir, path) = write_temp("library.xlsx", "");
        let err = read_rows(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported import file"));
    }
}
