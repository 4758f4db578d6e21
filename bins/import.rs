//! One-shot import of the pricing workbook into `pricing_table`.

use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};

/// Refresh the pricing table from the pricing workbook.
#[derive(Debug, Parser)]
#[command(name = "import", version)]
struct Args {
    /// Workbook to read; defaults to `[importer].file` in config.toml
    #[arg(env = "IMPORT_FILE")]
    file: Option<PathBuf>,
    /// Worksheet name; the first sheet when omitted
    #[arg(long, env = "IMPORT_SHEET")]
    sheet: Option<String>,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "import", error = %e, "import failed");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let cfg = configs::AppConfig::load_or_env()?;
    let file = args.file.unwrap_or_else(|| PathBuf::from(&cfg.importer.file));
    let sheet = args.sheet.or(cfg.importer.sheet);

    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    let report = importer::import_file(&db, &file, sheet.as_deref()).await?;
    info!(
        service = "import",
        file = %file.display(),
        inserted = report.inserted,
        deleted = report.deleted,
        skipped_blocks = report.blocks_skipped,
        "import finished"
    );
    Ok(())
}
