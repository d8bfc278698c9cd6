use anyhow::Result;
use tracing::info;

use docs_postprocess::{config::Config, site};

fn main() -> Result<()> {
    // Load .env file (ignored when the variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docs_postprocess=info".parse()?),
        )
        .init();

    info!("Starting docs post-processing run");

    // Load configuration from environment
    let config = Config::from_env()?;

    if config.is_local_file_site() {
        info!("Site scheme is 'file': language selector rewrite disabled");
    }
    if config.dry_run {
        info!("Dry run: no files will be modified");
    }

    let report = site::process_site(&config)?;

    info!(
        "Processed {} pages ({} changed, {} failed): {} links rewritten, {} entries removed, {} snippet fixes",
        report.pages_scanned,
        report.pages_changed,
        report.pages_failed,
        report.links_rewritten,
        report.entries_removed,
        report.snippet_fixes
    );

    // Machine-readable summary for build pipelines
    println!("{}", serde_json::to_string(&report)?);

    Ok(())
}
