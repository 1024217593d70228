//! The `report` command: config → client → batch report on stdout.

use std::path::Path;

use geoprobe_client::{GeocodeClient, GeocodeConfig};
use geoprobe_core::AppConfig;
use geoprobe_report::ReportFormat;

use crate::addresses;
use crate::{OutputFormat, SearchMethod};

pub(crate) async fn run(
    config: &AppConfig,
    input: Option<&Path>,
    search_method: SearchMethod,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let advanced = search_method == SearchMethod::Advanced;

    let lines = match input {
        Some(path) => addresses::load_input_file(path, advanced)?,
        None => addresses::sample_lines(advanced),
    };
    if lines.is_empty() {
        anyhow::bail!("address list is empty");
    }

    let client = build_geocode_client(config)?;
    tracing::info!(
        lines = lines.len(),
        mode = %config.api_mode,
        advanced,
        "starting geocode report"
    );

    let rows = geoprobe_report::generate_report(&client, &lines, report_format(format)).await;
    for row in rows {
        println!("{row}");
    }

    tracing::info!("done");
    Ok(())
}

fn report_format(format: OutputFormat) -> ReportFormat {
    match format {
        OutputFormat::Fields => ReportFormat::Fields,
        OutputFormat::RawJson => ReportFormat::RawJson,
    }
}

fn build_geocode_client(config: &AppConfig) -> anyhow::Result<GeocodeClient> {
    GeocodeClient::new(GeocodeConfig {
        base_url: config.base_url.clone(),
        bearer_token: config.bearer_token.clone(),
        mode: config.api_mode,
        timeout_secs: config.request_timeout_secs,
        user_agent: config.user_agent.clone(),
    })
    .map_err(|e| anyhow::anyhow!("failed to build geocode client: {e}"))
}
