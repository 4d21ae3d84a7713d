// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use clap::{Parser, ValueEnum};
use std::fmt::Write as _;

use lint_secheaders::{config, exclusion, lint, response_header};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "lint-secheaders")]
struct Args {
    /// File holding the raw response head (status line and header lines)
    #[arg(long)]
    headers: String,

    /// Method of the request that produced the response
    #[arg(long, default_value = "GET")]
    method: String,

    /// Full URL of the request, used by exclusion rules
    #[arg(long, default_value = "http://localhost/")]
    url: String,

    /// Optional config TOML path (check toggles and exclusion rules)
    #[arg(long)]
    config: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let cfg = load_config(args.config.as_deref()).await;

    let registry = exclusion::ExclusionRuleRegistry::new();
    registry.add_listener(|rules| info!(count = rules.len(), "exclusion rules changed"));
    cfg.seed_registry(&registry);

    let raw = tokio::fs::read_to_string(&args.headers).await?;
    let header = response_header::ResponseHeader::parse(&raw);

    let report = lint::lint_headers(&header, &args.method, &args.url, &cfg, &registry);

    let out = match args.format {
        Format::Json => serde_json::to_string_pretty(&report)?,
        Format::Text => render_text(&report)?,
    };
    println!("{}", out);

    Ok(())
}

/// Load config from `path`, falling back to defaults when absent or invalid.
async fn load_config(path: Option<&str>) -> config::Config {
    match path {
        Some(p) => config::Config::load_from_path(p).await.unwrap_or_else(|e| {
            warn!(%p, %e, "failed to load config, using defaults");
            config::Config::default()
        }),
        None => config::Config::default(),
    }
}

fn render_text(report: &lint::Report) -> anyhow::Result<String> {
    let mut out = String::new();
    if report.excluded {
        writeln!(out, "{} {}: excluded", report.method, report.url)?;
        return Ok(out);
    }

    writeln!(out, "{} {}: {}", report.method, report.url, report.overall)?;
    for outcome in &report.outcomes {
        writeln!(
            out,
            "[{}] {}: {}",
            outcome.verdict.status(),
            outcome.column,
            outcome.verdict.display_value()
        )?;
        if let Some(msg) = &outcome.message {
            writeln!(out, "    {}", msg)?;
        }
        for line in &outcome.lines {
            writeln!(out, "    {}", line.line)?;
            for seg in &line.segments {
                writeln!(out, "      {}..{} {:?}", seg.start, seg.end, seg.kind)?;
            }
        }
    }
    Ok(out)
}
