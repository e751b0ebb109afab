use anyhow::bail;

use crate::cli::Cli;
use waf_probe::classify;
use waf_probe::report::{self, ResultRecord};
use waf_probe::{catalog, http_client, probe};

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Configure logging based on global flags. Keep reqwest/hyper at INFO so
    // per-request chatter doesn't drown the report on stdout.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter_str = format!("waf_probe={crate_level},reqwest=info,hyper=info,h2=info");
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .init();

    let target = normalize_target(&cli.target)?;
    let client = http_client::create_probe_client(cli.timeout)?;

    tracing::info!(target = %target, timeout = cli.timeout, "starting WAF diagnostic");

    print!("{}", report::format_banner(&target));
    println!();

    // Payload phase: each case is reported before the next one runs.
    let mut findings: Vec<ResultRecord> = Vec::new();
    for case in catalog::TEST_CASES {
        let outcome = probe::run_test_case(&client, &target, case).await;
        let record = ResultRecord {
            name: case.name.to_string(),
            payload: case.payload.to_string(),
            get_verdict: classify::classify_samples(&outcome.get_codes),
            post_verdict: classify::classify_samples(&outcome.post_codes),
            get_codes: outcome.get_codes,
            post_codes: outcome.post_codes,
        };
        println!("{}", report::format_case_block(&record));
        if record.has_finding() {
            findings.push(record);
        }
    }

    print!("{}", report::format_summary(&findings));
    println!();

    // Header-injection phase: single-shot probes with the binary rule.
    println!("{}", report::separator());
    println!("=== Header Injection ===");
    println!("{}", report::separator());
    for case in catalog::HEADER_CASES {
        let code = probe::run_header_case(&client, &target, case).await;
        let verdict = classify::classify_single(code);
        println!("{}", report::format_header_result(case.name, case.header, verdict, code));
    }

    println!("=== Diagnostic complete ===");

    // Findings are report content, not a process failure: always exit 0.
    Ok(())
}

/// Validate the target before any request goes out; a malformed URL is the
/// one fatal startup error.
fn normalize_target(raw: &str) -> anyhow::Result<String> {
    let parsed = match url::Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(err) => bail!("invalid target URL '{raw}': {err}"),
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        bail!("target URL must use http or https, got '{}'", parsed.scheme());
    }
    Ok(raw.trim_end_matches('/').to_string())
}
