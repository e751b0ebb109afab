//! The request runner: issues the repeated GET/POST samples for payload
//! cases and the single-shot header-injection probes.
//!
//! Execution is strictly sequential. Each request is bounded by the client
//! timeout; any transport failure (timeout, refused connection, DNS, TLS)
//! records the sentinel code 0 and the loop moves on.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use crate::catalog::{HeaderTestCase, TestCase};
use crate::encode;

/// Repetitions per request type, for consistency checking.
pub const SAMPLE_SIZE: usize = 3;

/// Courtesy gap between requests so burst-based defenses don't bias the run.
pub const REQUEST_GAP: Duration = Duration::from_millis(100);

/// Status codes observed for one payload case. 0 means no response.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub get_codes: Vec<u16>,
    pub post_codes: Vec<u16>,
}

/// Run one payload case: `SAMPLE_SIZE` GETs with the percent-encoded payload
/// in the query string, then `SAMPLE_SIZE` POSTs with the raw payload as the
/// body. The GET/POST encoding asymmetry is intentional; it mirrors how
/// query-string and body-submitted payloads actually reach an application.
pub async fn run_test_case(client: &Client, target: &str, case: &TestCase) -> CaseOutcome {
    let get_url = format!("{}?{}", target, encode::encode_query(case.payload));

    let mut get_codes = Vec::with_capacity(SAMPLE_SIZE);
    for _ in 0..SAMPLE_SIZE {
        let code = match client.get(&get_url).send().await {
            Ok(resp) => resp.status().as_u16(),
            Err(err) => {
                tracing::debug!(case = case.name, error = %err, "GET probe failed");
                0
            }
        };
        get_codes.push(code);
        tokio::time::sleep(REQUEST_GAP).await;
    }

    let mut post_codes = Vec::with_capacity(SAMPLE_SIZE);
    for _ in 0..SAMPLE_SIZE {
        let code = match client
            .post(target)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(case.payload)
            .send()
            .await
        {
            Ok(resp) => resp.status().as_u16(),
            Err(err) => {
                tracing::debug!(case = case.name, error = %err, "POST probe failed");
                0
            }
        };
        post_codes.push(code);
        tokio::time::sleep(REQUEST_GAP).await;
    }

    CaseOutcome { get_codes, post_codes }
}

/// Run one header-injection case: a single GET to `<target>/test` carrying
/// the literal header line. Returns the status code (0 on no response).
pub async fn run_header_case(client: &Client, target: &str, case: &HeaderTestCase) -> u16 {
    let url = format!("{}/test", target.trim_end_matches('/'));
    let (name, value) = match case.header.split_once(':') {
        Some((name, value)) => (name.trim(), value.trim()),
        None => (case.header, ""),
    };

    match client.get(&url).header(name, value).send().await {
        Ok(resp) => resp.status().as_u16(),
        Err(err) => {
            tracing::debug!(case = case.name, error = %err, "header probe failed");
            0
        }
    }
}
