use reqwest::{redirect, Client, ClientBuilder};
use std::time::Duration;

/// Identifying user agent carried by every diagnostic request.
pub const PROBE_USER_AGENT: &str = "WAF-Test/1.0";

/// Build the probe client: fixed user agent, per-request timeout, no
/// redirect following (a 3xx from the WAF is a result, not a hop to chase).
pub fn create_probe_client(timeout_secs: u64) -> anyhow::Result<Client> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs))
        .redirect(redirect::Policy::none())
        .user_agent(PROBE_USER_AGENT)
        .use_rustls_tls()
        // Diagnostic targets often sit behind self-signed staging certs.
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(client)
}
