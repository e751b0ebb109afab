//! Line-oriented console report formatting.
//!
//! Formatting functions return `String` so the report surface is testable
//! without a network; the runner prints them as each case completes.

use serde::Serialize;

use crate::classify::Verdict;

/// Payload preview length in the per-case blocks.
pub const PREVIEW_LEN: usize = 60;

const SEPARATOR_LEN: usize = 70;

/// One case's final result, kept for the summary when either verdict shows
/// the WAF did not block consistently.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRecord {
    pub name: String,
    pub payload: String,
    pub get_codes: Vec<u16>,
    pub post_codes: Vec<u16>,
    pub get_verdict: Verdict,
    pub post_verdict: Verdict,
}

impl ResultRecord {
    /// True when the case belongs in the findings summary.
    pub fn has_finding(&self) -> bool {
        self.get_verdict != Verdict::Blocked || self.post_verdict != Verdict::Blocked
    }
}

pub fn separator() -> String {
    "=".repeat(SEPARATOR_LEN)
}

/// Truncate a payload to `PREVIEW_LEN` characters, marking longer ones
/// with an ellipsis.
pub fn payload_preview(payload: &str) -> String {
    if payload.chars().count() > PREVIEW_LEN {
        let head: String = payload.chars().take(PREVIEW_LEN).collect();
        format!("{head}...")
    } else {
        payload.to_string()
    }
}

fn fmt_codes(codes: &[u16]) -> String {
    let parts: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

pub fn format_banner(target: &str) -> String {
    let mut out = String::new();
    out.push_str("=== WAF Diagnostic ===\n");
    out.push_str(&format!("Target: {target}\n"));
    out.push_str(&format!("Time: {}\n", chrono::Local::now().format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&separator());
    out.push('\n');
    out
}

/// Per-case block: name, payload preview, both sample runs with verdicts.
pub fn format_case_block(record: &ResultRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("[{}]\n", record.name));
    out.push_str(&format!("  Payload: {}\n", payload_preview(&record.payload)));
    out.push_str(&format!("  GET:  {} => {}\n", fmt_codes(&record.get_codes), record.get_verdict));
    out.push_str(&format!("  POST: {} => {}\n", fmt_codes(&record.post_codes), record.post_verdict));
    out
}

/// Findings summary: every case where GET or POST was not blocked, with the
/// full payload this time, or an all-clear line.
pub fn format_summary(findings: &[ResultRecord]) -> String {
    let mut out = String::new();
    out.push_str(&separator());
    out.push('\n');
    out.push_str("=== Findings ===\n");
    out.push_str(&separator());
    out.push('\n');

    if findings.is_empty() {
        out.push_str("[OK] All test cases were consistently blocked.\n");
        return out;
    }

    out.push_str(&format!("[!] {} case(s) not consistently blocked:\n\n", findings.len()));
    for record in findings {
        out.push_str(&format!("[{}]\n", record.name));
        out.push_str(&format!("  Payload: {}\n", record.payload));
        out.push_str(&format!("  GET:  {} => {}\n", fmt_codes(&record.get_codes), record.get_verdict));
        out.push_str(&format!("  POST: {} => {}\n\n", fmt_codes(&record.post_codes), record.post_verdict));
    }
    out
}

/// One header-probe result line pair, e.g. `[UA Log4j] BLOCKED(500)`.
pub fn format_header_result(name: &str, header: &str, verdict: Verdict, code: u16) -> String {
    format!("[{name}] {}({code})\n  Header: {header}\n", verdict.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(get_codes: Vec<u16>, post_codes: Vec<u16>, get: Verdict, post: Verdict) -> ResultRecord {
        ResultRecord {
            name: "XSS script tag".to_string(),
            payload: "q=<script>alert(1)</script>".to_string(),
            get_codes,
            post_codes,
            get_verdict: get,
            post_verdict: post,
        }
    }

    #[test]
    fn short_payload_shown_in_full() {
        let payload = "id=1' UNION SELECT 1,2,3--";
        assert_eq!(payload_preview(payload), payload);
        assert!(!payload_preview(payload).contains("..."));
    }

    #[test]
    fn long_payload_truncated_to_sixty_chars() {
        let payload = "x".repeat(100);
        let preview = payload_preview(&payload);
        assert_eq!(preview.len(), PREVIEW_LEN + 3);
        assert!(preview.ends_with("..."));
        assert_eq!(&preview[..PREVIEW_LEN], "x".repeat(PREVIEW_LEN));
    }

    #[test]
    fn exactly_sixty_chars_not_truncated() {
        let payload = "y".repeat(PREVIEW_LEN);
        assert_eq!(payload_preview(&payload), payload);
    }

    #[test]
    fn case_block_shows_codes_and_verdicts() {
        let rec = record(vec![403, 403, 403], vec![200, 200, 200], Verdict::Blocked, Verdict::Bypassed);
        let block = format_case_block(&rec);
        assert!(block.contains("[XSS script tag]"));
        assert!(block.contains("GET:  [403, 403, 403] => BLOCKED"));
        assert!(block.contains("POST: [200, 200, 200] => BYPASSED"));
    }

    #[test]
    fn fully_blocked_record_is_not_a_finding() {
        let rec = record(vec![403, 403, 403], vec![403, 403, 403], Verdict::Blocked, Verdict::Blocked);
        assert!(!rec.has_finding());
        let rec = record(vec![403, 403, 403], vec![200, 403, 200], Verdict::Blocked, Verdict::Unstable);
        assert!(rec.has_finding());
    }

    #[test]
    fn empty_summary_prints_all_clear() {
        let summary = format_summary(&[]);
        assert!(summary.contains("[OK] All test cases were consistently blocked."));
    }

    #[test]
    fn summary_lists_full_payload() {
        let long_payload = format!("q={}", "a".repeat(80));
        let mut rec = record(vec![200, 200, 200], vec![200, 200, 200], Verdict::Bypassed, Verdict::Bypassed);
        rec.payload = long_payload.clone();
        let summary = format_summary(&[rec]);
        assert!(summary.contains(&long_payload));
        assert!(summary.contains("1 case(s) not consistently blocked"));
    }

    #[test]
    fn header_result_includes_verdict_and_code() {
        let line = format_header_result(
            "UA Log4j",
            "User-Agent: ${jndi:ldap://127.0.0.1/a}",
            Verdict::Blocked,
            500,
        );
        assert!(line.contains("[UA Log4j] BLOCKED(500)"));
        assert!(line.contains("User-Agent: ${jndi:ldap://127.0.0.1/a}"));
    }
}
