//! Verdict derivation from recorded status codes.
//!
//! Pure functions of the sampled codes; no other input. The repetition in a
//! sample run exists to check response consistency, so the only signals that
//! matter are "were all codes equal" and "was the shared code a 4xx/5xx".

use serde::Serialize;
use std::fmt;

/// Classification of how the WAF handled one request pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// Every sample returned the same status >= 400.
    Blocked,
    /// Every sample returned the same status < 400 (including the
    /// no-response sentinel 0).
    Bypassed,
    /// Samples disagreed with each other.
    Unstable,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Blocked => "BLOCKED",
            Verdict::Bypassed => "BYPASSED",
            Verdict::Unstable => "UNSTABLE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a sample run of repeated identical requests.
pub fn classify_samples(codes: &[u16]) -> Verdict {
    let all_equal = codes.windows(2).all(|pair| pair[0] == pair[1]);
    if !all_equal {
        return Verdict::Unstable;
    }
    match codes.first() {
        Some(&code) if code >= 400 => Verdict::Blocked,
        _ => Verdict::Bypassed,
    }
}

/// Classify a single-shot probe (header-injection phase): binary rule only.
pub fn classify_single(code: u16) -> Verdict {
    if code >= 400 {
        Verdict::Blocked
    } else {
        Verdict::Bypassed
    }
}
