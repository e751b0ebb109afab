//! Built-in attack-pattern catalogs.
//!
//! The payload set is fixed at compile time; adding or removing a case is a
//! data edit here, not a logic change anywhere else.

/// A single test case: category name plus a raw `key=value` payload string.
///
/// The payload is stored unescaped. GET transport percent-encodes it per
/// query component; POST transport sends it as-is.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    pub name: &'static str,
    pub payload: &'static str,
}

/// A header-injection test case. `header` is the literal `Name: value` line.
#[derive(Debug, Clone, Copy)]
pub struct HeaderTestCase {
    pub name: &'static str,
    pub header: &'static str,
}

pub const TEST_CASES: &[TestCase] = &[
    // SQL injection
    TestCase { name: "SQL union basic", payload: "id=1' UNION SELECT 1,2,3--" },
    TestCase { name: "SQL comment obfuscation", payload: "id=1'/**/UNION/**/SELECT/**/1,user(),3--" },
    TestCase { name: "SQL double URL-encoding", payload: "id=1%2527%2520UNION%2520SELECT%25201%252C2%252C3--" },
    TestCase { name: "SQL hex keyword", payload: "id=0x53454c454354" },
    // XSS
    TestCase { name: "XSS script tag", payload: "q=<script>alert(1)</script>" },
    TestCase { name: "XSS SVG event", payload: "q=<svg/onload=alert(1)>" },
    TestCase { name: "XSS IMG event", payload: "q=<img src=x onerror=alert(1)>" },
    // Path traversal
    TestCase { name: "Path traversal basic", payload: "file=../../../etc/passwd" },
    TestCase { name: "Path traversal encoded", payload: "file=%2e%2e%2f%2e%2e%2fetc%2fpasswd" },
    TestCase { name: "Path traversal double-encoded", payload: "file=%252e%252e%252f%252e%252e%252fetc%252fpasswd" },
    // Command injection
    TestCase { name: "Command injection semicolon", payload: "cmd=test;cat /etc/passwd" },
    TestCase { name: "Command injection pipe", payload: "cmd=test|id" },
    TestCase { name: "Command injection chain", payload: "cmd=env && cat /etc/issue" },
    // Log4j
    TestCase { name: "Log4j JNDI basic", payload: "user=${jndi:ldap://127.0.0.1/a}" },
    TestCase { name: "Log4j nested lookup", payload: "user=${jndi:${lower:l}dap://127.0.0.1/a}" },
    // SSRF
    TestCase { name: "SSRF loopback", payload: "url=http://127.0.0.1" },
    TestCase { name: "SSRF private range", payload: "url=http://192.168.1.1" },
    // Deserialization
    TestCase { name: "PHP object injection", payload: r#"data=O:4:"User":1:{s:4:"name";s:5:"admin";}"# },
];

pub const HEADER_CASES: &[HeaderTestCase] = &[
    HeaderTestCase { name: "UA Log4j", header: "User-Agent: ${jndi:ldap://127.0.0.1/a}" },
    HeaderTestCase { name: "Referer XSS", header: "Referer: <script>alert(1)</script>" },
    HeaderTestCase { name: "X-Forwarded-For Log4j", header: "X-Forwarded-For: ${jndi:ldap://x/}" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_categories() {
        assert_eq!(TEST_CASES.len(), 18);
        assert_eq!(HEADER_CASES.len(), 3);
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<&str> = TEST_CASES.iter().map(|c| c.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TEST_CASES.len());
    }

    #[test]
    fn header_cases_carry_a_colon_separated_line() {
        for case in HEADER_CASES {
            assert!(case.header.contains(": "), "bad header line: {}", case.header);
        }
    }
}
