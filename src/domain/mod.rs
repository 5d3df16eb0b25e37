//! Protected-domain input and parsing

pub mod input;
pub mod parser;

// Re-export main functionality
pub use input::{load_protected_domains, parse_domain_lines, ProtectedDomain};
pub use parser::{parse, ParsedDomain};

/// TLDs every label variant is combined with
pub const COMMON_TLDS: &[&str] = &[
    "com", "org", "net", "info", "biz", "us", "co.uk", "de", "ru", "cn",
    "online", "site", "store", "xyz", "io", "mobi", "cc", "tv",
];

/// Phishing-style prefixes prepended to the whole original domain
pub const PHISHING_PREFIXES: &[&str] = &[
    "login-", "secure-", "verify-", "account-", "my-", "web-", "signin-", "auth-",
];

/// Single-character ASCII look-alikes
pub const HOMOGLYPHS: &[(char, char)] = &[
    ('o', '0'),
    ('l', '1'),
    ('i', '1'),
    ('s', '5'),
    ('a', '4'),
    ('e', '3'),
    ('t', '7'),
];

/// Characters most often slipped into a label by accident
pub const INSERTION_CHARS: &[char] = &['a', 'e', 'i', 'o', 'u', 's', 'l', 'n', 'r', 'd', 't'];
