//! Cross-product of label variants with the TLD list

/// Combine `label` with `original_tld` first, then with every other TLD.
///
/// TLDs equal to `original_tld` (ignoring ASCII case) are skipped in the second
/// pass, so the original TLD appears exactly once. Blank labels expand to nothing.
pub fn expand_label<S: AsRef<str>>(label: &str, original_tld: &str, tlds: &[S]) -> Vec<String> {
    if label.trim().is_empty() {
        return Vec::new();
    }

    let mut expanded = Vec::with_capacity(tlds.len() + 1);
    expanded.push(format!("{}.{}", label, original_tld));

    for tld in tlds {
        let tld = tld.as_ref();
        if !tld.eq_ignore_ascii_case(original_tld) {
            expanded.push(format!("{}.{}", label, tld));
        }
    }

    expanded
}
