//! Natural alphanumeric ordering
//!
//! Hostnames are split into alternating runs of digits and non-digits; digit
//! runs compare numerically, so `host2` sorts before `host10`.

use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Number(u128),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits = s.starts_with(|c: char| c.is_ascii_digit());

    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() != in_digits {
            out.push(make_chunk(&s[start..i], in_digits));
            start = i;
            in_digits = !in_digits;
        }
    }
    if start < s.len() {
        out.push(make_chunk(&s[start..], in_digits));
    }
    out
}

fn make_chunk(run: &str, in_digits: bool) -> Chunk<'_> {
    if in_digits {
        // Runs longer than u128 all collapse to MAX and fall back to length
        Chunk::Number(run.parse().unwrap_or(u128::MAX))
    } else {
        Chunk::Text(run)
    }
}

/// Compare two strings in natural alphanumeric order
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (ca, cb) = (chunks(a), chunks(b));
    for (x, y) in ca.iter().zip(cb.iter()) {
        let ord = match (x, y) {
            (Chunk::Number(m), Chunk::Number(n)) => m.cmp(n),
            (Chunk::Text(s), Chunk::Text(t)) => s.cmp(t),
            // Mixed chunks only meet when one string starts with digits;
            // numbers sort first, matching numeric-before-text convention
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    ca.len().cmp(&cb.len())
}

/// Sort a list of hostnames in place, naturally
pub fn natural_sort(hosts: &mut [String]) {
    hosts.sort_by(|a, b| natural_cmp(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_runs_compare_numerically() {
        let mut hosts = vec![
            "host1".to_string(),
            "host10".to_string(),
            "host2".to_string(),
        ];
        natural_sort(&mut hosts);

        assert_eq!(hosts, vec!["host1", "host2", "host10"]);
    }

    #[test]
    fn text_runs_compare_lexically() {
        let mut hosts = vec!["web-b".to_string(), "web-a".to_string()];
        natural_sort(&mut hosts);

        assert_eq!(hosts, vec!["web-a", "web-b"]);
    }

    #[test]
    fn mixed_runs_and_prefixes() {
        let mut hosts = vec![
            "db12-replica".to_string(),
            "db2-replica".to_string(),
            "db2".to_string(),
            "app1".to_string(),
        ];
        natural_sort(&mut hosts);

        assert_eq!(hosts, vec!["app1", "db2", "db2-replica", "db12-replica"]);
    }

    #[test]
    fn leading_digits_sort_before_text() {
        assert_eq!(natural_cmp("1host", "ahost"), Ordering::Less);
    }

    #[test]
    fn equal_strings_are_equal() {
        assert_eq!(natural_cmp("node7", "node7"), Ordering::Equal);
    }
}
