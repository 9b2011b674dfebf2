//! Single-line sample parsing.
//!
//! Parsing rules:
//! - Split at the first `:` into key and remainder; the key may not be empty.
//! - Remainder is `|`-separated: value, type tag, optional `@rate`.
//! - The value must be a finite float (`1`, `-2.5`, `3e2`, ...).
//! - A malformed or non-positive rate falls back to `DEFAULT_SAMPLE_RATE`.

use crate::error::{Result, SplyceError};

/// Rate assumed when a line carries none (or an unusable one).
pub const DEFAULT_SAMPLE_RATE: f64 = 1.0;

/// Metric type, taken from the line's type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// `c`: additive, scaled by the sample rate.
    Counter,
    /// `g`: last write wins.
    Gauge,
    /// `ms`: raw observation, bucketed at read time.
    Timer,
    /// Any other tag. Parsed, but ignored by the store.
    Unknown,
}

impl MetricKind {
    /// Resolve a wire type tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "c" => MetricKind::Counter,
            "g" => MetricKind::Gauge,
            "ms" => MetricKind::Timer,
            _ => MetricKind::Unknown,
        }
    }
}

/// One parsed metric observation. Transient: consumed by the store right away.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub key: String,
    pub kind: MetricKind,
    pub value: f64,
    /// Always finite and `> 0`.
    pub sample_rate: f64,
}

/// Parse one protocol line into a `Sample`.
///
/// Only the third `|` field can carry `@rate`; any fields after it are ignored.
pub fn parse_line(line: &str) -> Result<Sample> {
    let Some((key, rest)) = line.split_once(':') else {
        return Err(SplyceError::BadSample("missing ':' separator".into()));
    };
    if key.is_empty() {
        return Err(SplyceError::BadSample("empty key".into()));
    }

    let mut fields = rest.split('|');
    let raw_value = fields.next().unwrap_or_default();
    let tag = match fields.next() {
        Some(t) if !t.is_empty() => t,
        _ => return Err(SplyceError::BadSample("missing type tag".into())),
    };

    let value: f64 = raw_value
        .parse()
        .map_err(|_| SplyceError::BadSample(format!("invalid value: {raw_value:?}")))?;
    if !value.is_finite() {
        return Err(SplyceError::BadSample(format!("non-finite value: {raw_value:?}")));
    }

    let sample_rate = fields
        .next()
        .and_then(parse_sample_rate)
        .unwrap_or(DEFAULT_SAMPLE_RATE);

    Ok(Sample {
        key: key.to_string(),
        kind: MetricKind::from_tag(tag),
        value,
        sample_rate,
    })
}

fn parse_sample_rate(field: &str) -> Option<f64> {
    let rate: f64 = field.strip_prefix('@')?.parse().ok()?;
    (rate.is_finite() && rate > 0.0).then_some(rate)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn key_keeps_everything_before_first_colon() {
        let s = parse_line("svc.db:query:7|ms").unwrap_err();
        // "query:7" is not a number, the second colon belongs to the value
        assert_eq!(s.code().as_str(), "BAD_SAMPLE");

        let s = parse_line("svc.db.query:7|ms").unwrap();
        assert_eq!(s.key, "svc.db.query");
        assert_eq!(s.kind, MetricKind::Timer);
    }

    #[test]
    fn extra_fields_after_rate_are_ignored() {
        let s = parse_line("hits:2|c|@0.5|#tag:x").unwrap();
        assert_eq!(s.sample_rate, 0.5);
    }

    #[test]
    fn third_field_without_at_sign_keeps_default_rate() {
        let s = parse_line("hits:2|c|0.5").unwrap();
        assert_eq!(s.sample_rate, DEFAULT_SAMPLE_RATE);
    }

    #[test]
    fn unknown_tags_parse_as_unknown() {
        assert_eq!(MetricKind::from_tag("zz"), MetricKind::Unknown);
        assert_eq!(MetricKind::from_tag("C"), MetricKind::Unknown);
        assert_eq!(parse_line("k:1|h").unwrap().kind, MetricKind::Unknown);
    }
}
