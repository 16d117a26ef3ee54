// src/cli/parsers.rs
use std::{fmt::Display, str::FromStr};

fn parse_in_range<T>(s: &str, min: T, max: T) -> Result<T, String>
where
    T: FromStr + PartialOrd + Display + Copy,
{
    let value: T = s.trim().parse().map_err(|_| format!("Invalid number: {s}"))?;
    if value < min || value > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(value)
}

pub fn parse_usize_1_to_512(s: &str) -> Result<usize, String> {
    parse_in_range(s, 1, 512)
}

pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_in_range(s, 1, usize::MAX)
}

/// `.RS`, ` rs ` などを `rs` に正規化する
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim().trim_start_matches('.');
    (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
}
