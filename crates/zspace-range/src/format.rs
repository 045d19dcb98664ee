//! Text form of a [`ZRange`]: `zr[start:end, ...]`.
//!
//! Parsing also accepts the JSON object form produced by serde.

use crate::range::{RangeBounds, ZRange};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use zspace_core::{CoordBuf, ZSpaceError};

impl fmt::Display for ZRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("zr[")?;
        for (axis, (s, e)) in self.start().iter().zip(self.end().iter()).enumerate() {
            if axis > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{s}:{e}")?;
        }
        f.write_str("]")
    }
}

impl FromStr for ZRange {
    type Err = ZSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.starts_with('{') {
            let bounds: RangeBounds =
                serde_json::from_str(text).map_err(|err| parse_error(s, err.to_string()))?;
            return ZRange::of(bounds.start, bounds.end);
        }

        let body = text
            .strip_prefix("zr[")
            .and_then(|t| t.strip_suffix(']'))
            .ok_or_else(|| parse_error(s, "expected zr[start:end, ...]"))?
            .trim();
        if body.is_empty() {
            return Ok(ZRange::scalar());
        }

        let mut start = CoordBuf::new();
        let mut end = CoordBuf::new();
        for part in body.split(',') {
            let (lo, hi) = part
                .split_once(':')
                .ok_or_else(|| parse_error(s, format!("axis {part:?} is not start:end")))?;
            start.push(parse_bound(s, lo)?);
            end.push(parse_bound(s, hi)?);
        }
        ZRange::of(start, end)
    }
}

fn parse_bound(input: &str, text: &str) -> Result<i32, ZSpaceError> {
    text.trim()
        .parse()
        .map_err(|err| parse_error(input, format!("bound {:?}: {err}", text.trim())))
}

fn parse_error(input: &str, reason: impl Into<String>) -> ZSpaceError {
    let reason = reason.into();
    debug!(input, %reason, "rejected range text");
    ZSpaceError::Parse {
        input: input.to_string(),
        reason,
    }
}
