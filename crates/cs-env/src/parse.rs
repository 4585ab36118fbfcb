//! Coordinate strings from the environment.
//!
//! Positions arrive as `"x,y"`; threats as `"x,y,type"`.  The type tag is
//! not used by the decision loop and is ignored.

use cs_core::{CoreResult, Position};
use log::debug;

/// Parse `"x,y"` (trailing fields ignored).
#[inline]
pub fn parse_position(raw: &str) -> CoreResult<Position> {
    raw.parse()
}

/// Parse every threat entry, dropping malformed ones individually.
pub fn parse_threats<I, S>(entries: I) -> Vec<Position>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| match parse_position(entry.as_ref()) {
            Ok(p) => Some(p),
            Err(e) => {
                debug!("[Env] dropping threat entry: {e}");
                None
            }
        })
        .collect()
}
