//! Token parsing for the two structured directive operands.
//!
//! RESIZE takes a dimension token and a filter token; both follow small fixed
//! grammars that this module parses with no I/O and no side effects:
//!
//! - `<W>x<H>` — target dimensions, `x` case-insensitive, `0` meaning "auto"
//!   on either axis.
//! - `<name>[(<repeat>)]` — a filter name with an optional repeat count.
//!
//! Dimension parsing is strict (any malformed token is rejected); filter-spec
//! parsing never fails — a malformed repeat suffix degrades to a count of 1.

/// Target dimensions parsed from a `<W>x<H>` token.
///
/// `0` on either axis means "auto": the image service derives that axis from
/// the source image and the filter's natural scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionSpec {
    pub width: u32,
    pub height: u32,
}

impl DimensionSpec {
    /// Parse a `<W>x<H>` token.
    ///
    /// The separator (`x` or `X`) must appear at a position > 0 and both
    /// sides must parse as unsigned integers:
    /// - `"640x480"` → width=640, height=480
    /// - `"0X0"` → width=0, height=0 (fully auto)
    /// - `"x480"`, `"640x"`, `"640-480"`, `"ax480"` → `None`
    pub fn parse(token: &str) -> Option<Self> {
        let pos = token.find(['x', 'X'])?;
        if pos == 0 {
            return None;
        }
        let width = token[..pos].parse().ok()?;
        let height = token[pos + 1..].parse().ok()?;
        Some(Self { width, height })
    }
}

/// A filter name plus repeat count parsed from a `<name>[(<k>)]` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Name literal as written, before registry resolution.
    pub name: String,
    /// Number of sequential applications, always ≥ 1.
    pub repeat: u32,
}

impl FilterSpec {
    /// Parse a filter token.
    ///
    /// A trailing `(...)` whose content is an integer ≥ 1 sets the repeat
    /// count; anything else — no suffix, unparsable content, a count below 1,
    /// or a missing closing parenthesis — yields a count of 1. A bad repeat
    /// suffix is deliberately not a usage error:
    /// - `"lanczos"` → name="lanczos", repeat=1
    /// - `"scale2x(3)"` → name="scale2x", repeat=3
    /// - `"pixel(0)"`, `"pixel(abc)"`, `"pixel(3"` → repeat=1
    pub fn parse(token: &str) -> Self {
        if let Some(body) = token.strip_suffix(')') {
            if let Some((name, count)) = body.split_once('(') {
                let repeat = count.parse::<u32>().ok().filter(|&k| k >= 1).unwrap_or(1);
                return Self {
                    name: name.to_string(),
                    repeat,
                };
            }
        }
        Self {
            name: token.to_string(),
            repeat: 1,
        }
    }
}
