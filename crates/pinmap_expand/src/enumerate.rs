//! Bounded enumeration of the finite language described by a regex pattern.
//!
//! Patterns are parsed to a HIR with `regex-syntax` and walked bottom-up.
//! Only constructs describing a finite language are accepted: literals,
//! character classes, groups, alternations, and repetitions with an upper
//! bound. Unbounded quantifiers, look-arounds, and anchors are rejected,
//! and the total number of enumerated strings is capped by
//! [`MAX_EXPANSION`].

use regex_syntax::hir::{Class, Hir, HirKind};
use regex_syntax::Parser;

use crate::error::ExpandError;

/// Hard cap on the number of strings one pattern may enumerate.
pub const MAX_EXPANSION: usize = 4096;

/// Enumerates every string matched by `pattern`, in pattern order.
///
/// The result is unsorted; callers pair key and end lists only after
/// natural-sorting both.
pub fn enumerate_pattern(pattern: &str) -> Result<Vec<String>, ExpandError> {
    let hir = Parser::new()
        .parse(pattern)
        .map_err(|e| ExpandError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
    walk(&hir, pattern)
}

fn walk(hir: &Hir, pattern: &str) -> Result<Vec<String>, ExpandError> {
    match hir.kind() {
        HirKind::Empty => Ok(vec![String::new()]),
        HirKind::Literal(lit) => {
            let s = std::str::from_utf8(&lit.0)
                .map_err(|_| unsupported(pattern, "non-UTF-8 literal"))?;
            Ok(vec![s.to_string()])
        }
        HirKind::Class(Class::Unicode(class)) => {
            let mut out = Vec::new();
            for range in class.ranges() {
                let span = (range.end() as u32 - range.start() as u32) as usize + 1;
                if out.len() + span > MAX_EXPANSION {
                    return Err(over_limit(pattern));
                }
                for cp in range.start() as u32..=range.end() as u32 {
                    if let Some(c) = char::from_u32(cp) {
                        out.push(c.to_string());
                    }
                }
            }
            Ok(out)
        }
        HirKind::Class(Class::Bytes(_)) => {
            Err(unsupported(pattern, "byte-oriented character class"))
        }
        HirKind::Look(_) => Err(unsupported(pattern, "look-around or anchor")),
        HirKind::Capture(capture) => walk(&capture.sub, pattern),
        HirKind::Repetition(rep) => {
            let max = rep.max.ok_or_else(|| ExpandError::UnboundedPattern {
                pattern: pattern.to_string(),
            })?;
            let base = walk(&rep.sub, pattern)?;
            let mut out = Vec::new();
            for count in rep.min..=max {
                let mut combos = vec![String::new()];
                for _ in 0..count {
                    combos = product(&combos, &base, pattern)?;
                }
                if out.len() + combos.len() > MAX_EXPANSION {
                    return Err(over_limit(pattern));
                }
                out.extend(combos);
            }
            Ok(out)
        }
        HirKind::Concat(parts) => {
            let mut out = vec![String::new()];
            for part in parts {
                let next = walk(part, pattern)?;
                out = product(&out, &next, pattern)?;
            }
            Ok(out)
        }
        HirKind::Alternation(alternatives) => {
            let mut out = Vec::new();
            for alternative in alternatives {
                let next = walk(alternative, pattern)?;
                if out.len() + next.len() > MAX_EXPANSION {
                    return Err(over_limit(pattern));
                }
                out.extend(next);
            }
            Ok(out)
        }
    }
}

/// Cross product of two enumerated lists, capped at [`MAX_EXPANSION`].
fn product(lhs: &[String], rhs: &[String], pattern: &str) -> Result<Vec<String>, ExpandError> {
    let len = lhs
        .len()
        .checked_mul(rhs.len())
        .filter(|&n| n <= MAX_EXPANSION)
        .ok_or_else(|| over_limit(pattern))?;
    let mut out = Vec::with_capacity(len);
    for a in lhs {
        for b in rhs {
            out.push(format!("{a}{b}"));
        }
    }
    Ok(out)
}

fn unsupported(pattern: &str, construct: &str) -> ExpandError {
    ExpandError::UnsupportedPattern {
        pattern: pattern.to_string(),
        construct: construct.to_string(),
    }
}

fn over_limit(pattern: &str) -> ExpandError {
    ExpandError::ExpansionLimit {
        pattern: pattern.to_string(),
        limit: MAX_EXPANSION,
    }
}
