//! Heuristic detection of catastrophic backtracking
//!
//! The `regex` crate matches in linear time, so these checks matter for
//! patterns that will also run on backtracking engines (PCRE, JavaScript,
//! Python). The scanner is structural: it does not compile the pattern and
//! only understands enough syntax to find groups, quantifiers, alternations
//! and character classes.

use crate::error::{common, Result};
use crate::guards::ensure_non_empty;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Shape of a pattern fragment known to blow up on backtracking engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskKind {
    /// A repeated group that itself contains a repetition, e.g. `(a+)+`
    NestedQuantifier,
    /// A repeated group whose alternatives overlap, e.g. `(a|ab)*`
    OverlappingAlternation,
    /// Wildcards competing for the same input, e.g. `.*.*`
    AdjacentWildcards,
}

impl fmt::Display for RiskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NestedQuantifier => "nested quantifier",
            Self::OverlappingAlternation => "overlapping alternation",
            Self::AdjacentWildcards => "adjacent wildcards",
        };
        f.write_str(text)
    }
}

/// One finding, located by the byte offset of the offending group or token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BacktrackingRisk {
    pub kind: RiskKind,
    pub offset: usize,
}

impl fmt::Display for BacktrackingRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.offset)
    }
}

/// Whether `pattern` shows any known catastrophic backtracking shape
///
/// ```
/// use toolbelt::regexp::has_catastrophic_backtracking;
///
/// assert!(has_catastrophic_backtracking(r"^(a+)+$").unwrap());
/// assert!(!has_catastrophic_backtracking(r"^[a-z]+\d*$").unwrap());
/// ```
pub fn has_catastrophic_backtracking(pattern: &str) -> Result<bool> {
    Ok(!analyze_backtracking(pattern)?.is_empty())
}

struct OpenGroup {
    offset: usize,
    body_start: usize,
    /// Byte offsets of `|` directly inside this group
    splits: Vec<usize>,
    has_repetition: bool,
}

struct Quantifier {
    unbounded: bool,
    next: usize,
}

/// Every risk found in `pattern`, ordered by offset
pub fn analyze_backtracking(pattern: &str) -> Result<Vec<BacktrackingRisk>> {
    ensure_non_empty("pattern", pattern)?;
    let chars: Vec<(usize, char)> = pattern.char_indices().collect();
    let byte_at = |index: usize| chars.get(index).map_or(pattern.len(), |(b, _)| *b);

    let mut risks = Vec::new();
    let mut stack: Vec<OpenGroup> = Vec::new();
    let mut previous_wildcard: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];
        let atom_end = match c {
            '(' => {
                let body = group_body_start(&chars, i);
                stack.push(OpenGroup {
                    offset,
                    body_start: byte_at(body),
                    splits: Vec::new(),
                    has_repetition: false,
                });
                previous_wildcard = None;
                i = body;
                continue;
            }
            '|' => {
                if let Some(group) = stack.last_mut() {
                    group.splits.push(offset);
                }
                previous_wildcard = None;
                i += 1;
                continue;
            }
            ')' => {
                let group = stack.pop().ok_or_else(|| {
                    common::invalid_pattern(
                        "pattern",
                        format!("unmatched ')' at offset {}", offset),
                    )
                })?;
                let quantifier = quantifier_at(&chars, i + 1);
                let repeated = quantifier.as_ref().is_some_and(|q| q.unbounded);

                if repeated && group.has_repetition {
                    risks.push(BacktrackingRisk {
                        kind: RiskKind::NestedQuantifier,
                        offset: group.offset,
                    });
                }
                if repeated && alternatives_overlap(pattern, &group, offset) {
                    risks.push(BacktrackingRisk {
                        kind: RiskKind::OverlappingAlternation,
                        offset: group.offset,
                    });
                }
                if let Some(parent) = stack.last_mut() {
                    parent.has_repetition |= group.has_repetition || repeated;
                }

                previous_wildcard = None;
                i = quantifier.map_or(i + 1, |q| q.next);
                continue;
            }
            '\\' => {
                if i + 1 >= chars.len() {
                    return Err(common::invalid_pattern(
                        "pattern",
                        "trailing backslash",
                    ));
                }
                i + 2
            }
            '[' => class_end(&chars, i)?,
            _ => i + 1,
        };

        let quantifier = quantifier_at(&chars, atom_end);
        let repeated = quantifier.as_ref().is_some_and(|q| q.unbounded);
        if repeated {
            if let Some(group) = stack.last_mut() {
                group.has_repetition = true;
            }
        }

        let is_wildcard = c == '.'
            && atom_end == i + 1
            && matches!(chars.get(atom_end), Some((_, '*' | '+')));
        if is_wildcard {
            if let Some(first) = previous_wildcard {
                risks.push(BacktrackingRisk {
                    kind: RiskKind::AdjacentWildcards,
                    offset: first,
                });
            }
            previous_wildcard = Some(offset);
        } else {
            previous_wildcard = None;
        }

        i = quantifier.map_or(atom_end, |q| q.next);
    }

    if let Some(open) = stack.last() {
        return Err(common::invalid_pattern(
            "pattern",
            format!("unclosed '(' at offset {}", open.offset),
        ));
    }

    risks.sort_by_key(|risk| risk.offset);
    if !risks.is_empty() {
        debug!(pattern, risks = risks.len(), "Backtracking risks detected");
    }
    Ok(risks)
}

/// Index of the first character of a group's body, past any `?:`-style prefix
fn group_body_start(chars: &[(usize, char)], open: usize) -> usize {
    let at = |index: usize| chars.get(index).map(|(_, c)| *c);
    let mut j = open + 1;
    if at(j) != Some('?') {
        return j;
    }
    j += 1;
    match at(j) {
        Some('=' | '!') => j + 1,
        Some('<') if matches!(at(j + 1), Some('=' | '!')) => j + 2,
        Some('P' | '<') => {
            while j < chars.len() && chars[j].1 != '>' {
                j += 1;
            }
            (j + 1).min(chars.len())
        }
        _ => {
            // Inline flags: `(?i)` has an empty body, `(?i:...)` a real one
            while j < chars.len() && !matches!(chars[j].1, ':' | ')') {
                j += 1;
            }
            if at(j) == Some(':') {
                j + 1
            } else {
                j
            }
        }
    }
}

/// Index just past the `]` closing the class opened at `open`
fn class_end(chars: &[(usize, char)], open: usize) -> Result<usize> {
    let mut j = open + 1;
    if matches!(chars.get(j), Some((_, '^'))) {
        j += 1;
    }
    // A leading `]` is a literal
    if matches!(chars.get(j), Some((_, ']'))) {
        j += 1;
    }

    let mut depth = 1;
    while j < chars.len() {
        match chars[j].1 {
            '\\' => j += 1,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(j + 1);
                }
            }
            _ => {}
        }
        j += 1;
    }
    Err(common::invalid_pattern(
        "pattern",
        format!("unclosed character class at offset {}", chars[open].0),
    ))
}

fn quantifier_at(chars: &[(usize, char)], index: usize) -> Option<Quantifier> {
    let (unbounded, next) = match chars.get(index)?.1 {
        '*' | '+' => (true, index + 1),
        '?' => (false, index + 1),
        '{' => {
            let close = chars[index..].iter().position(|(_, c)| *c == '}')? + index;
            let body: String = chars[index + 1..close].iter().map(|(_, c)| *c).collect();
            (counted_repetition_is_unbounded(&body)?, close + 1)
        }
        _ => return None,
    };
    // Lazy suffix
    let next = if matches!(chars.get(next), Some((_, '?'))) {
        next + 1
    } else {
        next
    };
    Some(Quantifier { unbounded, next })
}

/// `{n}` is bounded, `{n,}` unbounded, `{n,m}` repeats when `m > 1`; `None` if malformed
fn counted_repetition_is_unbounded(body: &str) -> Option<bool> {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match body.split_once(',') {
        None if digits(body) => Some(false),
        Some((min, "")) if digits(min) => Some(true),
        Some((min, max)) if digits(min) && digits(max) => {
            Some(max.parse::<u64>().map_or(true, |m| m > 1))
        }
        _ => None,
    }
}

fn alternatives_overlap(pattern: &str, group: &OpenGroup, close: usize) -> bool {
    if group.splits.is_empty() {
        return false;
    }
    let mut alternatives = Vec::with_capacity(group.splits.len() + 1);
    let mut start = group.body_start;
    for split in &group.splits {
        alternatives.push(&pattern[start..*split]);
        start = split + 1;
    }
    alternatives.push(&pattern[start..close]);

    alternatives.iter().enumerate().any(|(i, a)| {
        alternatives[i + 1..]
            .iter()
            .any(|b| a.starts_with(*b) || b.starts_with(*a))
    })
}
