//! Route pattern compilation and path matching.
//!
//! Patterns are either exact (`/invoices`) or cover a subtree (`/students/*`
//! matches `/students` and everything beneath it). Matching is done on whole
//! segments, so `/students/*` never matches `/studentsx`.

use encore_core::error::{EncoreError, Result};

/// Rank of a pattern. Higher wins when several rules match one path.
///
/// Ordered by literal segment count first, then exact over subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub literal_segments: usize,
    pub exact: bool,
}

/// Compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<String>,
    descendants: bool,
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self> {
        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| invalid(raw, "must start with '/'"))?;

        // "/*" covers everything; "/a/b/*" covers /a/b and below.
        let (body, descendants) = if rest == "*" {
            (None, true)
        } else if let Some(b) = rest.strip_suffix("/*") {
            (Some(b), true)
        } else if rest.is_empty() {
            (None, false)
        } else {
            (Some(rest), false)
        };

        let mut segments = Vec::new();
        if let Some(body) = body {
            for seg in body.split('/') {
                check_pattern_segment(raw, seg)?;
                segments.push(seg.to_string());
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
            descendants,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_descendants(&self) -> bool {
        self.descendants
    }

    pub fn specificity(&self) -> Specificity {
        Specificity {
            literal_segments: self.segments.len(),
            exact: !self.descendants,
        }
    }

    /// Match against a path already split by [`normalize_path`].
    pub fn matches(&self, path: &[&str]) -> bool {
        if self.descendants {
            path.len() >= self.segments.len()
                && self.segments.iter().zip(path).all(|(p, s)| p == s)
        } else {
            path.len() == self.segments.len()
                && self.segments.iter().zip(path).all(|(p, s)| p == s)
        }
    }
}

fn check_pattern_segment(raw: &str, seg: &str) -> Result<()> {
    if seg.is_empty() {
        return Err(invalid(raw, "empty path segment"));
    }
    if seg == "." || seg == ".." {
        return Err(invalid(raw, "relative path segment"));
    }
    if seg.contains('*') {
        return Err(invalid(raw, "wildcard is only allowed as a trailing '/*'"));
    }
    if seg.contains(['?', '#']) {
        return Err(invalid(raw, "query or fragment in pattern"));
    }
    if seg.chars().any(char::is_whitespace) {
        return Err(invalid(raw, "whitespace in pattern"));
    }
    Ok(())
}

fn invalid(raw: &str, reason: &'static str) -> EncoreError {
    EncoreError::InvalidPattern {
        pattern: raw.to_string(),
        reason,
    }
}

/// Split a concrete route into segments.
///
/// Query string and fragment are dropped, as is a single trailing `/`.
/// Returns `None` for anything that is not a well-formed absolute path;
/// callers treat that as a non-match.
pub fn normalize_path(path: &str) -> Option<Vec<&str>> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];

    let rest = path.strip_prefix('/')?;
    let rest = match rest.strip_suffix('/') {
        Some("") => return None, // "//"
        Some(r) => r,
        None => rest,
    };
    if rest.is_empty() {
        return Some(Vec::new());
    }

    let mut out = Vec::new();
    for seg in rest.split('/') {
        if seg.is_empty() || seg == "." || seg == ".." {
            return None;
        }
        if seg.chars().any(char::is_whitespace) {
            return None;
        }
        out.push(seg);
    }
    Some(out)
}
