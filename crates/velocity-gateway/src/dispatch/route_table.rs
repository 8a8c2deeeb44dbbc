//! Static route table.
//!
//! Built once at startup with `register`, then moved into the dispatcher and
//! only read from. Patterns are `/`-separated; at most one segment may be a
//! `{name}` parameter, which matches any non-empty path segment.
//!
//! The bound parameter is percent-decoded when the request spelled it in
//! canonical form, mirroring how Go's `net/url` picks between `Path` and
//! `RawPath`. Non-canonical spellings (`%2F`, `%41`, lowercase hex, invalid
//! UTF-8) are bound raw.

use std::sync::Arc;

use axum::http::Method;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use velocity_core::error::{Result, VelocityError};

use super::dispatcher::RouteHandler;

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Param(String),
}

pub struct Route {
    method: Method,
    pattern: String,
    segments: Vec<Segment>,
    handler: Arc<dyn RouteHandler>,
}

impl Route {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn handler(&self) -> Arc<dyn RouteHandler> {
        Arc::clone(&self.handler)
    }
}

/// A matched route plus the bound parameter, if the pattern has one.
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub param: Option<(&'a str, String)>,
}

#[derive(Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn register(
        &mut self,
        method: Method,
        pattern: &str,
        handler: Arc<dyn RouteHandler>,
    ) -> Result<()> {
        let segments = compile_pattern(pattern)?;
        if self
            .routes
            .iter()
            .any(|r| r.method == method && same_shape(&r.segments, &segments))
        {
            return Err(VelocityError::BadRequest(format!(
                "duplicate route: {method} {pattern}"
            )));
        }
        self.routes.push(Route {
            method,
            pattern: pattern.to_string(),
            segments,
            handler,
        });
        Ok(())
    }

    /// First route whose method equals `method` and whose pattern matches `path`.
    pub fn find(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        let parts = split_path(path)?;
        self.routes
            .iter()
            .filter(|r| r.method == *method)
            .find_map(|r| match_segments(&r.segments, &parts).map(|param| RouteMatch { route: r, param }))
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

}

fn compile_pattern(pattern: &str) -> Result<Vec<Segment>> {
    let parts = split_path(pattern).ok_or_else(|| {
        VelocityError::BadRequest(format!("route pattern must start with '/': {pattern}"))
    })?;

    let mut segments = Vec::with_capacity(parts.len());
    let mut params = 0;
    for p in parts {
        if let Some(inner) = p.strip_prefix('{') {
            let name = inner.strip_suffix('}').ok_or_else(|| {
                VelocityError::BadRequest(format!("unterminated parameter in pattern: {pattern}"))
            })?;
            if name.is_empty() || name.contains(&['{', '}'][..]) {
                return Err(VelocityError::BadRequest(format!(
                    "invalid parameter name in pattern: {pattern}"
                )));
            }
            params += 1;
            segments.push(Segment::Param(name.to_string()));
        } else if p.contains(&['{', '}'][..]) {
            return Err(VelocityError::BadRequest(format!(
                "parameter must span a whole segment: {pattern}"
            )));
        } else {
            segments.push(Segment::Literal(p.to_string()));
        }
    }

    if params > 1 {
        return Err(VelocityError::BadRequest(format!(
            "at most one parameter segment is supported: {pattern}"
        )));
    }
    Ok(segments)
}

/// Parameter names do not distinguish routes: `/u/{id}` and `/u/{name}` collide.
fn same_shape(a: &[Segment], b: &[Segment]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|pair| match pair {
            (Segment::Literal(x), Segment::Literal(y)) => x == y,
            (Segment::Param(_), Segment::Param(_)) => true,
            _ => false,
        })
}

/// `"/"` -> `[]`, `"/a/b"` -> `["a", "b"]`, `"/a/"` -> `["a", ""]`.
fn split_path(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(Vec::new());
    }
    Some(rest.split('/').collect())
}

/// `None` on mismatch, `Some(param)` on match.
fn match_segments<'a>(segments: &'a [Segment], parts: &[&str]) -> Option<Option<(&'a str, String)>> {
    if segments.len() != parts.len() {
        return None;
    }
    let mut param = None;
    for (seg, part) in segments.iter().zip(parts) {
        match seg {
            Segment::Literal(lit) if lit == part => {}
            Segment::Literal(_) => return None,
            Segment::Param(_) if part.is_empty() => return None,
            Segment::Param(name) => param = Some((name.as_str(), decode_param(part))),
        }
    }
    Some(param)
}

/// Characters left unescaped in a canonical path.
const PATH_KEEP: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'@');

fn decode_param(raw: &str) -> String {
    if !raw.contains('%') {
        return raw.to_string();
    }
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) if utf8_percent_encode(&decoded, PATH_KEEP).to_string() == raw => {
            decoded.into_owned()
        }
        _ => raw.to_string(),
    }
}
