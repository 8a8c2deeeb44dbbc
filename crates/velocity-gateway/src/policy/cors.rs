//! Cross-origin response policy.
//!
//! Applied uniformly to every response the dispatcher produces, including
//! not-found and preflight responses. Only the allow-origin value depends on
//! the request, and only when an explicit origin list is configured.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_EXPOSE_HEADERS, ACCESS_CONTROL_MAX_AGE, VARY,
};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method};

use velocity_core::error::{Result, VelocityError};

use crate::config::CorsConfig;

#[derive(Debug, Clone)]
enum OriginRule {
    Any,
    List(Vec<HeaderValue>),
}

/// Compiled CORS policy. Construct once at startup, then share via Arc.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origins: OriginRule,
    allow_methods: HeaderValue,
    allow_headers: Option<HeaderValue>,
    expose_headers: Option<HeaderValue>,
    allow_credentials: bool,
    max_age: HeaderValue,
}

impl CorsPolicy {
    pub fn new(cfg: &CorsConfig) -> Result<Self> {
        let origins = if cfg.allowed_origins.iter().any(|o| o == "*") {
            OriginRule::Any
        } else {
            let list = cfg
                .allowed_origins
                .iter()
                .map(|o| {
                    HeaderValue::from_str(o).map_err(|_| {
                        VelocityError::BadRequest(format!("invalid cors origin: {o}"))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            OriginRule::List(list)
        };

        let methods = cfg
            .allowed_methods
            .iter()
            .map(|m| {
                let upper = m.to_ascii_uppercase();
                Method::from_bytes(upper.as_bytes())
                    .map(|_| upper)
                    .map_err(|_| VelocityError::BadRequest(format!("invalid cors method: {m}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            origins,
            allow_methods: join_value(&methods, "allowed_methods")?
                .ok_or_else(|| VelocityError::BadRequest("cors.allowed_methods is empty".into()))?,
            allow_headers: join_header_names(&cfg.allowed_headers, "allowed_headers")?,
            expose_headers: join_header_names(&cfg.exposed_headers, "exposed_headers")?,
            allow_credentials: cfg.allow_credentials,
            max_age: HeaderValue::from(cfg.max_age_secs),
        })
    }

    /// Write the policy headers onto `headers`.
    pub fn apply(&self, origin: Option<&HeaderValue>, headers: &mut HeaderMap) {
        match &self.origins {
            OriginRule::Any => {
                headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
            }
            OriginRule::List(list) => {
                headers.append(VARY, HeaderValue::from_static("Origin"));
                if let Some(o) = origin.filter(|o| list.contains(o)) {
                    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, o.clone());
                }
            }
        }

        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());
        if let Some(v) = &self.allow_headers {
            headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, v.clone());
        }
        if let Some(v) = &self.expose_headers {
            headers.insert(ACCESS_CONTROL_EXPOSE_HEADERS, v.clone());
        }
        if self.allow_credentials {
            headers.insert(
                ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            );
        }
        headers.insert(ACCESS_CONTROL_MAX_AGE, self.max_age.clone());
    }
}

fn join_header_names(names: &[String], field: &str) -> Result<Option<HeaderValue>> {
    for n in names {
        HeaderName::from_bytes(n.as_bytes())
            .map_err(|_| VelocityError::BadRequest(format!("invalid cors.{field} entry: {n}")))?;
    }
    join_value(names, field)
}

fn join_value(items: &[String], field: &str) -> Result<Option<HeaderValue>> {
    if items.is_empty() {
        return Ok(None);
    }
    HeaderValue::from_str(&items.join(","))
        .map(Some)
        .map_err(|_| VelocityError::BadRequest(format!("invalid cors.{field}")))
}
