//! Renderer
//!
//! Turns a validated [`ConfigValue`] into the compose and env documents.
//! Each document is a fixed table of blocks; a block is emitted only when its
//! [`Gate`] holds. Cross-references between services are resolved once per
//! render call into [`References`], so every block sees the same URLs.
//!
//! Rendering is pure: no clock, no randomness, no I/O.

mod compose;
mod document;
mod env;
mod escaping;

pub use compose::{expected_containers, render_compose};
pub use document::{interpolations, Block, RenderedDocument};
pub use env::render_env;

use crate::domain::registry::keys;
use crate::domain::value_objects::ConfigValue;
use crate::error::{DeckhandError, DeckhandResult};

/// Port Ollama listens on inside its container
pub const OLLAMA_CONTAINER_PORT: u16 = 11434;
/// Port SearXNG listens on inside its container
pub const SEARXNG_CONTAINER_PORT: u16 = 8080;
/// Port Open WebUI listens on inside its container
pub const WEBUI_CONTAINER_PORT: u16 = 8080;
pub const REDIS_CONTAINER_PORT: u16 = 6379;

/// Condition under which a block is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    /// Boolean option is on
    Flag(&'static str),
    /// Option's canonical token equals the value
    Is(&'static str, &'static str),
    All(&'static [Gate]),
    Any(&'static [Gate]),
}

impl Gate {
    pub fn eval(&self, cv: &ConfigValue) -> bool {
        match self {
            Self::Always => true,
            Self::Flag(key) => cv.flag(key),
            Self::Is(key, value) => cv.is(key, value),
            Self::All(gates) => gates.iter().all(|g| g.eval(cv)),
            Self::Any(gates) => gates.iter().any(|g| g.eval(cv)),
        }
    }

    /// Every key the gate reads, in declaration order
    pub fn keys(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        self.collect_keys(&mut out);
        out
    }

    fn collect_keys(&self, out: &mut Vec<&'static str>) {
        match self {
            Self::Always => {}
            Self::Flag(key) | Self::Is(key, _) => {
                if !out.contains(key) {
                    out.push(*key);
                }
            }
            Self::All(gates) | Self::Any(gates) => {
                for gate in gates.iter() {
                    gate.collect_keys(out);
                }
            }
        }
    }
}

/// Inputs every block body can read
pub struct RenderContext<'a> {
    pub config: &'a ConfigValue,
    pub refs: &'a References,
}

/// Static description of one block in a document table
pub(crate) struct BlockSpec {
    pub id: &'static str,
    pub gate: Gate,
    /// Keys whose values the body prints
    pub keys: &'static [&'static str],
    pub body: fn(&RenderContext<'_>) -> Vec<String>,
}

pub(crate) fn assemble(specs: &[BlockSpec], ctx: &RenderContext<'_>) -> RenderedDocument {
    let blocks = specs
        .iter()
        .filter(|spec| spec.gate.eval(ctx.config))
        .map(|spec| {
            let mut sources = spec.gate.keys();
            for key in spec.keys {
                if !sources.contains(key) {
                    sources.push(*key);
                }
            }
            Block {
                id: spec.id,
                sources,
                lines: (spec.body)(ctx),
            }
        })
        .collect();
    RenderedDocument::new(blocks)
}

/// Service-to-service URLs, resolved once per render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct References {
    pub ollama_base_url: String,
    /// Present when web search uses SearXNG
    pub searxng_query_url: Option<String>,
    /// Present when websocket support is on
    pub redis_url: Option<String>,
}

impl References {
    pub fn resolve(cv: &ConfigValue) -> DeckhandResult<Self> {
        let ollama_base_url = if cv.flag(keys::OLLAMA_ENABLED) {
            format!("http://ollama:{}", OLLAMA_CONTAINER_PORT)
        } else {
            let url = cv.text(keys::OLLAMA_URL).trim();
            if url.is_empty() {
                return Err(DeckhandError::Render {
                    block: "ollama".to_string(),
                    message: format!(
                        "{} is off and {} is empty",
                        keys::OLLAMA_ENABLED,
                        keys::OLLAMA_URL
                    ),
                });
            }
            url.to_string()
        };

        let searxng_query_url =
            if cv.flag(keys::SEARCH_ENABLED) && cv.is(keys::SEARCH_ENGINE, "searxng") {
                let base = if cv.flag(keys::SEARXNG_ENABLED) {
                    format!("http://searxng:{}", SEARXNG_CONTAINER_PORT)
                } else {
                    let url = cv.text(keys::SEARXNG_URL).trim().trim_end_matches('/');
                    if url.is_empty() {
                        return Err(DeckhandError::Render {
                            block: "search".to_string(),
                            message: format!(
                                "search engine is searxng but {} is off and {} is empty",
                                keys::SEARXNG_ENABLED,
                                keys::SEARXNG_URL
                            ),
                        });
                    }
                    url.to_string()
                };
                Some(format!("{}/search?q=<query>", base))
            } else {
                None
            };

        let redis_url = if cv.flag(keys::WEBSOCKET_ENABLED) {
            if !cv.flag(keys::REDIS_ENABLED) {
                return Err(DeckhandError::Render {
                    block: "websocket".to_string(),
                    message: format!(
                        "{} needs {} to be on",
                        keys::WEBSOCKET_ENABLED,
                        keys::REDIS_ENABLED
                    ),
                });
            }
            Some(format!("redis://redis:{}/0", REDIS_CONTAINER_PORT))
        } else {
            None
        };

        Ok(Self {
            ollama_base_url,
            searxng_query_url,
            redis_url,
        })
    }
}

/// Both documents of one render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub compose: RenderedDocument,
    pub env: RenderedDocument,
}

/// Render both documents from a single reference resolution
pub fn render_all(cv: &ConfigValue) -> DeckhandResult<RenderedArtifacts> {
    let refs = References::resolve(cv)?;
    let ctx = RenderContext {
        config: cv,
        refs: &refs,
    };
    Ok(RenderedArtifacts {
        compose: compose::assemble_compose(&ctx),
        env: env::assemble_env(&ctx),
    })
}

/// Service names declared by a compose document, in document order
pub fn compose_services(text: &str) -> DeckhandResult<Vec<String>> {
    let malformed = |message: String| DeckhandError::Render {
        block: "compose".to_string(),
        message,
    };
    let doc: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(text).map_err(|e| malformed(e.to_string()))?;
    let services = doc
        .get("services")
        .and_then(|s| s.as_mapping())
        .ok_or_else(|| malformed("no services mapping".to_string()))?;
    Ok(services
        .keys()
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}
