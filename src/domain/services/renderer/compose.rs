//! `docker-compose.yml` block table
//!
//! Host port mappings and service-to-service URLs are written literally.
//! Images, data directories and resource limits are `${VAR}` references
//! resolved from the env document, which defines each of them under the
//! same gate as the block that uses it.

use super::escaping::escape_compose;
use super::{
    assemble, BlockSpec, Gate, RenderContext, RenderedDocument, References,
    OLLAMA_CONTAINER_PORT, REDIS_CONTAINER_PORT, SEARXNG_CONTAINER_PORT, WEBUI_CONTAINER_PORT,
};
use crate::domain::registry::keys;
use crate::domain::value_objects::ConfigValue;
use crate::error::DeckhandResult;

pub const HEADER: &str = "# Generated by deckhand. Edit deckhand.toml and run `deckhand render`.";

const SEARXNG_IMAGE: &str = "searxng/searxng:latest";
const REDIS_IMAGE: &str = "redis:7-alpine";

const OLLAMA_ON: Gate = Gate::Flag(keys::OLLAMA_ENABLED);
const SEARXNG_ON: Gate = Gate::All(&[
    Gate::Flag(keys::SEARCH_ENABLED),
    Gate::Flag(keys::SEARXNG_ENABLED),
]);
const REDIS_ON: Gate = Gate::Flag(keys::REDIS_ENABLED);

static COMPOSE_BLOCKS: &[BlockSpec] = &[
    BlockSpec {
        id: "header",
        gate: Gate::Always,
        keys: &[],
        body: header,
    },
    BlockSpec {
        id: "webui",
        gate: Gate::Always,
        keys: &[keys::WEBUI_PORT, keys::OLLAMA_URL],
        body: webui,
    },
    BlockSpec {
        id: "webui-searxng-env",
        gate: Gate::All(&[
            Gate::Flag(keys::SEARCH_ENABLED),
            Gate::Is(keys::SEARCH_ENGINE, "searxng"),
        ]),
        keys: &[keys::SEARXNG_ENABLED, keys::SEARXNG_URL],
        body: webui_searxng_env,
    },
    BlockSpec {
        id: "webui-websocket-env",
        gate: Gate::Flag(keys::WEBSOCKET_ENABLED),
        keys: &[keys::REDIS_ENABLED],
        body: webui_websocket_env,
    },
    BlockSpec {
        id: "webui-depends-on",
        gate: Gate::Any(&[OLLAMA_ON, SEARXNG_ON, REDIS_ON]),
        keys: &[],
        body: webui_depends_on,
    },
    BlockSpec {
        id: "webui-host-gateway",
        gate: Gate::Is(keys::OLLAMA_ENABLED, "false"),
        keys: &[],
        body: webui_host_gateway,
    },
    BlockSpec {
        id: "webui-limits",
        gate: Gate::Flag(keys::WEBUI_RESOURCE_LIMITS),
        keys: &[keys::WEBUI_MEMORY_LIMIT, keys::WEBUI_CPU_LIMIT],
        body: webui_limits,
    },
    BlockSpec {
        id: "ollama",
        gate: OLLAMA_ON,
        keys: &[keys::OLLAMA_PORT, keys::OLLAMA_IMAGE, keys::OLLAMA_MODELS_DIR],
        body: ollama,
    },
    BlockSpec {
        id: "ollama-gpu",
        gate: Gate::All(&[OLLAMA_ON, Gate::Flag(keys::OLLAMA_GPU)]),
        keys: &[],
        body: ollama_gpu,
    },
    BlockSpec {
        id: "searxng",
        gate: SEARXNG_ON,
        keys: &[keys::SEARXNG_PORT],
        body: searxng,
    },
    BlockSpec {
        id: "redis",
        gate: REDIS_ON,
        keys: &[keys::REDIS_PORT],
        body: redis,
    },
];

pub fn render_compose(cv: &ConfigValue) -> DeckhandResult<RenderedDocument> {
    let refs = References::resolve(cv)?;
    Ok(assemble_compose(&RenderContext {
        config: cv,
        refs: &refs,
    }))
}

pub(super) fn assemble_compose(ctx: &RenderContext<'_>) -> RenderedDocument {
    assemble(COMPOSE_BLOCKS, ctx)
}

fn port_mapping(host: i64, container: u16) -> String {
    format!("\"{}:{}\"", host, container)
}

fn env_item(name: &str, value: &str) -> String {
    format!("      - {}", escape_compose(&format!("{}={}", name, value)))
}

fn header(_: &RenderContext<'_>) -> Vec<String> {
    vec![HEADER.to_string(), "services:".to_string()]
}

fn webui(ctx: &RenderContext<'_>) -> Vec<String> {
    let port = ctx.config.int(keys::WEBUI_PORT).unwrap_or_default();
    vec![
        "  open-webui:".to_string(),
        "    image: ${WEBUI_IMAGE}".to_string(),
        "    container_name: open-webui".to_string(),
        "    restart: unless-stopped".to_string(),
        "    ports:".to_string(),
        format!("      - {}", port_mapping(port, WEBUI_CONTAINER_PORT)),
        "    volumes:".to_string(),
        "      - ${WEBUI_DATA_DIR}:/app/backend/data".to_string(),
        "    env_file:".to_string(),
        "      - .env".to_string(),
        "    environment:".to_string(),
        env_item("OLLAMA_BASE_URL", &ctx.refs.ollama_base_url),
    ]
}

fn webui_searxng_env(ctx: &RenderContext<'_>) -> Vec<String> {
    ctx.refs
        .searxng_query_url
        .iter()
        .map(|url| env_item("SEARXNG_QUERY_URL", url))
        .collect()
}

fn webui_websocket_env(ctx: &RenderContext<'_>) -> Vec<String> {
    ctx.refs
        .redis_url
        .iter()
        .map(|url| env_item("WEBSOCKET_REDIS_URL", url))
        .collect()
}

fn webui_depends_on(ctx: &RenderContext<'_>) -> Vec<String> {
    let mut lines = vec!["    depends_on:".to_string()];
    for (gate, service) in [(OLLAMA_ON, "ollama"), (SEARXNG_ON, "searxng"), (REDIS_ON, "redis")] {
        if gate.eval(ctx.config) {
            lines.push(format!("      - {}", service));
        }
    }
    lines
}

fn webui_host_gateway(_: &RenderContext<'_>) -> Vec<String> {
    vec![
        "    extra_hosts:".to_string(),
        "      - \"host.docker.internal:host-gateway\"".to_string(),
    ]
}

fn webui_limits(_: &RenderContext<'_>) -> Vec<String> {
    vec![
        "    deploy:".to_string(),
        "      resources:".to_string(),
        "        limits:".to_string(),
        "          memory: ${WEBUI_MEMORY_LIMIT}".to_string(),
        "          cpus: \"${WEBUI_CPU_LIMIT}\"".to_string(),
    ]
}

fn ollama(ctx: &RenderContext<'_>) -> Vec<String> {
    let port = ctx.config.int(keys::OLLAMA_PORT).unwrap_or_default();
    vec![
        "  ollama:".to_string(),
        "    image: ${OLLAMA_IMAGE}".to_string(),
        "    container_name: ollama".to_string(),
        "    restart: unless-stopped".to_string(),
        "    ports:".to_string(),
        format!("      - {}", port_mapping(port, OLLAMA_CONTAINER_PORT)),
        "    volumes:".to_string(),
        "      - ${OLLAMA_MODELS_DIR}:/root/.ollama".to_string(),
    ]
}

fn ollama_gpu(_: &RenderContext<'_>) -> Vec<String> {
    vec![
        "    deploy:".to_string(),
        "      resources:".to_string(),
        "        reservations:".to_string(),
        "          devices:".to_string(),
        "            - driver: nvidia".to_string(),
        "              count: all".to_string(),
        "              capabilities: [gpu]".to_string(),
    ]
}

fn searxng(ctx: &RenderContext<'_>) -> Vec<String> {
    let port = ctx.config.int(keys::SEARXNG_PORT).unwrap_or_default();
    vec![
        "  searxng:".to_string(),
        format!("    image: {}", escape_compose(SEARXNG_IMAGE)),
        "    container_name: searxng".to_string(),
        "    restart: unless-stopped".to_string(),
        "    ports:".to_string(),
        format!("      - {}", port_mapping(port, SEARXNG_CONTAINER_PORT)),
        "    volumes:".to_string(),
        "      - ./searxng:/etc/searxng".to_string(),
    ]
}

fn redis(ctx: &RenderContext<'_>) -> Vec<String> {
    let port = ctx.config.int(keys::REDIS_PORT).unwrap_or_default();
    vec![
        "  redis:".to_string(),
        format!("    image: {}", escape_compose(REDIS_IMAGE)),
        "    container_name: redis".to_string(),
        "    restart: unless-stopped".to_string(),
        "    ports:".to_string(),
        format!("      - {}", port_mapping(port, REDIS_CONTAINER_PORT)),
    ]
}

/// Container names the compose document starts for `cv`
pub fn expected_containers(cv: &ConfigValue) -> Vec<&'static str> {
    let mut names = vec!["open-webui"];
    for (gate, service) in [(OLLAMA_ON, "ollama"), (SEARXNG_ON, "searxng"), (REDIS_ON, "redis")] {
        if gate.eval(cv) {
            names.push(service);
        }
    }
    names
}
