//! `.env` block table
//!
//! Holds Open WebUI settings and secrets plus the variables the compose
//! document interpolates. Companion host ports never appear here; they live
//! only in the compose port mappings.

use super::escaping::escape_env;
use super::{assemble, BlockSpec, Gate, RenderContext, RenderedDocument, References};
use crate::domain::registry::keys;
use crate::domain::value_objects::ConfigValue;
use crate::error::DeckhandResult;

pub const HEADER: &str = "# Generated by deckhand. Edit deckhand.toml and run `deckhand render`.";

/// Engine name -> variable carrying the engine's credential or address
type CredentialVars = &'static [(&'static str, &'static str)];

const SEARCH_CREDENTIALS: CredentialVars = &[
    ("google_pse", "GOOGLE_PSE_API_KEY"),
    ("brave", "BRAVE_SEARCH_API_KEY"),
    ("tavily", "TAVILY_API_KEY"),
];

const TTS_CREDENTIALS: CredentialVars = &[
    ("openai", "AUDIO_TTS_OPENAI_API_KEY"),
    ("elevenlabs", "AUDIO_TTS_API_KEY"),
    ("azure", "AUDIO_TTS_API_KEY"),
];

const STT_CREDENTIALS: CredentialVars = &[
    ("openai", "AUDIO_STT_OPENAI_API_KEY"),
    ("deepgram", "DEEPGRAM_API_KEY"),
];

const IMAGE_CREDENTIALS: CredentialVars = &[
    ("openai", "IMAGES_OPENAI_API_KEY"),
    ("automatic1111", "AUTOMATIC1111_BASE_URL"),
    ("comfyui", "COMFYUI_BASE_URL"),
];

static ENV_BLOCKS: &[BlockSpec] = &[
    BlockSpec {
        id: "header",
        gate: Gate::Always,
        keys: &[],
        body: header,
    },
    BlockSpec {
        id: "webui",
        gate: Gate::Always,
        keys: &[
            keys::WEBUI_IMAGE,
            keys::WEBUI_DATA_DIR,
            keys::WEBUI_AUTH,
            keys::WEBUI_SECRET_KEY,
        ],
        body: webui,
    },
    BlockSpec {
        id: "webui-limits",
        gate: Gate::Flag(keys::WEBUI_RESOURCE_LIMITS),
        keys: &[keys::WEBUI_MEMORY_LIMIT, keys::WEBUI_CPU_LIMIT],
        body: webui_limits,
    },
    BlockSpec {
        id: "ollama",
        gate: Gate::Flag(keys::OLLAMA_ENABLED),
        keys: &[keys::OLLAMA_IMAGE, keys::OLLAMA_MODELS_DIR],
        body: ollama,
    },
    BlockSpec {
        id: "search",
        gate: Gate::Flag(keys::SEARCH_ENABLED),
        keys: &[keys::SEARCH_ENGINE],
        body: search,
    },
    BlockSpec {
        id: "search-credential",
        gate: Gate::All(&[
            Gate::Flag(keys::SEARCH_ENABLED),
            Gate::Any(&[
                Gate::Is(keys::SEARCH_ENGINE, "google_pse"),
                Gate::Is(keys::SEARCH_ENGINE, "brave"),
                Gate::Is(keys::SEARCH_ENGINE, "tavily"),
            ]),
        ]),
        keys: &[keys::SEARCH_API_KEY, keys::SEARCH_ENGINE_ID],
        body: search_credential,
    },
    BlockSpec {
        id: "tts",
        gate: Gate::Flag(keys::TTS_ENABLED),
        keys: &[keys::TTS_ENGINE],
        body: tts,
    },
    BlockSpec {
        id: "tts-credential",
        gate: Gate::All(&[
            Gate::Flag(keys::TTS_ENABLED),
            Gate::Any(&[
                Gate::Is(keys::TTS_ENGINE, "openai"),
                Gate::Is(keys::TTS_ENGINE, "elevenlabs"),
                Gate::Is(keys::TTS_ENGINE, "azure"),
            ]),
        ]),
        keys: &[keys::TTS_API_KEY],
        body: tts_credential,
    },
    BlockSpec {
        id: "stt",
        gate: Gate::Flag(keys::STT_ENABLED),
        keys: &[keys::STT_ENGINE],
        body: stt,
    },
    BlockSpec {
        id: "stt-credential",
        gate: Gate::All(&[
            Gate::Flag(keys::STT_ENABLED),
            Gate::Any(&[
                Gate::Is(keys::STT_ENGINE, "openai"),
                Gate::Is(keys::STT_ENGINE, "deepgram"),
            ]),
        ]),
        keys: &[keys::STT_API_KEY],
        body: stt_credential,
    },
    BlockSpec {
        id: "images",
        gate: Gate::Flag(keys::IMAGES_ENABLED),
        keys: &[keys::IMAGES_ENGINE],
        body: images,
    },
    BlockSpec {
        id: "images-credential",
        gate: Gate::Flag(keys::IMAGES_ENABLED),
        keys: &[keys::IMAGES_API_KEY, keys::IMAGES_BASE_URL],
        body: images_credential,
    },
    BlockSpec {
        id: "websocket",
        gate: Gate::Flag(keys::WEBSOCKET_ENABLED),
        keys: &[],
        body: websocket,
    },
];

pub fn render_env(cv: &ConfigValue) -> DeckhandResult<RenderedDocument> {
    let refs = References::resolve(cv)?;
    Ok(assemble_env(&RenderContext {
        config: cv,
        refs: &refs,
    }))
}

pub(super) fn assemble_env(ctx: &RenderContext<'_>) -> RenderedDocument {
    assemble(ENV_BLOCKS, ctx)
}

fn assign(name: &str, value: &str) -> String {
    format!("{}={}", name, escape_env(value))
}

fn setting(ctx: &RenderContext<'_>, name: &str, key: &str) -> String {
    assign(name, ctx.config.text(key))
}

fn credential_line(
    ctx: &RenderContext<'_>,
    table: CredentialVars,
    engine_key: &str,
    value_key: &str,
) -> Vec<String> {
    let engine = ctx.config.text(engine_key);
    table
        .iter()
        .filter(|(name, _)| *name == engine)
        .map(|(_, var)| setting(ctx, var, value_key))
        .collect()
}

fn header(_: &RenderContext<'_>) -> Vec<String> {
    vec![HEADER.to_string()]
}

fn webui(ctx: &RenderContext<'_>) -> Vec<String> {
    vec![
        String::new(),
        "# Open WebUI".to_string(),
        setting(ctx, "WEBUI_IMAGE", keys::WEBUI_IMAGE),
        setting(ctx, "WEBUI_DATA_DIR", keys::WEBUI_DATA_DIR),
        assign("WEBUI_AUTH", if ctx.config.flag(keys::WEBUI_AUTH) { "true" } else { "false" }),
        setting(ctx, "WEBUI_SECRET_KEY", keys::WEBUI_SECRET_KEY),
    ]
}

fn webui_limits(ctx: &RenderContext<'_>) -> Vec<String> {
    vec![
        setting(ctx, "WEBUI_MEMORY_LIMIT", keys::WEBUI_MEMORY_LIMIT),
        setting(ctx, "WEBUI_CPU_LIMIT", keys::WEBUI_CPU_LIMIT),
    ]
}

fn ollama(ctx: &RenderContext<'_>) -> Vec<String> {
    vec![
        String::new(),
        "# Ollama".to_string(),
        setting(ctx, "OLLAMA_IMAGE", keys::OLLAMA_IMAGE),
        setting(ctx, "OLLAMA_MODELS_DIR", keys::OLLAMA_MODELS_DIR),
    ]
}

fn search(ctx: &RenderContext<'_>) -> Vec<String> {
    vec![
        String::new(),
        "# Web search".to_string(),
        assign("ENABLE_WEB_SEARCH", "true"),
        setting(ctx, "WEB_SEARCH_ENGINE", keys::SEARCH_ENGINE),
    ]
}

fn search_credential(ctx: &RenderContext<'_>) -> Vec<String> {
    let mut lines =
        credential_line(ctx, SEARCH_CREDENTIALS, keys::SEARCH_ENGINE, keys::SEARCH_API_KEY);
    if ctx.config.is(keys::SEARCH_ENGINE, "google_pse") {
        lines.push(setting(ctx, "GOOGLE_PSE_ENGINE_ID", keys::SEARCH_ENGINE_ID));
    }
    lines
}

fn tts(ctx: &RenderContext<'_>) -> Vec<String> {
    vec![
        String::new(),
        "# Text-to-speech".to_string(),
        setting(ctx, "AUDIO_TTS_ENGINE", keys::TTS_ENGINE),
    ]
}

fn tts_credential(ctx: &RenderContext<'_>) -> Vec<String> {
    credential_line(ctx, TTS_CREDENTIALS, keys::TTS_ENGINE, keys::TTS_API_KEY)
}

fn stt(ctx: &RenderContext<'_>) -> Vec<String> {
    // Open WebUI runs its bundled Whisper when the engine is empty
    let engine = match ctx.config.text(keys::STT_ENGINE) {
        "whisper" => "",
        other => other,
    };
    vec![
        String::new(),
        "# Speech-to-text".to_string(),
        assign("AUDIO_STT_ENGINE", engine),
    ]
}

fn stt_credential(ctx: &RenderContext<'_>) -> Vec<String> {
    credential_line(ctx, STT_CREDENTIALS, keys::STT_ENGINE, keys::STT_API_KEY)
}

fn images(ctx: &RenderContext<'_>) -> Vec<String> {
    vec![
        String::new(),
        "# Image generation".to_string(),
        assign("ENABLE_IMAGE_GENERATION", "true"),
        setting(ctx, "IMAGE_GENERATION_ENGINE", keys::IMAGES_ENGINE),
    ]
}

fn images_credential(ctx: &RenderContext<'_>) -> Vec<String> {
    let value_key = if ctx.config.is(keys::IMAGES_ENGINE, "openai") {
        keys::IMAGES_API_KEY
    } else {
        keys::IMAGES_BASE_URL
    };
    credential_line(ctx, IMAGE_CREDENTIALS, keys::IMAGES_ENGINE, value_key)
}

fn websocket(_: &RenderContext<'_>) -> Vec<String> {
    vec![
        String::new(),
        "# Websockets".to_string(),
        assign("ENABLE_WEBSOCKET_SUPPORT", "true"),
        assign("WEBSOCKET_MANAGER", "redis"),
    ]
}
