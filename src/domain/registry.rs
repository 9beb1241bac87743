//! Option Registry
//!
//! The static table of every setting Deckhand knows about: its key, value
//! domain, default, dependency on another setting and interactive prompt.
//! Table order is significant. It is the order of prompts, of sections and
//! keys in the persisted file, and of `deckhand config` output.

use crate::domain::value_objects::{parse_bool_token, parse_int_token, ConfigValue, Value};

/// Option keys, `section.field`
pub mod keys {
    pub const WEBUI_PORT: &str = "webui.port";
    pub const WEBUI_IMAGE: &str = "webui.image";
    pub const WEBUI_DATA_DIR: &str = "webui.data_dir";
    pub const WEBUI_AUTH: &str = "webui.auth";
    pub const WEBUI_SECRET_KEY: &str = "webui.secret_key";
    pub const WEBUI_RESOURCE_LIMITS: &str = "webui.resource_limits";
    pub const WEBUI_MEMORY_LIMIT: &str = "webui.memory_limit";
    pub const WEBUI_CPU_LIMIT: &str = "webui.cpu_limit";

    pub const OLLAMA_ENABLED: &str = "ollama.enabled";
    pub const OLLAMA_PORT: &str = "ollama.port";
    pub const OLLAMA_IMAGE: &str = "ollama.image";
    pub const OLLAMA_GPU: &str = "ollama.gpu";
    pub const OLLAMA_MODELS_DIR: &str = "ollama.models_dir";
    pub const OLLAMA_URL: &str = "ollama.url";

    pub const SEARCH_ENABLED: &str = "search.enabled";
    pub const SEARCH_ENGINE: &str = "search.engine";
    pub const SEARCH_API_KEY: &str = "search.api_key";
    pub const SEARCH_ENGINE_ID: &str = "search.engine_id";

    pub const SEARXNG_ENABLED: &str = "searxng.enabled";
    pub const SEARXNG_PORT: &str = "searxng.port";
    pub const SEARXNG_URL: &str = "searxng.url";

    pub const TTS_ENABLED: &str = "tts.enabled";
    pub const TTS_ENGINE: &str = "tts.engine";
    pub const TTS_API_KEY: &str = "tts.api_key";

    pub const STT_ENABLED: &str = "stt.enabled";
    pub const STT_ENGINE: &str = "stt.engine";
    pub const STT_API_KEY: &str = "stt.api_key";

    pub const IMAGES_ENABLED: &str = "images.enabled";
    pub const IMAGES_ENGINE: &str = "images.engine";
    pub const IMAGES_API_KEY: &str = "images.api_key";
    pub const IMAGES_BASE_URL: &str = "images.base_url";

    pub const REDIS_ENABLED: &str = "redis.enabled";
    pub const REDIS_PORT: &str = "redis.port";

    pub const WEBSOCKET_ENABLED: &str = "websocket.enabled";
}

use keys::*;

/// One selectable provider of an engine setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSpec {
    pub name: &'static str,
    /// Keys that must be non-empty when this engine is selected
    pub requires: &'static [&'static str],
}

const fn local(name: &'static str) -> EngineSpec {
    EngineSpec {
        name,
        requires: &[],
    }
}

const fn needs(name: &'static str, required: &'static [&'static str]) -> EngineSpec {
    EngineSpec {
        name,
        requires: required,
    }
}

/// Value domain of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Boolean,
    Enum(&'static [EngineSpec]),
    /// Integer host port, 1..=65535 (checked by the validator)
    Port,
    Text,
    /// Text that is masked in output and prompted without echo
    Secret,
}

impl Domain {
    pub fn engines(&self) -> &'static [EngineSpec] {
        match self {
            Self::Enum(engines) => engines,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Text(&'static str),
}

/// `key == value` condition under which a setting is meaningful
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependsOn {
    pub key: &'static str,
    pub value: &'static str,
    /// Turning this flag on while the parent is off is a validation issue
    pub hard: bool,
}

const fn when(key: &'static str, value: &'static str) -> Option<DependsOn> {
    Some(DependsOn {
        key,
        value,
        hard: false,
    })
}

const fn requires(key: &'static str) -> Option<DependsOn> {
    Some(DependsOn {
        key,
        value: "true",
        hard: true,
    })
}

/// A declared setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigOption {
    pub key: &'static str,
    pub domain: Domain,
    pub default: DefaultValue,
    pub depends_on: Option<DependsOn>,
    /// Interactive question; `None` means flag/file only
    pub prompt: Option<&'static str>,
    /// Cancelling the prompt with no prior value aborts the run
    pub required: bool,
}

impl ConfigOption {
    pub fn section(&self) -> &'static str {
        self.key.split_once('.').map_or(self.key, |(s, _)| s)
    }

    pub fn field(&self) -> &'static str {
        self.key.split_once('.').map_or(self.key, |(_, f)| f)
    }

    pub fn default_value(&self) -> Value {
        match self.default {
            DefaultValue::Bool(b) => Value::Bool(b),
            DefaultValue::Int(n) => Value::Int(n),
            DefaultValue::Text(s) => Value::text(s),
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self.domain, Domain::Secret)
    }

    /// Whether the dependency (if any) is satisfied by `cv`
    pub fn is_relevant(&self, cv: &ConfigValue) -> bool {
        match self.depends_on {
            Some(dep) => cv.is(dep.key, dep.value),
            None => true,
        }
    }

    /// Normalize a raw token into this option's domain
    pub fn normalize(&self, raw: &str) -> Result<Value, String> {
        let token = raw.trim();
        match self.domain {
            Domain::Boolean => parse_bool_token(token).map(Value::Bool).ok_or_else(|| {
                format!(
                    "expected one of y/n, true/false, on/off, got '{}'",
                    token
                )
            }),
            Domain::Port => parse_int_token(token)
                .map(Value::Int)
                .ok_or_else(|| format!("expected an integer port, got '{}'", token)),
            Domain::Enum(engines) => {
                let lowered = token.to_ascii_lowercase();
                if engines.iter().any(|e| e.name == lowered) {
                    Ok(Value::Text(lowered))
                } else {
                    let names: Vec<&str> = engines.iter().map(|e| e.name).collect();
                    Err(format!(
                        "expected one of {}, got '{}'",
                        names.join(", "),
                        token
                    ))
                }
            }
            Domain::Text | Domain::Secret => Ok(Value::text(token)),
        }
    }

    /// Engine spec for the currently selected engine, if this is an engine setting
    pub fn selected_engine(&self, cv: &ConfigValue) -> Option<&'static EngineSpec> {
        let selected = cv.text(self.key);
        self.domain.engines().iter().find(|e| e.name == selected)
    }
}

const SEARCH_ENGINES: &[EngineSpec] = &[
    local("duckduckgo"),
    local("searxng"),
    needs("google_pse", &[SEARCH_API_KEY, SEARCH_ENGINE_ID]),
    needs("brave", &[SEARCH_API_KEY]),
    needs("tavily", &[SEARCH_API_KEY]),
];

const TTS_ENGINES: &[EngineSpec] = &[
    local("transformers"),
    needs("openai", &[TTS_API_KEY]),
    needs("elevenlabs", &[TTS_API_KEY]),
    needs("azure", &[TTS_API_KEY]),
];

const STT_ENGINES: &[EngineSpec] = &[
    local("whisper"),
    needs("openai", &[STT_API_KEY]),
    needs("deepgram", &[STT_API_KEY]),
];

const IMAGE_ENGINES: &[EngineSpec] = &[
    needs("openai", &[IMAGES_API_KEY]),
    needs("automatic1111", &[IMAGES_BASE_URL]),
    needs("comfyui", &[IMAGES_BASE_URL]),
];

const fn opt(key: &'static str, domain: Domain, default: DefaultValue) -> ConfigOption {
    ConfigOption {
        key,
        domain,
        default,
        depends_on: None,
        prompt: None,
        required: false,
    }
}

impl ConfigOption {
    const fn when(mut self, depends_on: Option<DependsOn>) -> Self {
        self.depends_on = depends_on;
        self
    }

    const fn ask(mut self, prompt: &'static str) -> Self {
        self.prompt = Some(prompt);
        self
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

use DefaultValue::{Bool, Int, Text};

static OPTIONS: &[ConfigOption] = &[
    opt(WEBUI_PORT, Domain::Port, Int(3000)).ask("Port for Open WebUI"),
    opt(WEBUI_IMAGE, Domain::Text, Text("ghcr.io/open-webui/open-webui:main")),
    opt(WEBUI_DATA_DIR, Domain::Text, Text("./open-webui"))
        .ask("Directory for Open WebUI data"),
    opt(WEBUI_AUTH, Domain::Boolean, Bool(true)).ask("Require users to sign in?"),
    opt(WEBUI_SECRET_KEY, Domain::Secret, Text("")),
    opt(WEBUI_RESOURCE_LIMITS, Domain::Boolean, Bool(false))
        .ask("Limit memory and CPU for Open WebUI?"),
    opt(WEBUI_MEMORY_LIMIT, Domain::Text, Text("4g"))
        .when(when(WEBUI_RESOURCE_LIMITS, "true"))
        .ask("Memory limit (e.g. 4g)"),
    opt(WEBUI_CPU_LIMIT, Domain::Text, Text("2.0"))
        .when(when(WEBUI_RESOURCE_LIMITS, "true"))
        .ask("CPU limit (e.g. 2.0)"),
    opt(OLLAMA_ENABLED, Domain::Boolean, Bool(true))
        .ask("Run Ollama alongside Open WebUI?"),
    opt(OLLAMA_PORT, Domain::Port, Int(11434))
        .when(when(OLLAMA_ENABLED, "true"))
        .ask("Host port for Ollama"),
    opt(OLLAMA_IMAGE, Domain::Text, Text("ollama/ollama:latest"))
        .when(when(OLLAMA_ENABLED, "true")),
    opt(OLLAMA_GPU, Domain::Boolean, Bool(false))
        .when(when(OLLAMA_ENABLED, "true"))
        .ask("Give Ollama access to NVIDIA GPUs?"),
    opt(OLLAMA_MODELS_DIR, Domain::Text, Text("./ollama"))
        .when(when(OLLAMA_ENABLED, "true")),
    opt(OLLAMA_URL, Domain::Text, Text(""))
        .when(when(OLLAMA_ENABLED, "false"))
        .ask("Address of your existing Ollama server")
        .required(),
    opt(SEARCH_ENABLED, Domain::Boolean, Bool(false)).ask("Enable web search?"),
    opt(SEARCH_ENGINE, Domain::Enum(SEARCH_ENGINES), Text("duckduckgo"))
        .when(when(SEARCH_ENABLED, "true"))
        .ask("Web search provider"),
    opt(SEARCH_API_KEY, Domain::Secret, Text(""))
        .when(when(SEARCH_ENABLED, "true"))
        .ask("Web search API key (leave empty if not needed)"),
    opt(SEARCH_ENGINE_ID, Domain::Text, Text(""))
        .when(when(SEARCH_ENGINE, "google_pse"))
        .ask("Programmable Search Engine ID"),
    opt(SEARXNG_ENABLED, Domain::Boolean, Bool(false))
        .when(requires(SEARCH_ENABLED))
        .ask("Run a SearXNG container?"),
    opt(SEARXNG_PORT, Domain::Port, Int(8888))
        .when(when(SEARXNG_ENABLED, "true"))
        .ask("Host port for SearXNG"),
    opt(SEARXNG_URL, Domain::Text, Text("")).when(when(SEARXNG_ENABLED, "false")),
    opt(TTS_ENABLED, Domain::Boolean, Bool(false)).ask("Enable text-to-speech?"),
    opt(TTS_ENGINE, Domain::Enum(TTS_ENGINES), Text("transformers"))
        .when(when(TTS_ENABLED, "true"))
        .ask("Text-to-speech engine"),
    opt(TTS_API_KEY, Domain::Secret, Text(""))
        .when(when(TTS_ENABLED, "true"))
        .ask("Text-to-speech API key (leave empty for local engines)"),
    opt(STT_ENABLED, Domain::Boolean, Bool(false)).ask("Enable speech-to-text?"),
    opt(STT_ENGINE, Domain::Enum(STT_ENGINES), Text("whisper"))
        .when(when(STT_ENABLED, "true"))
        .ask("Speech-to-text engine"),
    opt(STT_API_KEY, Domain::Secret, Text(""))
        .when(when(STT_ENABLED, "true"))
        .ask("Speech-to-text API key (leave empty for local engines)"),
    opt(IMAGES_ENABLED, Domain::Boolean, Bool(false)).ask("Enable image generation?"),
    opt(IMAGES_ENGINE, Domain::Enum(IMAGE_ENGINES), Text("openai"))
        .when(when(IMAGES_ENABLED, "true"))
        .ask("Image generation engine"),
    opt(IMAGES_API_KEY, Domain::Secret, Text(""))
        .when(when(IMAGES_ENABLED, "true"))
        .ask("Image generation API key (OpenAI only)"),
    opt(IMAGES_BASE_URL, Domain::Text, Text(""))
        .when(when(IMAGES_ENABLED, "true"))
        .ask("Image generation server address (AUTOMATIC1111 / ComfyUI)"),
    opt(REDIS_ENABLED, Domain::Boolean, Bool(false)).ask("Run a Redis container?"),
    opt(REDIS_PORT, Domain::Port, Int(6379))
        .when(when(REDIS_ENABLED, "true"))
        .ask("Host port for Redis"),
    opt(WEBSOCKET_ENABLED, Domain::Boolean, Bool(false))
        .when(requires(REDIS_ENABLED))
        .ask("Enable websocket support (multi-worker)?"),
];

/// All declared options, in table order
pub fn options() -> &'static [ConfigOption] {
    OPTIONS
}

pub fn lookup(key: &str) -> Option<&'static ConfigOption> {
    OPTIONS.iter().find(|o| o.key == key)
}

/// Section names in table order, each once
pub fn sections() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for option in OPTIONS {
        if out.last() != Some(&option.section()) {
            out.push(option.section());
        }
    }
    out
}

/// One value per declared key, all within domain
pub fn get_defaults() -> ConfigValue {
    OPTIONS
        .iter()
        .map(|o| (o.key, o.default_value()))
        .collect()
}

/// Closest known key for a typo, if it is within two edits
pub fn suggest(unknown: &str) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;
    for option in OPTIONS {
        let dist = levenshtein(unknown, option.key);
        best = match best {
            None => Some((option.key, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((option.key, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
