#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(persisted) = deckhand::infrastructure::config::parse_config(content) else {
        return;
    };
    let cv = deckhand::get_defaults().overlay(&persisted);
    if let Ok(rendered) = deckhand::render_all(&cv) {
        // Whatever renders must be a compose file we can read back
        let _ = deckhand::domain::services::compose_services(&rendered.compose.to_text());
    }
});
