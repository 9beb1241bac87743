#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // `--set KEY=VALUE` splitting and normalization
        if let Some((key, token)) = deckhand::Layer::parse_assignment(raw) {
            let _ = deckhand::domain::services::normalize_entry(&key, &token);
        }
    }
});
