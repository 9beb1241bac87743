#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Settings file parsing must report problems, never panic
        let _ = deckhand::infrastructure::config::parse_config(content);
    }
});
