//! Secret provisioning
//!
//! The session secret is generated once, before rendering, and then persisted
//! so later renders reuse it. Rendering itself never draws randomness.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::domain::registry::keys;
use crate::domain::value_objects::{ConfigValue, Value};

pub const SECRET_LEN: usize = 32;

pub fn generate_secret<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(SECRET_LEN)
        .map(char::from)
        .collect()
}

/// Fill `webui.secret_key` when it is empty.
///
/// Returns `None` when a key is already configured.
pub fn ensure_secret<R: Rng + ?Sized>(cv: &ConfigValue, rng: &mut R) -> Option<ConfigValue> {
    if !cv.text(keys::WEBUI_SECRET_KEY).trim().is_empty() {
        return None;
    }
    Some(cv.with(keys::WEBUI_SECRET_KEY, Value::Text(generate_secret(rng))))
}
