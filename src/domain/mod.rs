//! Domain Layer
//!
//! The core of Deckhand: the option registry and the pure pipeline stages
//! that merge, validate and render configuration.
//!
//! ## Structure
//!
//! - `registry` - Static table of every setting
//! - `value_objects/` - Immutable value types (Value, ConfigValue, Layer)
//! - `services/` - Layering, interview, validator, renderer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or processes directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod registry;
pub mod services;
pub mod value_objects;
