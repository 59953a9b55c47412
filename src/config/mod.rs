//! Configuration surface
//!
//! This module declares the configuration variants and exposes the validated,
//! read-only record the front end is built against.

pub mod auth;
mod declarations;
mod labels;
mod rules;
pub mod settings;
pub mod variant;

pub use auth::{AuthProviderDescriptor, AUTH0_HOST_SUFFIX};
pub use settings::ConfigurationRecord;
pub use variant::Variant;
