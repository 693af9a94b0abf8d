// Test code uses unwrap for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used)]

//! End-to-end tests of the standard pipeline.
//!
//! - `common` - compiler construction and tree helpers
//! - `forms` - expected rewrites of each base-language form
//! - `errors` - programs outside the base language
//! - `properties` - generated programs
//!
//! ```bash
//! cargo test -p lisle_compiler --test scenarios
//! ```

#[path = "scenarios/common.rs"]
mod common;

#[path = "scenarios/forms.rs"]
mod forms;

#[path = "scenarios/errors.rs"]
mod errors;

#[path = "scenarios/properties.rs"]
mod properties;
