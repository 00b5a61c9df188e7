//! Test utilities shared by unit and integration tests.
//!
//! Only compiled when the `test-utils` feature is enabled; production builds
//! never include this module.

use std::path::Path;

/// Load a JSON fixture from the crate's `fixtures/` directory.
///
/// # Panics
///
/// Panics when the fixture is missing or not valid JSON; fixtures are part
/// of the test suite and a broken one is a test bug.
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}
