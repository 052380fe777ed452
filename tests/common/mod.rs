// Common test utilities and fixtures

pub mod helpers;
pub mod upstream;

// Re-export commonly used items
// Note: These may appear unused in some test crates
#[allow(unused_imports)]
pub use helpers::{body_json, body_text, create_test_app, create_test_gateway, TestApp};
#[allow(unused_imports)]
pub use upstream::StubUpstream;
