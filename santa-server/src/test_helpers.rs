//! Test helpers for santa-server unit tests.

use axum_test::TestServer;
use santa_types::ServerConfig;

use crate::router::build_router;
use crate::state::AppState;

/// Seed shared by router tests so generated tables are reproducible.
pub const TEST_SEED: u64 = 2024;

/// Config with enough engine attempts that a three-person table always pairs.
pub fn test_config() -> ServerConfig {
    ServerConfig { assignment_attempts: 50, ..ServerConfig::default() }
}

/// Create a minimal `AppState` for testing.
pub fn test_app_state(config: ServerConfig) -> AppState {
    AppState::with_seed(config, TEST_SEED)
}

/// Build the full router around `config` and wrap it in a test server.
pub fn test_server(config: ServerConfig) -> TestServer {
    TestServer::new(build_router(test_app_state(config))).expect("failed to create test server")
}
