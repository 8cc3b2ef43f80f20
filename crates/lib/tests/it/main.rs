/*! Integration tests for multikey.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - key: Tests for Component, Key and the dynamic key conversions
 * - encoding: Tests for fingerprints produced by the KeyEncoder
 * - registry: Tests for identity retention across map operations
 * - map: Tests for the MultiKeyMap facade, organized by operation
 * - config: Tests for MapConfig loading and its effect on maps
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("multikey=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod config;
mod encoding;
mod key;
