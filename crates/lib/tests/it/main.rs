/*! Integration tests for Gatehouse.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - account: Tests for the AccountStore as a screen would drive it
 * - backend: Tests for the BlobStore trait and its implementations
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("gatehouse=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod account;
mod backend;
mod helpers;
