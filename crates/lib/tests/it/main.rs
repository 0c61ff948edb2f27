/*! Integration tests for Pagewright.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - tree: Tests for the location engine (locate/remove/insert/update)
 * - editor: Tests for the drag-and-drop reconciliation controller
 * - outline: Tests for the flattened outline projection
 * - registry: Tests for the component factory and static registry
 * - transport: Tests for the DTO bridge and persistence sanitization
 * - store: Tests for the page persistence boundary
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("pagewright=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod editor;
mod helpers;
mod registry;
mod tree;
