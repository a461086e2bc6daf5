//! Given step definitions
//!
//! Steps that set up the initial state for scenarios.

use cucumber::given;
use kbase_acceptance::assertions::expect_success;

use crate::world::KbaseWorld;

// =============================================================================
// Environment assumptions
// =============================================================================

#[given("I do have a running web server")]
fn running_web_server(world: &mut KbaseWorld) {
    world.given();
}

#[given("I do have an account")]
fn have_an_account(world: &mut KbaseWorld) {
    // The login step registers the account itself
    world.given();
}

// =============================================================================
// Session and organization setup
// =============================================================================

#[given("I am logged in")]
async fn logged_in(world: &mut KbaseWorld) {
    world.given();
    let response = world.log_in().await;
    KbaseWorld::check(expect_success(&response));
}

#[given(expr = "an organization named {word} exists")]
async fn organization_exists(world: &mut KbaseWorld, name: String) {
    world.given();
    world.ensure_organization(&name).await;

    let status = KbaseWorld::check(world.api.fetch_organization(&name).await);
    KbaseWorld::check(kbase_acceptance::assertions::expect_status(200, status));
    world.scenario.organization = Some(name);
}
