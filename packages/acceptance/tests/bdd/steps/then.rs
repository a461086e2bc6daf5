//! Then step definitions
//!
//! Steps that verify outcomes and assertions.

use cucumber::then;
use kbase_acceptance::assertions::{expect_cookie_header, expect_json_field, expect_status};
use kbase_acceptance::Validity;

use crate::world::KbaseWorld;

// =============================================================================
// Status codes
// =============================================================================

#[then(expr = "I should see a {int} response")]
fn see_response(world: &mut KbaseWorld, code: u16) {
    world.then();
    let actual = KbaseWorld::check(world.scenario.last_status());
    KbaseWorld::check(expect_status(code, actual));
}

#[then(expr = "I should see a {int} response to login")]
fn see_login_response(world: &mut KbaseWorld, code: u16) {
    world.then();
    let response = KbaseWorld::check(world.scenario.last_response());
    KbaseWorld::check(expect_status(code, response.status()));
}

// =============================================================================
// Headers and bodies
// =============================================================================

// Phrase kept word-for-word for existing feature files
#[then("I should a see a Set-Cookie header")]
fn see_set_cookie(world: &mut KbaseWorld) {
    world.then();
    // Only a successful login is expected to set a cookie
    if KbaseWorld::check(world.scenario.last_validity()) == Validity::Valid {
        let response = KbaseWorld::check(world.scenario.last_response());
        KbaseWorld::check(expect_cookie_header(response));
    }
}

#[then(expr = "the response should contain a {string} field")]
fn response_contains_field(world: &mut KbaseWorld, field: String) {
    world.then();
    let response = KbaseWorld::check(world.scenario.last_response());
    KbaseWorld::check(expect_json_field(response, &field));
}
