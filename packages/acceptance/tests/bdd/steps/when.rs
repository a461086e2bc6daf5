//! When step definitions
//!
//! Steps that perform the request under test and record its outcome.

use cucumber::when;
use kbase_acceptance::{fixtures, Validity};

use crate::world::KbaseWorld;

// =============================================================================
// Users
// =============================================================================

#[when(expr = "I sign up with {word} credentials")]
async fn sign_up(world: &mut KbaseWorld, validity: Validity) {
    let user = fixtures::signup_user(validity);
    let status = world.api.create_user(&user).await;
    world.record_status(status, Some(validity));
    world.scenario.username = Some(user.username);
}

#[when(expr = "I try to retrieve user with {word}")]
async fn retrieve_user(world: &mut KbaseWorld, username: String) {
    if fixtures::should_precreate(&username) {
        world.ensure_user(&fixtures::user_named(&username)).await;
    }

    let status = world.api.fetch_user(&username).await;
    world.record_status(status, None);
    world.scenario.username = Some(username);
}

// =============================================================================
// Sessions
// =============================================================================

#[when("I am not already logged in")]
fn not_logged_in(world: &mut KbaseWorld) {
    // Each scenario starts with an empty cookie store, so there is nothing to clear
    KbaseWorld::check(world.scenario.record_noop_action());
}

#[when(expr = "I login with {word} credentials")]
async fn log_in_with(world: &mut KbaseWorld, validity: Validity) {
    if validity.is_valid() {
        world.ensure_user(&fixtures::session_user()).await;
    }

    let credentials = fixtures::login_credentials(validity);
    let response = world.api.login(&credentials).await;
    world.record_response(response, Some(validity));
    world.scenario.username = Some(credentials.username);
}

#[when("I log out")]
async fn log_out(world: &mut KbaseWorld) {
    let status = world.api.logout().await;
    world.record_status(status, None);
}

#[when("I request my profile")]
async fn request_profile(world: &mut KbaseWorld) {
    let response = world.api.fetch_profile().await;
    world.record_response(response, None);
}

// =============================================================================
// Organizations
// =============================================================================

#[when(expr = "I post a {word} organization")]
async fn post_organization(world: &mut KbaseWorld, validity: Validity) {
    let organization = fixtures::organization(validity);
    let status = world.api.create_organization(&organization).await;
    world.record_status(status, Some(validity));
    world.scenario.organization = Some(organization.name);
}

#[when(expr = "I try to retrieve organization with name {word}")]
async fn retrieve_organization(world: &mut KbaseWorld, name: String) {
    if fixtures::should_precreate(&name) {
        world.ensure_organization(&name).await;
    }

    let status = world.api.fetch_organization(&name).await;
    world.record_status(status, None);
    world.scenario.organization = Some(name);
}

// =============================================================================
// Teams
// =============================================================================

#[when(expr = "I post a {word} team")]
async fn post_team(world: &mut KbaseWorld, validity: Validity) {
    // Teams live under an organization; fall back to the canonical one
    let organization = match world.scenario.organization.clone() {
        Some(name) => name,
        None => {
            world.ensure_organization(fixtures::ORGANIZATION_NAME).await;
            fixtures::ORGANIZATION_NAME.to_string()
        }
    };

    let team = fixtures::team(validity, &organization);
    let status = world.api.create_team(&team, &organization).await;
    world.record_status(status, Some(validity));
    world.scenario.organization = Some(organization);
    world.scenario.team = Some(team.name);
}

#[when(expr = "I try to retrieve team {word} in organization {word}")]
async fn retrieve_team(world: &mut KbaseWorld, team: String, organization: String) {
    if fixtures::should_precreate(&organization) {
        world.ensure_organization(&organization).await;
        if fixtures::should_precreate(&team) {
            world.ensure_team(&team, &organization).await;
        }
    }

    let status = world.api.fetch_team(&organization, &team).await;
    world.record_status(status, None);
    world.scenario.organization = Some(organization);
    world.scenario.team = Some(team);
}
