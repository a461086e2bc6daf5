//! World struct for Cucumber BDD tests
//!
//! Contains the test state that persists across steps in a scenario.

use std::fmt;
use std::sync::OnceLock;

use cucumber::World;
use kbase_acceptance::{fixtures, HarnessError, ScenarioState, Validity};
use kbase_client::{ApiClient, HarnessConfig, NewUser, ResponseSnapshot};

/// Service configuration shared by every scenario, set once by the runner.
pub static CONFIG: OnceLock<HarnessConfig> = OnceLock::new();

/// Test world: one client (and cookie store) plus the state of one scenario.
#[derive(World)]
#[world(init = Self::new)]
pub struct KbaseWorld {
    /// Endpoint wrappers; the cookie store carries this scenario's session
    pub api: ApiClient,
    /// What earlier steps recorded
    pub scenario: ScenarioState,
}

impl fmt::Debug for KbaseWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KbaseWorld")
            .field("base_url", &self.api.config().base_url)
            .field("scenario", &self.scenario)
            .finish()
    }
}

impl Default for KbaseWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl KbaseWorld {
    pub fn new() -> Self {
        let config = CONFIG
            .get()
            .cloned()
            .expect("Runner must set the service configuration before scenarios start");

        Self {
            api: ApiClient::new(config).expect("Failed to build HTTP client"),
            scenario: ScenarioState::new(),
        }
    }

    /// Panic with the error so cucumber reports the step as failed.
    pub fn check<T>(result: Result<T, impl Into<HarnessError>>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                let error: HarnessError = e.into();
                panic!("{error}")
            }
        }
    }

    pub fn given(&mut self) {
        Self::check(self.scenario.begin_given());
    }

    pub fn then(&mut self) {
        Self::check(self.scenario.begin_then());
    }

    pub fn record_status(
        &mut self,
        status: kbase_client::Result<u16>,
        validity: Option<Validity>,
    ) {
        let status = Self::check(status);
        Self::check(self.scenario.record_status(status, validity));
    }

    pub fn record_response(
        &mut self,
        response: kbase_client::Result<ResponseSnapshot>,
        validity: Option<Validity>,
    ) {
        let response = Self::check(response);
        Self::check(self.scenario.record_response(response, validity));
    }

    /// Make sure a user exists. A rejection (usually "already exists") is fine;
    /// a transport failure is not.
    pub async fn ensure_user(&self, user: &NewUser) {
        let status = Self::check(self.api.create_user(user).await);
        tracing::debug!(username = %user.username, status, "Ensured user");
    }

    pub async fn ensure_organization(&self, name: &str) {
        let status = Self::check(
            self.api
                .create_organization(&fixtures::organization_named(name))
                .await,
        );
        tracing::debug!(organization = name, status, "Ensured organization");
    }

    pub async fn ensure_team(&self, name: &str, organization: &str) {
        let status = Self::check(
            self.api
                .create_team(&fixtures::team_named(name, organization), organization)
                .await,
        );
        tracing::debug!(team = name, organization, status, "Ensured team");
    }

    /// Register the session account and log in with it.
    pub async fn log_in(&self) -> ResponseSnapshot {
        self.ensure_user(&fixtures::session_user()).await;
        Self::check(
            self.api
                .login(&fixtures::login_credentials(Validity::Valid))
                .await,
        )
    }
}
