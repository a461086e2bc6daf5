//! Named operations for each knowledge-base resource.
//!
//! Wrappers only build URLs and encode bodies. Statuses and responses are
//! passed through untouched and inputs are never validated here: an empty
//! organization name is sent as-is so the service's rejection can be
//! asserted on.

use urlencoding::encode;

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestDescriptor};
use crate::models::{Credentials, NewOrganization, NewQuestion, NewTeam, NewUser};
use crate::response::ResponseSnapshot;

/// Endpoint wrappers bound to one base URL and one HTTP client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: HarnessConfig,
    http: HttpClient,
}

impl ApiClient {
    pub fn new(config: HarnessConfig) -> Result<Self> {
        let http = HttpClient::new(&config)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// `POST /users`
    pub async fn create_user(&self, user: &NewUser) -> Result<u16> {
        let url = self.config.endpoint("users");
        self.status_of(RequestDescriptor::post_json(url, user)?).await
    }

    /// `GET /users/{username}`
    pub async fn fetch_user(&self, username: &str) -> Result<u16> {
        let url = self.config.endpoint(&format!("users/{}", encode(username)));
        self.status_of(RequestDescriptor::get(url)).await
    }

    /// `POST /login`. Returns the whole response since callers inspect `Set-Cookie`.
    pub async fn login(&self, credentials: &Credentials) -> Result<ResponseSnapshot> {
        let url = self.config.endpoint("login");
        self.http
            .send(&RequestDescriptor::post_json(url, credentials)?)
            .await
    }

    /// `POST /logout`
    pub async fn logout(&self) -> Result<u16> {
        let url = self.config.endpoint("logout");
        self.status_of(RequestDescriptor::post_empty(url)).await
    }

    /// `GET /profile`, answered from the session cookie.
    pub async fn fetch_profile(&self) -> Result<ResponseSnapshot> {
        let url = self.config.endpoint("profile");
        self.http.send(&RequestDescriptor::get(url)).await
    }

    /// `POST /organizations`
    pub async fn create_organization(&self, organization: &NewOrganization) -> Result<u16> {
        let url = self.config.endpoint("organizations");
        self.status_of(RequestDescriptor::post_json(url, organization)?)
            .await
    }

    /// `GET /organizations/{name}`
    pub async fn fetch_organization(&self, name: &str) -> Result<u16> {
        let url = self.config.endpoint(&format!("organizations/{}", encode(name)));
        self.status_of(RequestDescriptor::get(url)).await
    }

    /// `POST /organizations/{organization_name}/teams`
    pub async fn create_team(&self, team: &NewTeam, organization_name: &str) -> Result<u16> {
        let url = self
            .config
            .endpoint(&format!("organizations/{}/teams", encode(organization_name)));
        self.status_of(RequestDescriptor::post_json(url, team)?).await
    }

    /// `GET /organizations/{organization_name}/teams/{team}`
    pub async fn fetch_team(&self, organization_name: &str, team: &str) -> Result<u16> {
        let url = self.config.endpoint(&format!(
            "organizations/{}/teams/{}",
            encode(organization_name),
            encode(team)
        ));
        self.status_of(RequestDescriptor::get(url)).await
    }

    /// `POST /questions`
    pub async fn submit_question(&self, question: &NewQuestion) -> Result<ResponseSnapshot> {
        let url = self.config.endpoint("questions");
        self.http
            .send(&RequestDescriptor::post_json(url, question)?)
            .await
    }

    /// `GET /questions/{id}`
    pub async fn fetch_question(&self, id: u64) -> Result<ResponseSnapshot> {
        let url = self.config.endpoint(&format!("questions/{id}"));
        self.http.send(&RequestDescriptor::get(url)).await
    }

    async fn status_of(&self, descriptor: RequestDescriptor) -> Result<u16> {
        Ok(self.http.send(&descriptor).await?.status())
    }
}
