//! In-process stand-in for the knowledge-base service.
//!
//! When no service URL is configured the runner starts this on a random
//! local port so the features can run without a deployed server. It keeps
//! users, sessions, organizations and teams in memory and applies the same
//! validation rules and status codes as the real service.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::{json, Value};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Name of the session cookie the service issues on login.
pub const SESSION_COOKIE: &str = "knowledge_base";

const MIN_USERNAME_LENGTH: usize = 4;
const MIN_PASSWORD_LENGTH: usize = 8;
const MIN_NAME_LENGTH: usize = 1;
const MAX_NAME_LENGTH: usize = 100;

/// Team every new organization starts with.
const DEFAULT_TEAM: &str = "default";

#[derive(Debug, Clone)]
struct StoredUser {
    password: String,
    first_name: String,
    last_name: String,
}

#[derive(Debug, Clone, Default)]
struct StoredOrganization {
    is_public: bool,
    members: BTreeSet<String>,
    teams: BTreeSet<String>,
}

#[derive(Debug, Default)]
struct ServiceState {
    users: HashMap<String, StoredUser>,
    /// Session id -> username.
    sessions: HashMap<String, String>,
    organizations: HashMap<String, StoredOrganization>,
    next_session: u64,
}

/// Wiremock responder holding the service state.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBaseResponder {
    state: Arc<Mutex<ServiceState>>,
}

/// A running stand-in service. The server stops when this is dropped.
pub struct StandInService {
    server: MockServer,
    responder: KnowledgeBaseResponder,
}

impl StandInService {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let responder = KnowledgeBaseResponder::default();

        Mock::given(any())
            .respond_with(responder.clone())
            .named("knowledge-base stand-in")
            .mount(&server)
            .await;

        tracing::info!(uri = %server.uri(), "Started stand-in knowledge-base service");
        Self { server, responder }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn user_count(&self) -> usize {
        self.responder.lock().users.len()
    }

    pub fn organization_count(&self) -> usize {
        self.responder.lock().organizations.len()
    }
}

impl Respond for KnowledgeBaseResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let segments: Vec<String> = request
            .url
            .path_segments()
            .map(|parts| parts.map(decode_segment).collect())
            .unwrap_or_default();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        let session = session_id(request);

        tracing::debug!(
            method = %request.method,
            path = request.url.path(),
            "Stand-in received request"
        );

        let mut state = self.lock();
        match (request.method.as_str(), segments.as_slice()) {
            ("POST", ["users"]) => state.signup(&request.body),
            ("GET", ["users", username]) => state.get_user(username),
            ("POST", ["login"]) => state.login(session.as_deref(), &request.body),
            ("POST", ["logout"]) => state.logout(session.as_deref()),
            ("GET", ["profile"]) => state.profile(session.as_deref()),
            ("POST", ["organizations"]) => {
                state.create_organization(session.as_deref(), &request.body)
            }
            ("GET", ["organizations", name]) => state.get_organization(name),
            ("POST", ["organizations", organization, "teams"]) => {
                state.create_team(session.as_deref(), organization, &request.body)
            }
            ("GET", ["organizations", organization, "teams", team]) => {
                state.get_team(organization, team)
            }
            _ => error(404, "Unable to find resource"),
        }
    }
}

impl KnowledgeBaseResponder {
    fn lock(&self) -> MutexGuard<'_, ServiceState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ServiceState {
    fn session_user(&self, session: Option<&str>) -> Option<String> {
        session.and_then(|sid| self.sessions.get(sid)).cloned()
    }

    fn signup(&mut self, body: &[u8]) -> ResponseTemplate {
        let Some(body) = parse_body(body) else {
            return error(500, "Unable to parse request body as JSON");
        };
        let username = field(&body, "username");
        let password = field(&body, "password");

        if let Err(message) = validate_signup(username, password) {
            tracing::warn!(username, %message, "Stand-in rejected signup");
            return error(400, &message);
        }

        if self.users.contains_key(username) {
            return error(400, &format!("User with username {username} already exists"));
        }

        self.users.insert(
            username.to_string(),
            StoredUser {
                password: password.to_string(),
                first_name: field(&body, "first_name").to_string(),
                last_name: field(&body, "last_name").to_string(),
            },
        );
        ResponseTemplate::new(200)
    }

    fn user_json(&self, username: &str) -> Option<Value> {
        let user = self.users.get(username)?;
        let mut organizations: Vec<&str> = self
            .organizations
            .iter()
            .filter(|(_, org)| org.members.contains(username))
            .map(|(name, _)| name.as_str())
            .collect();
        organizations.sort_unstable();

        Some(json!({
            "username": username,
            "first_name": user.first_name,
            "last_name": user.last_name,
            "organizations": organizations,
        }))
    }

    fn get_user(&self, username: &str) -> ResponseTemplate {
        match self.user_json(username) {
            Some(user) => ResponseTemplate::new(200).set_body_json(user),
            None => error(404, "Unable to retrieve data from database"),
        }
    }

    fn login(&mut self, session: Option<&str>, body: &[u8]) -> ResponseTemplate {
        let Some(body) = parse_body(body) else {
            return error(500, "Unable to parse request body as JSON");
        };
        let username = field(&body, "username");
        let password = field(&body, "password");

        if username.is_empty() || password.is_empty() {
            return error(400, "Username and password both must be non-empty");
        }

        if self.session_user(session).is_some() {
            return ResponseTemplate::new(200);
        }

        match self.users.get(username) {
            Some(user) if user.password == password => {}
            _ => return error(401, "Invalid username or password"),
        }

        self.next_session += 1;
        let sid = format!("kb-{:08x}", self.next_session);
        self.sessions.insert(sid.clone(), username.to_string());

        ResponseTemplate::new(200)
            .insert_header(
                "Set-Cookie",
                format!("{SESSION_COOKIE}={sid}; Path=/; HttpOnly").as_str(),
            )
            .set_body_json(json!({ "sid": sid }))
    }

    fn logout(&mut self, session: Option<&str>) -> ResponseTemplate {
        match session.and_then(|sid| self.sessions.remove(sid)) {
            Some(_) => ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Success", "code": 200})),
            None => error(500, "Logout failed"),
        }
    }

    fn profile(&self, session: Option<&str>) -> ResponseTemplate {
        let Some(username) = self.session_user(session) else {
            return error(401, "Must be logged in to view profile");
        };
        match self.user_json(&username) {
            Some(user) => ResponseTemplate::new(200).set_body_json(user),
            None => error(404, "Unable to retrieve data from database"),
        }
    }

    fn create_organization(&mut self, session: Option<&str>, body: &[u8]) -> ResponseTemplate {
        let Some(username) = self.session_user(session) else {
            return error(401, "unauthorized");
        };
        let Some(body) = parse_body(body) else {
            return error(400, "Unable to parse request body as JSON");
        };
        let name = field(&body, "name");

        if let Err(message) = validate_name("org", name) {
            tracing::warn!(name, %message, "Stand-in rejected organization");
            return error(400, &message);
        }
        if name.contains(' ') {
            return error(400, "organization names cannot contain spaces");
        }
        if self.organizations.contains_key(name) {
            return error(400, &format!("Organization {name} already exists"));
        }

        let is_public = body.get("is-public").and_then(Value::as_bool).unwrap_or(false);
        self.organizations.insert(
            name.to_string(),
            StoredOrganization {
                is_public,
                members: BTreeSet::from([username]),
                teams: BTreeSet::from([DEFAULT_TEAM.to_string()]),
            },
        );
        ResponseTemplate::new(200)
    }

    fn get_organization(&self, name: &str) -> ResponseTemplate {
        match self.organizations.get(name) {
            Some(org) => ResponseTemplate::new(200).set_body_json(json!({
                "name": name,
                "is-public": org.is_public,
                "member-count": org.members.len(),
                "team-count": org.teams.len(),
            })),
            None => error(404, "Unable to retrieve data from database"),
        }
    }

    fn create_team(
        &mut self,
        session: Option<&str>,
        organization: &str,
        body: &[u8],
    ) -> ResponseTemplate {
        let Some(username) = self.session_user(session) else {
            return error(401, "you must be logged in to perform this action");
        };
        let Some(body) = parse_body(body) else {
            return error(500, "Unable to parse request body as JSON");
        };
        let name = field(&body, "name");

        if validate_name("team", name).is_err() {
            tracing::warn!(name, organization, "Stand-in rejected team");
            return error(400, "Unable to create resource");
        }

        let Some(org) = self.organizations.get_mut(organization) else {
            return error(400, "Unable to find resource");
        };
        if !org.members.contains(&username) {
            return error(
                401,
                &format!(
                    "you must be a member of the {organization} organization to perform this action"
                ),
            );
        }
        if !org.teams.insert(name.to_string()) {
            return error(
                400,
                &format!("Team with name {name} within {organization} already exists"),
            );
        }
        ResponseTemplate::new(200)
    }

    fn get_team(&self, organization: &str, team: &str) -> ResponseTemplate {
        let Some(org) = self.organizations.get(organization) else {
            return error(400, "Unable to find resource");
        };
        if org.teams.contains(team) {
            ResponseTemplate::new(200).set_body_json(json!({
                "name": team,
                "organization": organization,
            }))
        } else {
            // The service reports a missing team as a failed database read
            error(500, "Unable to retrieve data from database")
        }
    }
}

fn error(code: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(code).set_body_json(json!({ "message": message, "code": code }))
}

fn parse_body(body: &[u8]) -> Option<Value> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .filter(Value::is_object)
}

/// A string field of a JSON object, or `""` when missing.
fn field<'a>(body: &'a Value, name: &str) -> &'a str {
    body.get(name).and_then(Value::as_str).unwrap_or_default()
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Session id from the request's `Cookie` header, if any.
fn session_id(request: &Request) -> Option<String> {
    request
        .headers
        .get_all("cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Characters allowed in usernames and passwords: `A-Z a-z 0-9 - . _ ~`.
fn is_url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

fn validate_signup(username: &str, password: &str) -> std::result::Result<(), String> {
    if username.len() < MIN_USERNAME_LENGTH {
        return Err(format!(
            "Username must be at least {MIN_USERNAME_LENGTH} characters long"
        ));
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ));
    }
    if let Some(c) = username.chars().find(|c| !is_url_safe(*c)) {
        return Err(format!(
            "Usernames must only contain (a-z A-Z 0-9 - . _ ~) - found: {c}"
        ));
    }
    if !password.chars().all(is_url_safe) {
        return Err("Passwords must only contain (a-z A-Z 0-9 - . _ ~)".to_string());
    }
    Ok(())
}

fn validate_name(kind: &str, name: &str) -> std::result::Result<(), String> {
    if name.len() > MAX_NAME_LENGTH {
        Err(format!(
            "Length of {kind} name must be less than {MAX_NAME_LENGTH}. Has length of {}.",
            name.len()
        ))
    } else if name.len() < MIN_NAME_LENGTH {
        Err(format!(
            "Length of {kind} name must be at least {MIN_NAME_LENGTH}. Has length of {}.",
            name.len()
        ))
    } else {
        Ok(())
    }
}
