use uuid::Uuid;

use crate::handler::auth::CredentialChecker;
use crate::handler::resolver::{ResolveError, ResourceResolver};
use crate::http::request::{Method, Request, SESSION_COOKIE};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::session::SessionManager;

const LOGIN_FORM_PATH: &str = "/login.html";
const LOGIN_SUCCESS_LOCATION: &str = "/index.html";
const LOGIN_FAILURE_LOCATION: &str = "/401.html";

/// Decides the response for one parsed request.
///
/// Routing: a `/login` path goes to the login form (GET) or the credential
/// check (POST); everything else is a static resource lookup. Each request
/// is handled exactly once; failures surface as error responses, never as
/// a dropped connection.
pub struct RequestHandler<R, C> {
    resolver: R,
    credentials: C,
    sessions: SessionManager,
}

impl<R, C> RequestHandler<R, C>
where
    R: ResourceResolver,
    C: CredentialChecker,
{
    pub fn new(resolver: R, credentials: C, sessions: SessionManager) -> Self {
        Self {
            resolver,
            credentials,
            sessions,
        }
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub async fn handle(&self, req: &Request) -> Response {
        let path = req.path();

        if path.contains("/login") {
            match req.method {
                Method::GET => return self.login_form(),
                Method::POST => return self.login(req).await,
                _ => {}
            }
        }

        self.static_resource(path)
    }

    fn login_form(&self) -> Response {
        match self.resolver.resolve(LOGIN_FORM_PATH) {
            Ok(resource) => Response::ok(&resource.content_type, resource.bytes),
            Err(ResolveError::NotFound) => Response::not_found(),
        }
    }

    /// Credentials come from the form-encoded body, falling back to query
    /// parameters; missing fields count as failed authentication.
    async fn login(&self, req: &Request) -> Response {
        let form = req.form_params();

        let account = form
            .get("account")
            .map(String::as_str)
            .or_else(|| req.query_param("account"));
        let password = form
            .get("password")
            .map(String::as_str)
            .or_else(|| req.query_param("password"));

        let (account, password) = match (account, password) {
            (Some(account), Some(password)) => (account, password),
            _ => {
                tracing::warn!("Login attempt without credentials");
                return Response::redirect(LOGIN_FAILURE_LOCATION);
            }
        };

        if !self.credentials.verify(account, password) {
            tracing::warn!(account, "Login failed");
            return Response::redirect(LOGIN_FAILURE_LOCATION);
        }

        let session = self
            .sessions
            .create_session(Uuid::new_v4().to_string())
            .await;

        if session.set_attribute("account", account).await.is_err() {
            return Response::internal_error();
        }

        tracing::info!(account, session_id = %session.id(), "Login succeeded");

        ResponseBuilder::new(StatusCode::Found)
            .header("Location", LOGIN_SUCCESS_LOCATION)
            .header("Set-Cookie", format!("{}={}", SESSION_COOKIE, session.id()))
            .build()
    }

    fn static_resource(&self, path: &str) -> Response {
        match self.resolver.resolve(path) {
            Ok(resource) => Response::ok(&resource.content_type, resource.bytes),
            Err(ResolveError::NotFound) => {
                tracing::debug!(path, "Resource not found");
                Response::not_found()
            }
        }
    }
}
