use askama::Template;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use rusqlite::params;
use serde::Deserialize;

use crate::auth::{password, session, SESSION_COOKIE};
use crate::error::AppResult;
use crate::extractors::{extract_session_token, MaybeUser};
use crate::routes::home::Html;
use crate::state::AppState;

// -- Templates --

#[derive(Template)]
#[template(path = "pages/auth.html")]
pub struct AuthTemplate {
    pub signup_mode: bool,
    pub message: Option<String>,
    pub error: bool,
    pub email: String,
}

impl AuthTemplate {
    fn signin() -> Self {
        Self {
            signup_mode: false,
            message: None,
            error: false,
            email: String::new(),
        }
    }

    fn signup() -> Self {
        Self {
            signup_mode: true,
            ..Self::signin()
        }
    }
}

// -- Request types --

#[derive(Deserialize)]
pub struct AuthPageQuery {
    pub mode: Option<String>,
}

#[derive(Deserialize)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
}

// -- Cookie helpers --

fn session_cookie(token: &str, max_age_hours: u64) -> String {
    let max_age_secs = max_age_hours * 3600;
    format!(
        "{}={}; HttpOnly; SameSite=Strict; Path=/; Max-Age={}",
        SESSION_COOKIE, token, max_age_secs
    )
}

fn clear_session_cookie() -> String {
    format!("{}=; HttpOnly; SameSite=Strict; Path=/; Max-Age=0", SESSION_COOKIE)
}

// -- Handlers --

/// GET /auth — render the sign-in / sign-up page.
/// Already-authenticated users are sent back to the form view.
pub async fn auth_page(
    maybe_user: MaybeUser,
    Query(query): Query<AuthPageQuery>,
) -> AppResult<Response> {
    if maybe_user.0.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let template = if query.mode.as_deref() == Some("signup") {
        AuthTemplate::signup()
    } else {
        AuthTemplate::signin()
    };
    Ok(Html(template).into_response())
}

/// POST /auth/signin — verify credentials and start a session.
/// Failure re-renders the auth view with the error message; no redirect.
pub async fn signin(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    let email = form.email.trim().to_lowercase();

    let user = {
        let conn = state.db.get()?;
        conn.query_row(
            "SELECT id, password_hash FROM users WHERE email = ?1",
            params![email],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
        )
        .ok()
    };

    let verified = user
        .as_ref()
        .map(|(_, stored_hash)| password::verify(&form.password, stored_hash))
        .unwrap_or(false);

    let Some((user_id, _)) = user.filter(|_| verified) else {
        let template = AuthTemplate {
            message: Some("Invalid login credentials".to_string()),
            error: true,
            email: form.email,
            ..AuthTemplate::signin()
        };
        return Ok((StatusCode::UNAUTHORIZED, Html(template)).into_response());
    };
    let token = session::create_session(&state.db, &user_id, state.config.auth.session_hours)?;

    Ok((
        StatusCode::SEE_OTHER,
        [
            (header::LOCATION, "/".to_string()),
            (
                header::SET_COOKIE,
                session_cookie(&token, state.config.auth.session_hours),
            ),
        ],
        "",
    )
        .into_response())
}

/// POST /auth/signup — create an account. On success the page switches
/// back to sign-in mode with a confirmation message.
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    let email = form.email.trim().to_lowercase();

    let reject = |message: &str, email: String| {
        let template = AuthTemplate {
            message: Some(message.to_string()),
            error: true,
            email,
            ..AuthTemplate::signup()
        };
        (StatusCode::BAD_REQUEST, Html(template)).into_response()
    };

    if email.is_empty() || !email.contains('@') {
        return Ok(reject(
            "Unable to validate email address: invalid format",
            form.email,
        ));
    }
    if form.password.len() < 6 {
        return Ok(reject(
            "Password should be at least 6 characters",
            form.email,
        ));
    }

    let already_exists: bool = {
        let conn = state.db.get()?;
        conn.query_row(
            "SELECT COUNT(*) > 0 FROM users WHERE email = ?1",
            params![email],
            |row| row.get(0),
        )?
    };
    if already_exists {
        return Ok(reject("User already registered", form.email));
    }

    let password_hash = password::hash(&form.password)?;
    let user_id = uuid::Uuid::now_v7().to_string();
    {
        let conn = state.db.get()?;
        conn.execute(
            "INSERT INTO users (id, email, password_hash) VALUES (?1, ?2, ?3)",
            params![user_id, email, password_hash],
        )?;
    }

    let template = AuthTemplate {
        message: Some("Account created successfully! You can now sign in.".to_string()),
        email,
        ..AuthTemplate::signin()
    };
    Ok(Html(template).into_response())
}

/// POST /auth/signout — delete the session and redirect to the auth view.
pub async fn signout(
    State(state): State<AppState>,
    request: axum::http::Request<axum::body::Body>,
) -> AppResult<Response> {
    let (parts, _body) = request.into_parts();

    if let Some(token) = extract_session_token(&parts) {
        let _ = session::delete_session(&state.db, token);
    }

    Ok((
        StatusCode::SEE_OTHER,
        [
            (header::LOCATION, "/auth".to_string()),
            (header::SET_COOKIE, clear_session_cookie()),
        ],
        "",
    )
        .into_response())
}
