use askama::Template;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use crate::checkins::{self, NewCheckin};
use crate::error::AppResult;
use crate::extractors::MaybeUser;
use crate::moods::{Mood, ALL_MOODS};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub user_email: Option<String>,
    pub moods: [Mood; 5],
    pub error: Option<String>,
    pub parent_name: String,
    pub mood: String,
    pub notes: String,
}

impl HomeTemplate {
    fn blank(user_email: Option<String>) -> Self {
        Self {
            user_email,
            moods: ALL_MOODS,
            error: None,
            parent_name: String::new(),
            mood: String::new(),
            notes: String::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/submitted.html")]
pub struct SubmittedTemplate {
    pub parent_name: String,
}

/// Wrapper to render askama templates as axum responses
pub struct Html<T: Template>(pub T);

impl<T: Template> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Template render error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }
}

/// GET / — the check-in form. Reachable without a session; check-ins
/// recorded while signed out are stored without an owner.
pub async fn index(maybe_user: MaybeUser) -> AppResult<Response> {
    let user_email = maybe_user.0.map(|u| u.email);
    Ok(Html(HomeTemplate::blank(user_email)).into_response())
}

#[derive(Deserialize)]
pub struct CheckinForm {
    pub parent_name: String,
    pub mood: String,
    #[serde(default)]
    pub notes: String,
}

/// POST /checkins — validate and insert one record. Validation failures
/// and store errors re-render the form with the submitted values intact.
pub async fn submit(
    State(state): State<AppState>,
    maybe_user: MaybeUser,
    Form(form): Form<CheckinForm>,
) -> AppResult<Response> {
    let user_email = maybe_user.0.as_ref().map(|u| u.email.clone());

    let rerender = |message: &str, status: StatusCode| {
        let template = HomeTemplate {
            error: Some(message.to_string()),
            parent_name: form.parent_name.clone(),
            mood: form.mood.clone(),
            notes: form.notes.clone(),
            ..HomeTemplate::blank(user_email.clone())
        };
        (status, Html(template)).into_response()
    };

    let parent_name = form.parent_name.trim();
    if parent_name.is_empty() {
        return Ok(rerender("Parent name is required.", StatusCode::BAD_REQUEST));
    }

    let mood: Mood = match form.mood.parse() {
        Ok(mood) => mood,
        Err(()) => {
            return Ok(rerender("Please select a mood.", StatusCode::BAD_REQUEST));
        }
    };

    let notes = form.notes.trim();
    let new = NewCheckin {
        parent_name: parent_name.to_string(),
        mood,
        notes: if notes.is_empty() {
            None
        } else {
            Some(notes.to_string())
        },
        user_id: maybe_user.0.map(|u| u.id),
    };

    match checkins::insert(&state.db, &new) {
        Ok(checkin) => {
            tracing::info!("Check-in saved: {}", checkin.id);
            Ok(Html(SubmittedTemplate {
                parent_name: checkin.parent_name,
            })
            .into_response())
        }
        Err(e) => {
            tracing::error!("Error saving check-in: {}", e);
            Ok(rerender(
                "Error saving check-in. Please try again.",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
