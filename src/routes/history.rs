use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};

use crate::checkins;
use crate::db::models::Checkin;
use crate::error::AppResult;
use crate::extractors::MaybeUser;
use crate::moods;
use crate::routes::home::Html;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "pages/history.html")]
pub struct HistoryTemplate {
    pub user_email: String,
    pub entries: Vec<EntryView>,
}

pub struct EntryView {
    pub parent_name: String,
    pub mood_name: String,
    pub badge_class: &'static str,
    pub date_label: String,
    pub notes: Option<String>,
}

impl EntryView {
    fn from_checkin(checkin: &Checkin) -> Self {
        let date_label = checkin
            .created_at_local()
            .map(|dt| dt.format("%b %e, %Y at %I:%M %p").to_string())
            .unwrap_or_else(|| checkin.created_at.clone());
        Self {
            parent_name: checkin.parent_name.clone(),
            mood_name: moods::name_for(&checkin.mood),
            badge_class: moods::badge_class_for(&checkin.mood),
            date_label,
            notes: checkin.notes.clone(),
        }
    }
}

/// GET /history — every recorded check-in, newest first. Auth-gated,
/// but deliberately unscoped (ownerless records show up here too).
pub async fn page(State(state): State<AppState>, maybe_user: MaybeUser) -> AppResult<Response> {
    let Some(user) = maybe_user.0 else {
        return Ok(Redirect::to("/auth").into_response());
    };

    let records = checkins::list_all(&state.db)?;
    let entries = records.iter().map(EntryView::from_checkin).collect();

    Ok(Html(HistoryTemplate {
        user_email: user.email,
        entries,
    })
    .into_response())
}
