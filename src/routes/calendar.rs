use askama::Template;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;

use crate::calendar::{
    self, build_month_grid, bucket_by_day, days_in_month, next_month, previous_month,
    summarize_day, CalendarCell, DAY_NAMES,
};
use crate::checkins;
use crate::db::models::Checkin;
use crate::error::{AppError, AppResult};
use crate::extractors::MaybeUser;
use crate::moods;
use crate::routes::home::Html;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Template)]
#[template(path = "pages/calendar.html")]
pub struct CalendarTemplate {
    pub user_email: String,
    pub month_label: String,
    pub prev_href: String,
    pub next_href: String,
    pub day_names: [&'static str; 7],
    pub cells: Vec<CellView>,
    pub detail: Option<DayDetail>,
}

/// One grid slot prepared for the template: day 0 renders as a blank.
pub struct CellView {
    pub day: u32,
    pub href: String,
    pub selected: bool,
    pub dots: Vec<&'static str>,
    pub overflow: usize,
}

pub struct DayDetail {
    pub date_label: String,
    pub entries: Vec<DetailEntry>,
}

pub struct DetailEntry {
    pub parent_name: String,
    pub mood_name: String,
    pub badge_class: &'static str,
    pub time_label: String,
    pub notes: Option<String>,
}

impl DetailEntry {
    fn from_checkin(checkin: &Checkin) -> Self {
        let time_label = checkin
            .created_at_local()
            .map(|dt| dt.format("%I:%M %p").to_string())
            .unwrap_or_default();
        Self {
            parent_name: checkin.parent_name.clone(),
            mood_name: moods::name_for(&checkin.mood),
            badge_class: moods::badge_class_for(&checkin.mood),
            time_label,
            notes: checkin.notes.clone(),
        }
    }
}

/// GET /calendar — month grid of the current user's check-ins, with an
/// optional selected day expanded below the grid.
pub async fn page(
    State(state): State<AppState>,
    maybe_user: MaybeUser,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Response> {
    let Some(user) = maybe_user.0 else {
        return Ok(Redirect::to("/auth").into_response());
    };

    let today = Local::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    // Rejects month 0, month 13, absurd years.
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(AppError::BadRequest("Invalid calendar month".into()));
    }

    let records = checkins::list_for_user(&state.db, &user.id)?;

    // A day click outside 1..=days_in_month deselects rather than erroring;
    // blank cells are never links in the first place.
    let selected_day = query.day.filter(|d| (1..=days_in_month(year, month)).contains(d));

    let cells = build_month_grid(year, month)
        .into_iter()
        .map(|cell| match cell {
            CalendarCell::Blank => CellView {
                day: 0,
                href: String::new(),
                selected: false,
                dots: Vec::new(),
                overflow: 0,
            },
            CalendarCell::Day(day) => {
                let bucket = NaiveDate::from_ymd_opt(year, month, day)
                    .map(|date| bucket_by_day(&records, date))
                    .unwrap_or_default();
                let summary = summarize_day(&bucket);
                CellView {
                    day,
                    href: format!("/calendar?year={year}&month={month}&day={day}"),
                    selected: selected_day == Some(day),
                    dots: summary
                        .visible
                        .iter()
                        .map(|c| moods::dot_class_for(&c.mood))
                        .collect(),
                    overflow: summary.overflow,
                }
            }
        })
        .collect();

    let detail = selected_day
        .and_then(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| {
            let entries = bucket_by_day(&records, date)
                .into_iter()
                .map(DetailEntry::from_checkin)
                .collect();
            DayDetail {
                date_label: date.format("%A, %B %e, %Y").to_string(),
                entries,
            }
        });

    let (prev_y, prev_m) = previous_month(year, month);
    let (next_y, next_m) = next_month(year, month);

    Ok(Html(CalendarTemplate {
        user_email: user.email,
        month_label: format!("{} {}", calendar::month_name(month), year),
        prev_href: format!("/calendar?year={prev_y}&month={prev_m}"),
        next_href: format!("/calendar?year={next_y}&month={next_m}"),
        day_names: DAY_NAMES,
        cells,
        detail,
    })
    .into_response())
}
