// Library exports so integration tests can build the app in-process.

pub mod auth;
pub mod calendar;
pub mod checkins;
pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod moods;
pub mod routes;
pub mod state;
