pub mod handlers;
pub mod password;
pub mod session;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "checkin_session";
