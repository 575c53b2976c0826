use rand::Rng;
use rusqlite::params;

use crate::error::AppResult;
use crate::state::DbPool;

/// Create a new session for a user. Returns the session token.
pub fn create_session(pool: &DbPool, user_id: &str, hours: u64) -> AppResult<String> {
    let conn = pool.get()?;
    let token = generate_token();
    let id = uuid::Uuid::now_v7().to_string();

    conn.execute(
        "INSERT INTO sessions (id, user_id, token, expires_at) \
         VALUES (?1, ?2, ?3, datetime('now', ?4))",
        params![id, user_id, token, format!("+{} hours", hours)],
    )?;

    Ok(token)
}

/// Delete a session by token.
pub fn delete_session(pool: &DbPool, token: &str) -> AppResult<()> {
    let conn = pool.get()?;
    conn.execute("DELETE FROM sessions WHERE token = ?1", params![token])?;
    Ok(())
}

/// Generate a cryptographically random 32-byte hex token.
fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; 32] = rng.gen();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn seed_user(pool: &DbPool, id: &str) {
        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO users (id, email, password_hash) VALUES (?1, ?2, 'hash')",
            params![id, format!("{id}@example.com")],
        )
        .unwrap();
    }

    #[test]
    fn generate_token_is_64_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generate_token_is_unique() {
        let t1 = generate_token();
        let t2 = generate_token();
        assert_ne!(t1, t2);
    }

    #[test]
    fn create_then_delete_session() {
        let pool = test_pool();
        seed_user(&pool, "user-1");

        let token = create_session(&pool, "user-1", 1).unwrap();

        let count = |pool: &DbPool| -> i64 {
            pool.get()
                .unwrap()
                .query_row("SELECT COUNT(*) FROM sessions", [], |r| r.get(0))
                .unwrap()
        };
        assert_eq!(count(&pool), 1);

        delete_session(&pool, &token).unwrap();
        assert_eq!(count(&pool), 0);
    }

    #[test]
    fn session_expiry_is_in_the_future() {
        let pool = test_pool();
        seed_user(&pool, "user-1");
        let token = create_session(&pool, "user-1", 24).unwrap();

        let conn = pool.get().unwrap();
        let still_valid: bool = conn
            .query_row(
                "SELECT expires_at > datetime('now') FROM sessions WHERE token = ?1",
                params![token],
                |r| r.get(0),
            )
            .unwrap();
        assert!(still_valid);
    }
}
