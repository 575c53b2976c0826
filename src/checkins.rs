//! Record store for check-ins: create and read, nothing else. Records
//! are immutable once written.

use rusqlite::{params, Row};

use crate::db::models::Checkin;
use crate::error::AppResult;
use crate::moods::Mood;
use crate::state::DbPool;

pub struct NewCheckin {
    pub parent_name: String,
    pub mood: Mood,
    pub notes: Option<String>,
    /// None when recorded without a session; the row is kept but owned
    /// by nobody.
    pub user_id: Option<String>,
}

/// Insert a check-in and read back the stored row, so the caller sees
/// the store-assigned timestamp.
pub fn insert(pool: &DbPool, new: &NewCheckin) -> AppResult<Checkin> {
    let conn = pool.get()?;
    let id = uuid::Uuid::now_v7().to_string();

    conn.execute(
        "INSERT INTO checkins (id, parent_name, mood, notes, user_id) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            id,
            new.parent_name,
            new.mood.as_str(),
            new.notes,
            new.user_id
        ],
    )?;

    let checkin = conn.query_row(
        "SELECT id, parent_name, mood, notes, user_id, created_at \
         FROM checkins WHERE id = ?1",
        params![id],
        row_to_checkin,
    )?;
    Ok(checkin)
}

/// Every record, newest first. Includes records with no owner.
pub fn list_all(pool: &DbPool) -> AppResult<Vec<Checkin>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, parent_name, mood, notes, user_id, created_at \
         FROM checkins ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt
        .query_map([], row_to_checkin)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Records owned by one user, newest first. Empty Vec on no matches.
pub fn list_for_user(pool: &DbPool, user_id: &str) -> AppResult<Vec<Checkin>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, parent_name, mood, notes, user_id, created_at \
         FROM checkins WHERE user_id = ?1 ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt
        .query_map(params![user_id], row_to_checkin)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn row_to_checkin(row: &Row) -> rusqlite::Result<Checkin> {
    Ok(Checkin {
        id: row.get(0)?,
        parent_name: row.get(1)?,
        mood: row.get(2)?,
        notes: row.get(3)?,
        user_id: row.get(4)?,
        created_at: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use rusqlite::params;

    fn new_checkin(user_id: Option<&str>) -> NewCheckin {
        NewCheckin {
            parent_name: "Grandma".into(),
            mood: Mood::Okay,
            notes: Some("a bit tired today".into()),
            user_id: user_id.map(String::from),
        }
    }

    fn seed_user(pool: &DbPool, id: &str) {
        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO users (id, email, password_hash) VALUES (?1, ?2, 'hash')",
            params![id, format!("{id}@example.com")],
        )
        .unwrap();
    }

    #[test]
    fn insert_assigns_id_and_timestamp() {
        let pool = test_pool();
        let checkin = insert(&pool, &new_checkin(None)).unwrap();
        assert!(!checkin.id.is_empty());
        assert!(!checkin.created_at.is_empty());
        assert_eq!(checkin.parent_name, "Grandma");
        assert_eq!(checkin.mood, "okay");
        assert_eq!(checkin.notes.as_deref(), Some("a bit tired today"));
        assert!(checkin.user_id.is_none());
    }

    #[test]
    fn insert_attaches_owner_when_given() {
        let pool = test_pool();
        seed_user(&pool, "user-1");
        let checkin = insert(&pool, &new_checkin(Some("user-1"))).unwrap();
        assert_eq!(checkin.user_id.as_deref(), Some("user-1"));
    }

    #[test]
    fn list_for_user_filters_and_never_returns_orphans() {
        let pool = test_pool();
        seed_user(&pool, "user-1");
        seed_user(&pool, "user-2");
        insert(&pool, &new_checkin(Some("user-1"))).unwrap();
        insert(&pool, &new_checkin(Some("user-2"))).unwrap();
        insert(&pool, &new_checkin(None)).unwrap();

        let mine = list_for_user(&pool, "user-1").unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].user_id.as_deref(), Some("user-1"));

        let nobody = list_for_user(&pool, "user-3").unwrap();
        assert!(nobody.is_empty());
    }

    #[test]
    fn list_all_includes_orphans() {
        let pool = test_pool();
        seed_user(&pool, "user-1");
        insert(&pool, &new_checkin(Some("user-1"))).unwrap();
        insert(&pool, &new_checkin(None)).unwrap();
        assert_eq!(list_all(&pool).unwrap().len(), 2);
    }

    #[test]
    fn listings_are_newest_first() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        for (id, ts) in [
            ("old", "2024-03-01 10:00:00"),
            ("new", "2024-03-02 10:00:00"),
            ("middle", "2024-03-01 18:00:00"),
        ] {
            conn.execute(
                "INSERT INTO checkins (id, parent_name, mood, created_at) \
                 VALUES (?1, 'Dad', 'good', ?2)",
                params![id, ts],
            )
            .unwrap();
        }
        drop(conn);

        let all = list_all(&pool).unwrap();
        let ids: Vec<&str> = all.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "middle", "old"]);
    }
}
