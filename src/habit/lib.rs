use anyhow::Result;
use libsql::Connection;
use serde::{Deserialize, Serialize};

/// Timestamp layout used everywhere a habit carries a point in time. Matches
/// what sqlite's `strftime('%Y-%m-%dT%H:%M:%fZ', 'now')` produces, so
/// client-supplied and store-assigned values sort together.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
}

impl Cadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Cadence::Daily),
            "weekly" => Some(Cadence::Weekly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub cadence: Cadence,
    pub target: i64,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Normalized creation value, produced by validation. Defaults are already
/// applied; the store only assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateHabit {
    pub name: String,
    pub cadence: Cadence,
    pub target: i64,
    pub start_date: String,
    pub notes: Option<String>,
}

pub struct Habits<'a> {
    conn: &'a Connection,
}

impl<'a> Habits<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, input: CreateHabit) -> Result<Habit> {
        let query = r#"
            INSERT INTO habits (name, cadence, target, start_date, notes)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, cadence, target, start_date, notes, created_at, updated_at
        "#;

        let mut rows = self
            .conn
            .query(
                query,
                libsql::params![
                    input.name,
                    input.cadence.as_str(),
                    input.target,
                    input.start_date,
                    input.notes
                ],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Self::row_to_habit(&row)?)
        } else {
            anyhow::bail!("Failed to create habit")
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Habit>> {
        // The id tie-break keeps the order total when two rows land on the
        // same millisecond.
        let query = r#"
            SELECT id, name, cadence, target, start_date, notes, created_at, updated_at
            FROM habits
            ORDER BY created_at DESC, id DESC
        "#;

        let mut rows = self.conn.query(query, ()).await?;
        let mut habits = Vec::new();

        while let Some(row) = rows.next().await? {
            habits.push(Self::row_to_habit(&row)?);
        }

        Ok(habits)
    }

    fn row_to_habit(row: &libsql::Row) -> Result<Habit> {
        let cadence: String = row.get(2)?;
        let cadence = Cadence::from_str(&cadence)
            .ok_or_else(|| anyhow::anyhow!("unknown cadence value in store: {}", cadence))?;

        Ok(Habit {
            id: row.get(0)?,
            name: row.get(1)?,
            cadence,
            target: row.get(3)?,
            start_date: row.get(4)?,
            notes: row.get::<Option<String>>(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> (libsql::Database, Connection) {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .unwrap();
        let conn = db.connect().unwrap();
        for (_, sql) in crate::habit::migrations() {
            conn.execute_batch(sql).await.unwrap();
        }
        (db, conn)
    }

    fn create(name: &str) -> CreateHabit {
        CreateHabit {
            name: name.to_string(),
            cadence: Cadence::Daily,
            target: 1,
            start_date: "2026-08-01T00:00:00.000Z".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamps() {
        let (_db, conn) = setup().await;
        let store = Habits::new(&conn);

        let habit = store.insert(create("Read")).await.unwrap();

        assert_eq!(habit.id, 1);
        assert_eq!(habit.name, "Read");
        assert!(!habit.created_at.is_empty());
        assert_eq!(habit.created_at, habit.updated_at);
    }

    #[tokio::test]
    async fn notes_round_trip_including_null() {
        let (_db, conn) = setup().await;
        let store = Habits::new(&conn);

        let mut with_notes = create("Gym");
        with_notes.notes = Some("mornings only".to_string());
        let stored = store.insert(with_notes).await.unwrap();
        assert_eq!(stored.notes.as_deref(), Some("mornings only"));

        let without = store.insert(create("Read")).await.unwrap();
        assert_eq!(without.notes, None);
    }

    #[tokio::test]
    async fn list_all_returns_newest_first() {
        let (_db, conn) = setup().await;
        let store = Habits::new(&conn);

        for name in ["first", "second", "third"] {
            store.insert(create(name)).await.unwrap();
        }

        let habits = store.list_all().await.unwrap();
        let names: Vec<&str> = habits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }
}
