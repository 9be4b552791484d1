//! Snippet persistence: create, list, and filtered search.

use jiff::Timestamp;
use rusqlite::Row;

use snipstash_core::models::snippet::{NewSnippet, Snippet};
use snipstash_core::timefmt;

use crate::db::Db;
use crate::error::Result;
use crate::query::{SnippetFilter, build_list_query, build_search_query};

/// The single owner of the snippet collection.
#[derive(Clone)]
pub struct SnippetStore {
    db: Db,
}

impl SnippetStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Validate and persist a new snippet, assigning its id and creation
    /// time. The record is visible to `list_all`/`search` once this returns;
    /// a validation failure leaves the collection untouched.
    pub async fn create(&self, new: NewSnippet) -> Result<Snippet> {
        new.validate()?;

        // Truncate to the persisted second granularity up front so the
        // returned record equals what a later read produces.
        let stamp = timefmt::format(Timestamp::now());
        let created_at = timefmt::parse(&stamp)?;

        let snippet = self
            .db
            .call(move |conn| {
                let NewSnippet {
                    title,
                    code,
                    language,
                    category,
                } = new;
                conn.execute(
                    "INSERT INTO snippets (title, code, language, category, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    rusqlite::params![title, code, language, category, stamp],
                )?;
                Ok(Snippet {
                    id: conn.last_insert_rowid(),
                    title,
                    code,
                    language,
                    category,
                    created_at,
                })
            })
            .await?;

        tracing::debug!(id = snippet.id, "snippet created");
        Ok(snippet)
    }

    /// Every snippet, most recent first; ties keep insertion order.
    pub async fn list_all(&self) -> Result<Vec<Snippet>> {
        self.db
            .call(|conn| {
                let mut stmt = conn.prepare(&build_list_query())?;
                let rows = stmt.query_map([], map_row)?;
                rows.collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(Into::into)
            })
            .await
    }

    /// Snippets matching every supplied filter, in `list_all` order.
    pub async fn search(&self, filter: &SnippetFilter) -> Result<Vec<Snippet>> {
        let pq = build_search_query(filter);
        self.db
            .call(move |conn| {
                let mut stmt = conn.prepare(&pq.sql)?;
                let param_refs: Vec<&dyn rusqlite::ToSql> = pq
                    .params
                    .iter()
                    .map(|p| p as &dyn rusqlite::ToSql)
                    .collect();
                let rows = stmt.query_map(param_refs.as_slice(), map_row)?;
                rows.collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(Into::into)
            })
            .await
    }

    /// Total number of stored snippets.
    pub async fn count(&self) -> Result<i64> {
        self.db
            .call(|conn| {
                let n = conn.query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))?;
                Ok(n)
            })
            .await
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Snippet> {
    let raw: String = row.get(5)?;
    let created_at = timefmt::parse(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Snippet {
        id: row.get(0)?,
        title: row.get(1)?,
        code: row.get(2)?,
        language: row.get(3)?,
        category: row.get(4)?,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct TestContext {
        _dir: TempDir,
        store: SnippetStore,
    }

    fn setup() -> TestContext {
        let dir = TempDir::new().unwrap();
        let db = Db::open(&dir.path().join("test.db")).unwrap();
        TestContext {
            _dir: dir,
            store: SnippetStore::new(db),
        }
    }

    fn payload(title: &str, code: &str, language: &str, category: Option<&str>) -> NewSnippet {
        NewSnippet {
            title: title.to_string(),
            code: code.to_string(),
            language: language.to_string(),
            category: category.map(str::to_string),
        }
    }

    /// Insert a row with a fixed creation time, bypassing `create`, so
    /// ordering tests are deterministic across second boundaries.
    async fn seed_at(store: &SnippetStore, title: &str, created_at: &str) -> i64 {
        let (title, stamp) = (title.to_string(), created_at.to_string());
        store
            .db
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO snippets (title, code, language, category, created_at)
                     VALUES (?1, 'fn x() {}', 'rust', NULL, ?2)",
                    rusqlite::params![title, stamp],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_returns_fresh_ids_and_round_trips_fields() {
        let ctx = setup();

        let a = ctx
            .store
            .create(payload("Quicksort", "def quicksort(xs): ...", "python", Some("algorithms")))
            .await
            .unwrap();
        let b = ctx
            .store
            .create(payload("Hello", "println!(\"hi\");", "rust", None))
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "Quicksort");
        assert_eq!(a.category.as_deref(), Some("algorithms"));
        assert_eq!(b.category, None);

        let all = ctx.store.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        let read_a = all.iter().find(|s| s.id == a.id).unwrap();
        assert_eq!(*read_a, a);
        let read_b = all.iter().find(|s| s.id == b.id).unwrap();
        assert_eq!(*read_b, b);
    }

    #[tokio::test]
    async fn create_rejects_missing_required_field() {
        let ctx = setup();

        let err = ctx
            .store
            .create(payload("", "code", "rust", None))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::StoreError::Invalid(_)));

        assert_eq!(ctx.store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn list_all_orders_newest_first() {
        let ctx = setup();

        let oldest = seed_at(&ctx.store, "oldest", "2026-01-01 10:00:00").await;
        let newest = seed_at(&ctx.store, "newest", "2026-01-01 10:00:02").await;
        let middle = seed_at(&ctx.store, "middle", "2026-01-01 10:00:01").await;

        let all = ctx.store.list_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![newest, middle, oldest]);
    }

    #[tokio::test]
    async fn equal_timestamps_keep_insertion_order() {
        let ctx = setup();

        let first = seed_at(&ctx.store, "first", "2026-01-01 10:00:00").await;
        let second = seed_at(&ctx.store, "second", "2026-01-01 10:00:00").await;

        let all = ctx.store.list_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn search_without_filters_equals_list_all() {
        let ctx = setup();

        seed_at(&ctx.store, "a", "2026-01-01 10:00:00").await;
        seed_at(&ctx.store, "b", "2026-01-01 10:00:01").await;
        seed_at(&ctx.store, "c", "2026-01-01 10:00:01").await;

        let listed = ctx.store.list_all().await.unwrap();
        let searched = ctx.store.search(&SnippetFilter::default()).await.unwrap();
        assert_eq!(searched, listed);
    }

    #[tokio::test]
    async fn query_is_case_insensitive_over_title_and_code() {
        let ctx = setup();

        ctx.store
            .create(payload("FooBar", "fn a() {}", "rust", None))
            .await
            .unwrap();
        ctx.store
            .create(payload("baz", "fn b() {}", "rust", None))
            .await
            .unwrap();
        ctx.store
            .create(payload("other", "let foo = 1;", "rust", None))
            .await
            .unwrap();

        let filter = SnippetFilter::new(Some("foo".to_string()), None, None);
        let hits = ctx.store.search(&filter).await.unwrap();
        let mut titles: Vec<&str> = hits.iter().map(|s| s.title.as_str()).collect();
        titles.sort();
        assert_eq!(titles, vec!["FooBar", "other"]);
    }

    #[tokio::test]
    async fn category_filter_is_exact_and_excludes_null() {
        let ctx = setup();

        ctx.store
            .create(payload("a", "x", "rust", Some("math")))
            .await
            .unwrap();
        ctx.store
            .create(payload("b", "x", "rust", Some("mathematics")))
            .await
            .unwrap();
        ctx.store.create(payload("c", "x", "rust", None)).await.unwrap();

        let filter = SnippetFilter::new(None, Some("math".to_string()), None);
        let hits = ctx.store.search(&filter).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "a");
    }

    #[tokio::test]
    async fn combined_filters_are_conjunctive() {
        let ctx = setup();

        ctx.store
            .create(payload("bubble sort", "def sort(): ...", "python", None))
            .await
            .unwrap();
        ctx.store
            .create(payload("merge sort", "fn sort() {}", "rust", None))
            .await
            .unwrap();
        ctx.store
            .create(payload("fizzbuzz", "def fizz(): ...", "python", None))
            .await
            .unwrap();

        let filter = SnippetFilter::new(Some("sort".to_string()), None, Some("python".to_string()));
        let hits = ctx.store.search(&filter).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "bubble sort");
    }
}
