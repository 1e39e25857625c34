use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::Row;

use crate::config::DatabaseConfig;
use crate::domain::errors::{Error, ErrorKind, Result};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// Collection (table) holding team documents inside the configured namespace
pub const TEAM_COLLECTION_NAME: &str = "teams";

const UNIQUE_VIOLATION: &str = "23505";

/// Stored shape of a team document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TeamDocument {
    id: String,
    name: String,
    group: String,
}

impl From<&Team> for TeamDocument {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            group: team.group().to_string(),
        }
    }
}

impl TeamDocument {
    /// Rebuilds the entity, re-checking its invariants
    fn into_team(self) -> Result<Team> {
        Team::new(self.id, self.name, self.group)
            .map_err(|e| Error::unknown(e).context("error on decode team document"))
    }
}

/// Opens a connection pool and verifies the store is reachable
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    if config.url.trim().is_empty() {
        return Err(Error::unknown("database url is required"));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .map_err(|e| Error::unknown(e).context("error on database connection"))?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(|e| Error::unknown(e).context("error on database ping"))?;

    Ok(pool)
}

/// PostgreSQL implementation of TeamRepository
///
/// Each team is one JSONB document keyed by its id in
/// `<database_name>.teams`. Native failures are classified here: unique
/// violations become `DuplicateKey`, zero matched rows become `NotFound`.
pub struct PostgresTeamRepository {
    pool: PgPool,
    schema: String,
    collection: String,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    /// * `database_name` - Schema that namespaces the teams collection
    pub fn new(pool: PgPool, database_name: &str) -> Self {
        let schema = quote_identifier(database_name);
        let collection = format!("{}.{}", schema, quote_identifier(TEAM_COLLECTION_NAME));

        Self {
            pool,
            schema,
            collection,
        }
    }

    /// Creates the namespace and collection if they do not exist yet
    pub async fn ensure_collection(&self) -> Result<()> {
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", self.schema))
            .execute(&self.pool)
            .await
            .map_err(|e| Error::unknown(e).context("error to create team namespace"))?;

        let query = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY,
                document JSONB NOT NULL,
                inserted_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            self.collection
        );

        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::unknown(e).context("error to create team collection"))?;

        tracing::info!(collection = %self.collection, "team collection ready");

        Ok(())
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn insert_one(&self, team: Team) -> Result<Team> {
        let query = format!(
            "INSERT INTO {} (id, document) VALUES ($1, $2)",
            self.collection
        );

        let result = sqlx::query(&query)
            .bind(team.id())
            .bind(Json(TeamDocument::from(&team)))
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => {
                tracing::debug!(team_id = %team.id(), "team inserted");
                Ok(team)
            }
            Err(e) if is_unique_violation(&e) => {
                tracing::warn!(team_id = %team.id(), "team already exists");
                Err(Error::new(ErrorKind::DuplicateKey))
            }
            Err(e) => Err(Error::unknown(e).context("error to insert team")),
        }
    }

    async fn find_one(&self, id: &str) -> Result<Team> {
        let query = format!("SELECT document FROM {} WHERE id = $1", self.collection);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::unknown(e).context(format!("error to get team with id '{}'", id)))?
            .ok_or_else(|| Error::not_found(format!("error to get team with id '{}'", id)))?;

        let team = decode_team(&row)?;
        tracing::debug!(team_id = %id, "team found");

        Ok(team)
    }

    async fn delete_one(&self, id: &str) -> Result<()> {
        let query = format!("DELETE FROM {} WHERE id = $1", self.collection);

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                Error::unknown(e).context(format!("error to delete team with id '{}'", id))
            })?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found(format!(
                "error to delete team with id '{}'",
                id
            )));
        }

        tracing::debug!(team_id = %id, "team deleted");

        Ok(())
    }

    async fn find(&self) -> Result<Vec<Team>> {
        let query = format!(
            "SELECT document FROM {} ORDER BY inserted_at, id",
            self.collection
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Error::unknown(e).context("error to find all teams"))?;

        let teams = rows.iter().map(decode_team).collect::<Result<Vec<_>>>()?;
        tracing::debug!(count = teams.len(), "teams listed");

        Ok(teams)
    }
}

fn decode_team(row: &PgRow) -> Result<Team> {
    let Json(document): Json<TeamDocument> = row
        .try_get("document")
        .map_err(|e| Error::unknown(e).context("error on decode team"))?;

    document.into_team()
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION)
    )
}

/// Quotes a Postgres identifier, doubling embedded quotes
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
