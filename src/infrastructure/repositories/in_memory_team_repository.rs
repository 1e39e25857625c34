use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::errors::{Error, ErrorKind, Result};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// Thread-safe in-memory implementation of TeamRepository
///
/// Keeps teams in insertion order. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<Vec<Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(e: impl std::fmt::Display) -> Error {
    Error::unknown(e).context("team store lock poisoned")
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn insert_one(&self, team: Team) -> Result<Team> {
        let mut teams = self.teams.write().map_err(poisoned)?;

        if teams.iter().any(|t| t.id() == team.id()) {
            tracing::warn!(team_id = %team.id(), "team already exists");
            return Err(Error::new(ErrorKind::DuplicateKey));
        }

        teams.push(team.clone());
        Ok(team)
    }

    async fn find_one(&self, id: &str) -> Result<Team> {
        let teams = self.teams.read().map_err(poisoned)?;

        teams
            .iter()
            .find(|t| t.id() == id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("error to get team with id '{}'", id)))
    }

    async fn delete_one(&self, id: &str) -> Result<()> {
        let mut teams = self.teams.write().map_err(poisoned)?;

        let position = teams
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| Error::not_found(format!("error to delete team with id '{}'", id)))?;

        teams.remove(position);
        Ok(())
    }

    async fn find(&self) -> Result<Vec<Team>> {
        let teams = self.teams.read().map_err(poisoned)?;
        Ok(teams.clone())
    }
}
