use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{Error, Result};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// Unvalidated team data as received from a transport adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamInput {
    pub id: String,
    pub name: String,
    pub group: String,
}

impl TeamInput {
    pub fn new(id: impl Into<String>, name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: group.into(),
        }
    }
}

/// Team data derived from a validated, stored entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamOutput {
    pub id: String,
    pub name: String,
    pub group: String,
}

impl From<&Team> for TeamOutput {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            group: team.group().to_string(),
        }
    }
}

impl From<Team> for TeamOutput {
    fn from(team: Team) -> Self {
        Self::from(&team)
    }
}

/// Team use cases exposed to transport adapters
///
/// Every returned error is already classified; callers only map its kind.
#[async_trait]
pub trait TeamService: Send + Sync {
    /// Validate and persist a new team
    async fn create(&self, input: TeamInput) -> Result<TeamOutput>;

    /// Fetch a team by id
    async fn get(&self, id: &str) -> Result<TeamOutput>;

    /// Delete a team by id
    async fn remove(&self, id: &str) -> Result<()>;

    /// List every team, empty when none exist
    async fn get_all(&self) -> Result<Vec<TeamOutput>>;
}

/// TeamService backed by a [`TeamRepository`]
pub struct DefaultTeamService {
    team_repository: Arc<dyn TeamRepository>,
}

impl DefaultTeamService {
    pub fn new(team_repository: Arc<dyn TeamRepository>) -> Self {
        Self { team_repository }
    }
}

#[async_trait]
impl TeamService for DefaultTeamService {
    async fn create(&self, input: TeamInput) -> Result<TeamOutput> {
        let team = Team::new(input.id, input.name, input.group)
            .map_err(|e| e.context("error on create domain team"))?;

        let team = self
            .team_repository
            .insert_one(team)
            .await
            .map_err(|e| e.context("error on insert domain team"))?;

        Ok(TeamOutput::from(team))
    }

    async fn get(&self, id: &str) -> Result<TeamOutput> {
        if id.is_empty() {
            return Err(Error::invalid_argument("team id is required"));
        }

        let team = self
            .team_repository
            .find_one(id)
            .await
            .map_err(|e| e.context("error on find team by id"))?;

        Ok(TeamOutput::from(team))
    }

    async fn remove(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(Error::invalid_argument("team id is required"));
        }

        self.team_repository
            .delete_one(id)
            .await
            .map_err(|e| e.context("error on delete team by id"))
    }

    async fn get_all(&self) -> Result<Vec<TeamOutput>> {
        let teams = self
            .team_repository
            .find()
            .await
            .map_err(|e| e.context("error on find all teams"))?;

        Ok(teams.iter().map(TeamOutput::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mock::MockTeamRepository;
    use crate::domain::errors::ErrorKind;

    fn brazil() -> Team {
        Team::new("brazil", "Brazil", "A").unwrap()
    }

    fn service(repository: &Arc<MockTeamRepository>) -> DefaultTeamService {
        DefaultTeamService::new(repository.clone())
    }

    #[tokio::test]
    async fn create_team_successfully() {
        let repository = Arc::new(MockTeamRepository::new().with_insert_one(|team| {
            assert_eq!(team, brazil());
            Ok(team)
        }));

        let output = service(&repository)
            .create(TeamInput::new("brazil", "Brazil", "A"))
            .await
            .unwrap();

        assert_eq!(output, TeamOutput::from(brazil()));
        assert_eq!(repository.insert_one_invoked_count(), 1);
    }

    #[tokio::test]
    async fn create_team_with_invalid_input_never_reaches_storage() {
        let repository = Arc::new(MockTeamRepository::new());

        let err = service(&repository)
            .create(TeamInput::new("brazil", "", "A"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            err.to_string(),
            "error on create domain team: error creating team without 'name': invalid argument"
        );
        assert_eq!(repository.insert_one_invoked_count(), 0);
    }

    #[tokio::test]
    async fn create_team_propagates_duplicate_key() {
        let repository = Arc::new(
            MockTeamRepository::new().with_insert_one(|_| Err(Error::new(ErrorKind::DuplicateKey))),
        );

        let err = service(&repository)
            .create(TeamInput::new("brazil", "Brazil", "A"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        assert_eq!(err.to_string(), "error on insert domain team: duplicate key");
    }

    #[tokio::test]
    async fn get_team_successfully() {
        let repository = Arc::new(MockTeamRepository::new().with_find_one(|id| {
            assert_eq!(id, "brazil");
            Ok(brazil())
        }));

        let output = service(&repository).get("brazil").await.unwrap();

        assert_eq!(output.name, "Brazil");
        assert_eq!(repository.find_one_invoked_count(), 1);
    }

    #[tokio::test]
    async fn get_team_with_empty_id_never_reaches_storage() {
        let repository = Arc::new(MockTeamRepository::new());

        let err = service(&repository).get("").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "team id is required: invalid argument");
        assert_eq!(repository.find_one_invoked_count(), 0);
    }

    #[tokio::test]
    async fn get_team_propagates_not_found() {
        let repository = Arc::new(
            MockTeamRepository::new()
                .with_find_one(|id| Err(Error::not_found(format!("error to get team with id '{}'", id)))),
        );

        let err = service(&repository).get("china").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "error on find team by id: error to get team with id 'china': not found"
        );
    }

    #[tokio::test]
    async fn get_team_propagates_unknown() {
        let repository = Arc::new(
            MockTeamRepository::new().with_find_one(|_| Err(Error::unknown("pool timed out"))),
        );

        let err = service(&repository).get("brazil").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unknown);
    }

    #[tokio::test]
    async fn remove_team_successfully() {
        let repository = Arc::new(MockTeamRepository::new().with_delete_one(|id| {
            assert_eq!(id, "brazil");
            Ok(())
        }));

        service(&repository).remove("brazil").await.unwrap();

        assert_eq!(repository.delete_one_invoked_count(), 1);
    }

    #[tokio::test]
    async fn remove_team_with_empty_id_never_reaches_storage() {
        let repository = Arc::new(MockTeamRepository::new());

        let err = service(&repository).remove("").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(repository.delete_one_invoked_count(), 0);
    }

    #[tokio::test]
    async fn remove_team_propagates_not_found() {
        let repository = Arc::new(
            MockTeamRepository::new().with_delete_one(|_| Err(Error::new(ErrorKind::NotFound))),
        );

        let err = service(&repository).remove("china").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "error on delete team by id: not found");
    }

    #[tokio::test]
    async fn get_all_teams_successfully() {
        let repository = Arc::new(MockTeamRepository::new().with_find(|| {
            Ok(vec![brazil(), Team::new("qatar", "Qatar", "A").unwrap()])
        }));

        let outputs = service(&repository).get_all().await.unwrap();

        let ids: Vec<&str> = outputs.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["brazil", "qatar"]);
        assert_eq!(repository.find_invoked_count(), 1);
    }

    #[tokio::test]
    async fn get_all_teams_on_empty_store_returns_empty_list() {
        let repository = Arc::new(MockTeamRepository::new().with_find(|| Ok(Vec::new())));

        let outputs = service(&repository).get_all().await.unwrap();

        assert!(outputs.is_empty());
    }

    #[tokio::test]
    async fn get_all_teams_propagates_unknown() {
        let repository = Arc::new(
            MockTeamRepository::new().with_find(|| Err(Error::unknown("cursor closed"))),
        );

        let err = service(&repository).get_all().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(err.to_string(), "error on find all teams: cursor closed");
    }
}
