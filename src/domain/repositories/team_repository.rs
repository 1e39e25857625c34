use async_trait::async_trait;

use crate::domain::errors::Result;
use crate::domain::team::Team;

/// Repository trait for Team entities
///
/// Implementations classify their native failures before returning:
/// uniqueness violations become `DuplicateKey`, missing targets become
/// `NotFound`, and everything else becomes `Unknown`.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team keyed by its id
    async fn insert_one(&self, team: Team) -> Result<Team>;

    /// Find a team by its id
    async fn find_one(&self, id: &str) -> Result<Team>;

    /// Delete a team by its id; `NotFound` if nothing matched
    async fn delete_one(&self, id: &str) -> Result<()>;

    /// List every stored team in store order
    async fn find(&self) -> Result<Vec<Team>>;
}
