use crate::domain::errors::{Error, Result};

/// Team entity
///
/// A team taking part in the tournament, identified by an external id
/// that also serves as its storage key.
///
/// # Invariants
/// - `id`, `name` and `group` are never empty
/// - Immutable once constructed
///
/// # Example
/// ```
/// use fifa_wct_api::domain::team::Team;
///
/// let team = Team::new("brazil", "Brazil", "A").expect("valid team");
///
/// assert_eq!(team.id(), "brazil");
/// assert_eq!(team.group(), "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: String,
    name: String,
    group: String,
}

impl Team {
    /// Creates a new Team
    ///
    /// # Returns
    /// * `Ok(Team)` - All three attributes are non-empty
    /// * `Err(Error)` - `InvalidArgument` naming the first empty field,
    ///   checked in the order id, name, group
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        group: impl Into<String>,
    ) -> Result<Self> {
        let (id, name, group) = (id.into(), name.into(), group.into());

        for (field, value) in [("id", &id), ("name", &name), ("group", &group)] {
            if value.is_empty() {
                return Err(Error::invalid_argument(format!(
                    "error creating team without '{}'",
                    field
                )));
            }
        }

        Ok(Self { id, name, group })
    }

    /// Returns the team's ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the team's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group label the team plays in
    pub fn group(&self) -> &str {
        &self.group
    }
}
