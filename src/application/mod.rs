// Application layer module
// Orchestrates use cases between the transport adapters and storage ports

pub mod team_service;

#[cfg(test)]
pub mod mock;

pub use team_service::{DefaultTeamService, TeamInput, TeamOutput, TeamService};
