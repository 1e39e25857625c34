// Storage ports consumed by the application layer

pub mod team_repository;

pub use team_repository::TeamRepository;
