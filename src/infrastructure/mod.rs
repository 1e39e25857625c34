// Infrastructure layer module
// Contains storage adapters and process-level integrations

pub mod logging;
pub mod repositories;
