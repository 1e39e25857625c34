pub mod recover;
pub mod timeout;

pub use recover::recover_panic;
pub use timeout::handle_timeout;
