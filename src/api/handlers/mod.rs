pub mod info;
pub mod teams;
