pub mod client;
pub mod mapping;
pub mod master;
