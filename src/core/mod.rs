pub mod algorithms;
pub mod auth;
pub mod backup;
pub mod export;
pub mod feeding;
pub mod health;
pub mod livestock;
pub mod log;
pub mod setup;
