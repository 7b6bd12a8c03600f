pub mod activity;
pub mod feeding;
pub mod health_record;
pub mod health_status;
pub mod livestock;
pub mod quantity;
pub mod user;
