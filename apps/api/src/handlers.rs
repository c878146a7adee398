pub mod auth;
pub mod health;
pub mod roles;
pub mod user_roles;
pub mod users;
