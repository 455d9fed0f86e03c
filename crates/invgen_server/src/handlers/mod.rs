pub mod categories;
pub mod generate;
pub mod health;
pub mod roles;
