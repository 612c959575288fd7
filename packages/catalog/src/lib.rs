pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod query;
