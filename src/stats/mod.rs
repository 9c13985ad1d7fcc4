//! Aggregate statistics for the dashboard and admin views

pub mod handlers;
pub mod models;
pub mod repository;

pub use repository::StatsRepository;
