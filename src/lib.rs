pub mod app;
pub mod domain;
pub mod infra;
pub mod observability;
pub mod platform;
pub mod ui;
pub mod usecase;
