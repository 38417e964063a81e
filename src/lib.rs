//! Admin client for the music catalog API: token storage, the
//! authenticated request helper, one resource per entity, and the page
//! controllers that drive the dashboard's list / create / paginate flows.

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
