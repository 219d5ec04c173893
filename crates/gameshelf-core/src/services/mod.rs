//! Core services.
//!
//! Services orchestrate ports; they hold no storage details of their own.

mod app_core;
mod catalog_service;
mod game_detail;

pub use app_core::AppCore;
pub use catalog_service::CatalogService;
pub use game_detail::GameDetailService;
