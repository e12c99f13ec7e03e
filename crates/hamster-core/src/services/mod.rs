//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They never know
//! which adapter implements a port.

mod app_core;
mod category_resolver;
mod category_service;
mod component_persister;
mod components_screen;
mod dashboard;
mod image_attacher;
mod parse_service;
mod save_workflow;
mod stock_service;

pub use app_core::AppCore;
pub use category_resolver::{CategoryResolver, Resolution};
pub use category_service::CategoryService;
pub use component_persister::{ComponentPersister, SavedComponent};
pub use components_screen::{ComponentsScreen, ComponentsView, FormState, StockForm};
pub use dashboard::{DashboardService, DashboardStats, STOCK_SUM_PAGE_SIZE};
pub use image_attacher::{ImageAttacher, ImageOutcome};
pub use parse_service::ParseService;
pub use save_workflow::{SaveOutcome, SaveState, SaveWorkflow};
pub use stock_service::StockService;
