//! Core of the hamster-bin inventory client.
//!
//! - [`domain`]: records, drafts and form-side types
//! - [`ports`]: the backend and notification traits adapters implement
//! - [`services`]: the save workflow, the components screen and the
//!   smaller per-resource services, composed by [`AppCore`]
//!
//! No HTTP, terminal or filesystem concerns live here beyond reading a
//! local image file into memory.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use domain::{
    Category, Component, ComponentDraft, ComponentQuery, ComponentWrite, DEFAULT_PAGE_SIZE,
    DraftError, ImageSource, ImageUpload, NewCategory, Page, Pagination, ParsedPart, QrCodeInfo,
    QrScan, SaveMode, SaveRequest, StockChange, StockDirection, StockLog,
};
pub use ports::{
    ApiError, ApiResult, CategoryPort, ComponentPort, CoreError, ImagePort, InventoryPorts,
    NoopNotifier, Notice, NoticeLevel, Notifier, PartParserPort, SaveError, StockLogPort,
};
pub use services::{
    AppCore, CategoryService, ComponentsScreen, ComponentsView, DashboardService, DashboardStats,
    FormState, ImageOutcome, ParseService, SaveOutcome, SaveState, SaveWorkflow, StockForm,
    StockService,
};
