//! Domain types for the inventory.
//!
//! These types describe backend records and client-side form state,
//! independent of how they travel over HTTP.

mod category;
mod component;
mod draft;
mod image;
mod page;
mod parse;
mod stock;

pub use category::{Category, NewCategory, find_by_name};
pub use component::{Component, ComponentQuery, ComponentWrite, DEFAULT_PAGE_SIZE};
pub use draft::{ComponentDraft, DraftError, SaveMode, SaveRequest};
pub use image::{ImageSource, ImageUpload, content_type_for};
pub use page::{Page, Pagination};
pub use parse::{ParsedPart, QrCodeInfo, QrScan};
pub use stock::{StockChange, StockDirection, StockLog};
