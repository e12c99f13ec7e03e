//! In-memory port implementations for tests.
//!
//! `InMemoryInventory` implements every backend port against a local
//! state and records each call, so tests can assert exactly which
//! requests a service issued. Individual operations can be made to fail.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    Category, Component, ComponentQuery, ComponentWrite, ImageUpload, NewCategory, Page,
    Pagination, ParsedPart, QrScan, StockChange, StockLog,
};
use crate::ports::{
    ApiError, ApiResult, CategoryPort, ComponentPort, ImagePort, Notice, Notifier,
    PartParserPort, StockLogPort,
};

/// One recorded port call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListCategories,
    GetCategory(i64),
    CreateCategory(String),
    UpdateCategory(i64, String),
    DeleteCategory(i64),
    ListComponents(ComponentQuery),
    GetComponent(i64),
    CreateComponent(ComponentWrite),
    UpdateComponent(i64, ComponentWrite),
    DeleteComponent(i64),
    AdjustStock(i64, StockChange),
    ComponentLogs(i64),
    UploadImage(i64),
    FetchImage(i64),
    ListStockLogs(u32, u32),
    ParseCode(String),
    ParseQrCode(String),
    Platforms,
}

/// Operations that can be forced to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListCategories,
    CreateCategory,
    UpdateCategory,
    DeleteCategory,
    ListComponents,
    CreateComponent,
    UpdateComponent,
    DeleteComponent,
    AdjustStock,
    ComponentLogs,
    UploadImage,
    FetchImage,
    ParseCode,
    ParseQrCode,
}

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    components: Vec<Component>,
    logs: Vec<StockLog>,
    images: HashMap<i64, Vec<u8>>,
    parsed: HashMap<String, ParsedPart>,
    scans: HashMap<String, QrScan>,
    next_category_id: i64,
    next_component_id: i64,
    next_log_id: i64,
    failing: HashSet<Operation>,
    calls: Vec<Call>,
}

/// In-memory backend implementing all inventory ports.
pub struct InMemoryInventory {
    state: Mutex<State>,
}

impl Default for InMemoryInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_category_id: 1,
                next_component_id: 1,
                next_log_id: 1,
                ..State::default()
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a category with a fixed ID.
    #[must_use]
    pub fn with_category(self, id: i64, name: &str) -> Self {
        {
            let mut state = self.state();
            state.categories.push(Category {
                id,
                name: name.to_string(),
                parent_id: None,
            });
            state.next_category_id = state.next_category_id.max(id + 1);
        }
        self
    }

    /// Seed a component with a fixed ID.
    #[must_use]
    pub fn with_component(self, id: i64, category_id: i64, name: &str, stock: i64) -> Self {
        {
            let mut state = self.state();
            state.components.push(Component {
                id,
                category_id,
                category: None,
                name: name.to_string(),
                value: String::new(),
                package: String::new(),
                description: String::new(),
                stock_quantity: stock,
                location: String::new(),
                datasheet_url: String::new(),
                image_url: String::new(),
                created_at: None,
                updated_at: None,
            });
            state.next_component_id = state.next_component_id.max(id + 1);
        }
        self
    }

    /// Answer `parse_code(code)` with `part`.
    #[must_use]
    pub fn with_parsed_part(self, code: &str, part: ParsedPart) -> Self {
        self.state().parsed.insert(code.to_string(), part);
        self
    }

    /// Answer `parse_qrcode(payload)` with `scan`.
    #[must_use]
    pub fn with_scan(self, payload: &str, scan: QrScan) -> Self {
        self.state().scans.insert(payload.to_string(), scan);
        self
    }

    /// Make every future call of `operation` fail.
    #[must_use]
    pub fn failing(self, operation: Operation) -> Self {
        self.state().failing.insert(operation);
        self
    }

    /// Every call recorded so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state().calls.iter().filter(|c| pred(c)).count()
    }

    /// Forget recorded calls, keeping the data.
    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    pub fn categories(&self) -> Vec<Category> {
        self.state().categories.clone()
    }

    pub fn components(&self) -> Vec<Component> {
        self.state().components.clone()
    }

    pub fn image(&self, component_id: i64) -> Option<Vec<u8>> {
        self.state().images.get(&component_id).cloned()
    }

    /// Record `call`, then fail if `operation` is marked failing.
    fn enter(&self, call: Call, operation: Option<Operation>) -> ApiResult<MutexGuard<'_, State>> {
        let mut state = self.state();
        state.calls.push(call);
        if operation.is_some_and(|op| state.failing.contains(&op)) {
            return Err(ApiError::Rejected {
                status: 500,
                message: "injected failure".to_string(),
            });
        }
        Ok(state)
    }
}

fn not_found(kind: &str, id: i64) -> ApiError {
    ApiError::NotFound {
        resource: format!("{kind} {id}"),
    }
}

fn materialize(state: &State, id: i64, write: &ComponentWrite) -> Component {
    Component {
        id,
        category_id: write.category_id,
        category: state
            .categories
            .iter()
            .find(|c| c.id == write.category_id)
            .cloned(),
        name: write.name.clone(),
        value: write.value.clone(),
        package: write.package.clone(),
        description: write.description.clone(),
        stock_quantity: write.stock_quantity,
        location: write.location.clone(),
        datasheet_url: write.datasheet_url.clone(),
        image_url: write.image_url.clone(),
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    }
}

fn embed_category(state: &State, component: &Component) -> Component {
    let mut component = component.clone();
    component.category = state
        .categories
        .iter()
        .find(|c| c.id == component.category_id)
        .cloned();
    component
}

fn paginate<T: Clone>(items: &[T], page: u32, page_size: u32) -> Page<T> {
    let page = page.max(1);
    let size = page_size.max(1) as usize;
    let start = (page as usize - 1) * size;
    let total = items.len() as u64;
    Page {
        items: items.iter().skip(start).take(size).cloned().collect(),
        pagination: Pagination {
            page,
            page_size,
            total,
            total_page: total.div_ceil(size as u64),
        },
    }
}

#[async_trait]
impl CategoryPort for InMemoryInventory {
    async fn list(&self) -> ApiResult<Vec<Category>> {
        let state = self.enter(Call::ListCategories, Some(Operation::ListCategories))?;
        Ok(state.categories.clone())
    }

    async fn get(&self, id: i64) -> ApiResult<Category> {
        let state = self.enter(Call::GetCategory(id), None)?;
        state
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found("category", id))
    }

    async fn create(&self, category: &NewCategory) -> ApiResult<Category> {
        let mut state = self.enter(
            Call::CreateCategory(category.name.clone()),
            Some(Operation::CreateCategory),
        )?;
        let created = Category {
            id: state.next_category_id,
            name: category.name.clone(),
            parent_id: None,
        };
        state.next_category_id += 1;
        state.categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, category: &NewCategory) -> ApiResult<Category> {
        let mut state = self.enter(
            Call::UpdateCategory(id, category.name.clone()),
            Some(Operation::UpdateCategory),
        )?;
        let existing = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("category", id))?;
        existing.name.clone_from(&category.name);
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        let mut state = self.enter(Call::DeleteCategory(id), Some(Operation::DeleteCategory))?;
        state.categories.retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl ComponentPort for InMemoryInventory {
    async fn list(&self, query: &ComponentQuery) -> ApiResult<Page<Component>> {
        let state = self.enter(
            Call::ListComponents(query.clone()),
            Some(Operation::ListComponents),
        )?;
        let keyword = query.keyword.as_deref().map(str::to_lowercase);
        let matching: Vec<Component> = state
            .components
            .iter()
            .filter(|c| query.category_id.is_none_or(|id| c.category_id == id))
            .filter(|c| {
                keyword
                    .as_deref()
                    .is_none_or(|k| c.name.to_lowercase().contains(k))
            })
            .map(|c| embed_category(&state, c))
            .collect();
        Ok(paginate(&matching, query.page, query.page_size))
    }

    async fn get(&self, id: i64) -> ApiResult<Component> {
        let state = self.enter(Call::GetComponent(id), None)?;
        state
            .components
            .iter()
            .find(|c| c.id == id)
            .map(|c| embed_category(&state, c))
            .ok_or_else(|| not_found("component", id))
    }

    async fn create(&self, component: &ComponentWrite) -> ApiResult<Component> {
        let mut state = self.enter(
            Call::CreateComponent(component.clone()),
            Some(Operation::CreateComponent),
        )?;
        let id = state.next_component_id;
        state.next_component_id += 1;
        let created = materialize(&state, id, component);
        state.components.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, component: &ComponentWrite) -> ApiResult<Component> {
        let mut state = self.enter(
            Call::UpdateComponent(id, component.clone()),
            Some(Operation::UpdateComponent),
        )?;
        let updated = materialize(&state, id, component);
        let existing = state
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("component", id))?;
        *existing = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        let mut state = self.enter(Call::DeleteComponent(id), Some(Operation::DeleteComponent))?;
        state.components.retain(|c| c.id != id);
        Ok(())
    }

    async fn adjust_stock(&self, id: i64, change: &StockChange) -> ApiResult<Component> {
        let mut state = self.enter(
            Call::AdjustStock(id, change.clone()),
            Some(Operation::AdjustStock),
        )?;
        let log_id = state.next_log_id;
        let component = state
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("component", id))?;
        if component.stock_quantity + change.amount < 0 {
            return Err(ApiError::Rejected {
                status: 400,
                message: "insufficient stock".to_string(),
            });
        }
        component.stock_quantity += change.amount;
        let updated = component.clone();
        state.next_log_id += 1;
        state.logs.push(StockLog {
            id: log_id,
            component_id: id,
            component: None,
            change_amount: change.amount,
            reason: change.reason.clone(),
            created_at: Utc::now(),
        });
        Ok(updated)
    }

    async fn logs(&self, id: i64, limit: Option<u32>) -> ApiResult<Vec<StockLog>> {
        let state = self.enter(Call::ComponentLogs(id), Some(Operation::ComponentLogs))?;
        let limit = limit.unwrap_or(50) as usize;
        Ok(state
            .logs
            .iter()
            .rev()
            .filter(|l| l.component_id == id)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ImagePort for InMemoryInventory {
    async fn upload(&self, component_id: i64, image: &ImageUpload) -> ApiResult<()> {
        let mut state = self.enter(
            Call::UploadImage(component_id),
            Some(Operation::UploadImage),
        )?;
        state.images.insert(component_id, image.bytes.clone());
        Ok(())
    }

    async fn fetch(&self, component_id: i64) -> ApiResult<Option<Vec<u8>>> {
        let state = self.enter(Call::FetchImage(component_id), Some(Operation::FetchImage))?;
        Ok(state.images.get(&component_id).cloned())
    }

    fn image_url(&self, component_id: i64) -> String {
        format!("/api/v1/components/{component_id}/image?t=0")
    }
}

#[async_trait]
impl StockLogPort for InMemoryInventory {
    async fn list(&self, page: u32, page_size: u32) -> ApiResult<Page<StockLog>> {
        let state = self.enter(Call::ListStockLogs(page, page_size), None)?;
        let newest_first: Vec<StockLog> = state.logs.iter().rev().cloned().collect();
        Ok(paginate(&newest_first, page, page_size))
    }
}

#[async_trait]
impl PartParserPort for InMemoryInventory {
    async fn parse_code(&self, code: &str) -> ApiResult<ParsedPart> {
        let state = self.enter(Call::ParseCode(code.to_string()), Some(Operation::ParseCode))?;
        state.parsed.get(code).cloned().ok_or(ApiError::Rejected {
            status: 400,
            message: "unrecognized platform code".to_string(),
        })
    }

    async fn parse_qrcode(&self, payload: &str) -> ApiResult<QrScan> {
        let state = self.enter(
            Call::ParseQrCode(payload.to_string()),
            Some(Operation::ParseQrCode),
        )?;
        state.scans.get(payload).cloned().ok_or(ApiError::Rejected {
            status: 400,
            message: "unrecognized QR payload".to_string(),
        })
    }

    async fn platforms(&self) -> ApiResult<Vec<String>> {
        let _state = self.enter(Call::Platforms, None)?;
        Ok(vec!["LCSC".to_string()])
    }
}

/// A notifier that keeps every notice for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages of every notice, in order.
    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }

    /// Messages of error notices only.
    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(Notice::is_error)
            .map(|n| n.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}
