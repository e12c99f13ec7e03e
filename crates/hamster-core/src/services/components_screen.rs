//! Components screen - headless controller for the component list and its
//! dialogs.
//!
//! The screen owns the current page, the active filters, a category cache
//! and exactly one [`ComponentsView`]. Opening a dialog replaces the view,
//! so two dialogs can never be open at once.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    Category, Component, ComponentDraft, ComponentQuery, ImageUpload, Page, SaveMode, SaveRequest,
    StockChange, StockDirection, StockLog,
};
use crate::ports::{CoreError, InventoryPorts, Notice, Notifier, SaveError};

use super::parse_service::ParseService;
use super::save_workflow::{SaveOutcome, SaveWorkflow};
use super::stock_service::StockService;

/// The add/edit component dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub mode: SaveMode,
    /// Free-text category, resolved on submit.
    pub category_input: String,
    pub draft: ComponentDraft,
    /// Image shown next to the form. `None` while a local file is pending.
    pub preview_url: Option<String>,
}

impl FormState {
    /// Empty create-mode form.
    pub fn new() -> Self {
        Self {
            mode: SaveMode::Create,
            category_input: String::new(),
            draft: ComponentDraft::new(),
            preview_url: None,
        }
    }

    pub fn request(&self) -> SaveRequest {
        SaveRequest {
            category_input: self.category_input.clone(),
            draft: self.draft.clone(),
            mode: self.mode,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// The stock in/out dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockForm {
    pub component: Component,
    pub direction: StockDirection,
    pub amount: u32,
    pub reason: String,
}

impl StockForm {
    /// Defaults to taking one unit in.
    pub const fn new(component: Component) -> Self {
        Self {
            component,
            direction: StockDirection::In,
            amount: 1,
            reason: String::new(),
        }
    }

    pub fn change(&self) -> StockChange {
        StockChange::new(self.direction, self.amount, self.reason.clone())
    }
}

/// What the components screen currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ComponentsView {
    #[default]
    List,
    Form(FormState),
    Stock(StockForm),
    Logs {
        component: Component,
        logs: Vec<StockLog>,
    },
    /// Waiting for a QR payload. A form open before scanning is kept
    /// aside and receives the scan.
    Scanner { return_to: Option<FormState> },
    ImagePreview { url: String },
}

impl ComponentsView {
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List)
    }

    pub const fn form(&self) -> Option<&FormState> {
        match self {
            Self::Form(form) => Some(form),
            _ => None,
        }
    }
}

fn no_form() -> CoreError {
    CoreError::Validation("No component form is open".to_string())
}

pub struct ComponentsScreen {
    ports: InventoryPorts,
    notifier: Arc<dyn Notifier>,
    workflow: SaveWorkflow,
    stock: StockService,
    parse: ParseService,
    query: ComponentQuery,
    page: Page<Component>,
    categories: Vec<Category>,
    view: ComponentsView,
}

impl ComponentsScreen {
    pub fn new(ports: InventoryPorts, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            workflow: SaveWorkflow::new(
                Arc::clone(&ports.categories),
                Arc::clone(&ports.components),
                Arc::clone(&ports.images),
                Arc::clone(&notifier),
            ),
            stock: StockService::new(
                Arc::clone(&ports.components),
                Arc::clone(&ports.stock_logs),
            ),
            parse: ParseService::new(Arc::clone(&ports.parser)),
            ports,
            notifier,
            query: ComponentQuery::default(),
            page: Page::default(),
            categories: Vec::new(),
            view: ComponentsView::List,
        }
    }

    pub const fn view(&self) -> &ComponentsView {
        &self.view
    }

    pub const fn page(&self) -> &Page<Component> {
        &self.page
    }

    pub const fn query(&self) -> &ComponentQuery {
        &self.query
    }

    /// Cached categories, used to resolve form input.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub const fn form(&self) -> Option<&FormState> {
        self.view.form()
    }

    pub const fn form_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.view {
            ComponentsView::Form(form) => Some(form),
            _ => None,
        }
    }

    pub const fn stock_form_mut(&mut self) -> Option<&mut StockForm> {
        match &mut self.view {
            ComponentsView::Stock(form) => Some(form),
            _ => None,
        }
    }

    /// Return to the list, discarding any open dialog.
    pub fn close(&mut self) {
        self.view = ComponentsView::List;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch the categories and the first page.
    pub async fn load(&mut self) -> Result<(), CoreError> {
        self.refresh_categories().await;
        self.fetch(1).await
    }

    /// Reload the category cache. A failure keeps the old cache.
    pub async fn refresh_categories(&mut self) {
        match self.ports.categories.list().await {
            Ok(categories) => self.categories = categories,
            Err(e) => warn!(error = %e, "Failed to load categories"),
        }
    }

    /// Apply new filters and go back to page 1.
    pub async fn search(
        &mut self,
        keyword: Option<String>,
        category_id: Option<i64>,
    ) -> Result<(), CoreError> {
        self.search_page(keyword, category_id, 1).await
    }

    /// Apply new filters and land directly on `page` with one request.
    pub async fn search_page(
        &mut self,
        keyword: Option<String>,
        category_id: Option<i64>,
        page: u32,
    ) -> Result<(), CoreError> {
        self.query = self
            .query
            .clone()
            .with_keyword(keyword)
            .with_category(category_id);
        self.fetch(page.max(1)).await
    }

    pub async fn go_to_page(&mut self, page: u32) -> Result<(), CoreError> {
        self.fetch(page).await
    }

    /// Refetch the current page.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        self.fetch(self.query.page).await
    }

    async fn fetch(&mut self, page: u32) -> Result<(), CoreError> {
        let query = self.query.clone().with_page(page);
        debug!(page = query.page, keyword = ?query.keyword, category = ?query.category_id, "Fetching components");
        match self.ports.components.list(&query).await {
            Ok(page) => {
                self.query = query;
                self.page = page;
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .notify(Notice::error("Failed to load components"));
                Err(e.into())
            }
        }
    }

    async fn refetch_after_write(&mut self) {
        if let Err(e) = self.refresh().await {
            debug!(error = %e, "Refetch after write failed");
        }
    }

    /// Get one component with its category embedded.
    pub async fn find(&self, id: i64) -> Result<Component, CoreError> {
        Ok(self.ports.components.get(id).await?)
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), CoreError> {
        if let Err(e) = self.ports.components.delete(id).await {
            self.notifier.notify(Notice::error("Delete failed"));
            return Err(e.into());
        }
        info!(id, "Component deleted");
        self.notifier.notify(Notice::success("Deleted"));
        self.refetch_after_write().await;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────────────────────

    /// Open the add/edit form.
    ///
    /// A component with an ID opens in edit mode; anything else creates.
    pub fn open_form(&mut self, component: Option<&Component>) {
        let form = match component {
            Some(c) if c.id > 0 => FormState {
                mode: SaveMode::Update { id: c.id },
                category_input: self.category_name_of(c),
                draft: ComponentDraft::from_component(c),
                preview_url: Some(self.ports.images.image_url(c.id)),
            },
            Some(c) => FormState {
                category_input: self.category_name_of(c),
                draft: ComponentDraft::from_component(c),
                ..FormState::new()
            },
            None => FormState::new(),
        };
        self.view = ComponentsView::Form(form);
    }

    fn category_name_of(&self, component: &Component) -> String {
        component
            .category_name()
            .or_else(|| {
                self.categories
                    .iter()
                    .find(|c| c.id == component.category_id)
                    .map(|c| c.name.as_str())
            })
            .unwrap_or_default()
            .to_string()
    }

    /// Look up a vendor code and merge the result into the open form.
    ///
    /// A blank code does nothing.
    pub async fn apply_parsed_code(&mut self, code: &str) -> Result<(), CoreError> {
        if self.form().is_none() {
            return Err(no_form());
        }
        if code.trim().is_empty() {
            return Ok(());
        }
        let part = match self.parse.parse_code(code).await {
            Ok(part) => part,
            Err(e) => {
                self.notifier.notify(Notice::error("Parse failed"));
                return Err(e);
            }
        };
        if let Some(form) = self.form_mut() {
            form.draft.apply_parsed(&part);
            if !part.image_url.is_empty() {
                form.preview_url = Some(part.image_url.clone());
            }
        }
        self.notifier.notify(Notice::success("Parsed successfully"));
        Ok(())
    }

    /// Attach a local image file. Clears any external image URL.
    pub fn select_image(&mut self, upload: ImageUpload) -> Result<(), CoreError> {
        let form = self.form_mut().ok_or_else(no_form)?;
        form.draft.select_image(upload);
        form.preview_url = None;
        Ok(())
    }

    /// Use an external image URL. Drops any pending local file.
    pub fn set_image_url(&mut self, url: &str) -> Result<(), CoreError> {
        let form = self.form_mut().ok_or_else(no_form)?;
        form.draft.set_image_url(url);
        form.preview_url = (!url.is_empty()).then(|| url.to_string());
        Ok(())
    }

    /// Submit the open form.
    ///
    /// On success the form closes and the current page is refetched. On
    /// failure the form stays open with its input intact.
    pub async fn submit_form(&mut self) -> Result<SaveOutcome, CoreError> {
        let request = self.form().map(FormState::request).ok_or_else(no_form)?;
        let result = self.workflow.run(request, &self.categories).await;

        // A category may have been created before the component write failed.
        let category_may_exist = match &result {
            Ok(outcome) => outcome.created_category.is_some(),
            Err(e) => matches!(e, SaveError::PersistFailed(_)),
        };
        if category_may_exist {
            self.refresh_categories().await;
        }

        let outcome = result?;
        self.view = ComponentsView::List;
        self.refetch_after_write().await;
        Ok(outcome)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // QR scanning
    // ─────────────────────────────────────────────────────────────────────────

    /// Wait for a QR payload, keeping an open form aside.
    pub fn open_scanner(&mut self) {
        let return_to = match std::mem::take(&mut self.view) {
            ComponentsView::Form(form) => Some(form),
            _ => None,
        };
        self.view = ComponentsView::Scanner { return_to };
    }

    /// Decode a reel label payload.
    ///
    /// With a form open the scan is merged into it. Otherwise a new
    /// create form is opened, pre-filled from the scan.
    pub async fn handle_scan(&mut self, payload: &str) -> Result<(), CoreError> {
        let open_form = match std::mem::take(&mut self.view) {
            ComponentsView::Form(form)
            | ComponentsView::Scanner {
                return_to: Some(form),
            } => Some(form),
            _ => None,
        };

        let scan = match self.parse.parse_qrcode(payload).await {
            Ok(scan) => scan,
            Err(e) => {
                self.notifier.notify(Notice::error("QR code parse failed"));
                self.view = open_form.map_or(ComponentsView::List, ComponentsView::Form);
                return Err(e);
            }
        };

        let scanned_category = scan
            .component
            .category
            .as_ref()
            .map(|c| c.name.clone())
            .filter(|name| !name.is_empty());

        let form = match open_form {
            Some(mut form) => {
                form.draft.apply_scan(&scan);
                if let Some(name) = scanned_category {
                    form.category_input = name;
                }
                self.notifier.notify(Notice::success("Component recognized"));
                form
            }
            None => {
                self.notifier.notify(Notice::success(format!(
                    "Recognized: {}",
                    scan.component.display_name()
                )));
                let mut form = FormState::new();
                form.draft.apply_scan(&scan);
                form.category_input = scanned_category.unwrap_or_default();
                form
            }
        };
        debug!(quantity = scan.quantity, code = %scan.qrcode_info.code, "QR scan applied");
        self.view = ComponentsView::Form(form);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stock and logs
    // ─────────────────────────────────────────────────────────────────────────

    pub fn open_stock(&mut self, component: Component) {
        self.view = ComponentsView::Stock(StockForm::new(component));
    }

    /// Apply the open stock form. Returns the component with its new stock.
    pub async fn submit_stock(&mut self) -> Result<Component, CoreError> {
        let (id, change) = match &self.view {
            ComponentsView::Stock(form) => (form.component.id, form.change()),
            _ => return Err(CoreError::Validation("No stock form is open".to_string())),
        };
        match self.stock.adjust(id, &change).await {
            Ok(component) => {
                self.notifier.notify(Notice::success("Stock updated"));
                self.view = ComponentsView::List;
                self.refetch_after_write().await;
                Ok(component)
            }
            Err(e) => {
                self.notifier.notify(Notice::error("Stock update failed"));
                Err(e)
            }
        }
    }

    /// Show the stock history of one component.
    pub async fn open_logs(&mut self, component: Component) -> Result<(), CoreError> {
        let id = component.id;
        self.view = ComponentsView::Logs {
            component,
            logs: Vec::new(),
        };
        match self.stock.component_logs(id, None).await {
            Ok(fetched) => {
                if let ComponentsView::Logs { logs, .. } = &mut self.view {
                    *logs = fetched;
                }
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .notify(Notice::error("Failed to load stock logs"));
                Err(e)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Images
    // ─────────────────────────────────────────────────────────────────────────

    pub fn open_image_preview(&mut self, component_id: i64) {
        self.view = ComponentsView::ImagePreview {
            url: self.ports.images.image_url(component_id),
        };
    }

    /// Download a component's image, `None` if it has none.
    pub async fn fetch_image(&self, component_id: i64) -> Result<Option<Vec<u8>>, CoreError> {
        Ok(self.ports.images.fetch(component_id).await?)
    }
}
