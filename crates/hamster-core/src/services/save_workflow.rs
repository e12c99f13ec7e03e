//! Save workflow - the component form submission as an explicit state machine.
//!
//! ```text
//! Idle -> ValidatingCategory -> ResolvingCategory -> PersistingComponent
//!      -> AttachingImage (only with a pending upload) -> Done
//! ```
//!
//! Validation, category resolution and persistence can fail terminally.
//! A failed image upload still ends in `Done`. Nothing is rolled back:
//! an auto-created category stays even if the component write fails.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Category, ComponentWrite, ImageUpload, SaveMode, SaveRequest};
use crate::ports::{CategoryPort, ComponentPort, ImagePort, Notice, Notifier, SaveError};

use super::category_resolver::CategoryResolver;
use super::component_persister::ComponentPersister;
use super::image_attacher::{ImageAttacher, ImageOutcome};

/// Final result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub component_id: i64,
    pub mode: SaveMode,
    /// The category created during this save, if any.
    pub created_category: Option<Category>,
    pub image: ImageOutcome,
}

/// One state of a save in progress.
#[derive(Debug)]
pub enum SaveState {
    Idle(SaveRequest),
    ValidatingCategory(SaveRequest),
    ResolvingCategory(SaveRequest),
    PersistingComponent {
        mode: SaveMode,
        write: ComponentWrite,
        upload: Option<ImageUpload>,
        created_category: Option<Category>,
    },
    AttachingImage {
        mode: SaveMode,
        component_id: i64,
        upload: ImageUpload,
        created_category: Option<Category>,
    },
    Done(SaveOutcome),
    Failed(SaveError),
}

impl SaveState {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_) | Self::Failed(_))
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::Idle(_) => "idle",
            Self::ValidatingCategory(_) => "validating_category",
            Self::ResolvingCategory(_) => "resolving_category",
            Self::PersistingComponent { .. } => "persisting_component",
            Self::AttachingImage { .. } => "attaching_image",
            Self::Done(_) => "done",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for SaveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs one form submission through category resolution, the component
/// write and the optional image upload.
pub struct SaveWorkflow {
    resolver: CategoryResolver,
    persister: ComponentPersister,
    attacher: ImageAttacher,
    notifier: Arc<dyn Notifier>,
}

impl SaveWorkflow {
    pub fn new(
        categories: Arc<dyn CategoryPort>,
        components: Arc<dyn ComponentPort>,
        images: Arc<dyn ImagePort>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            resolver: CategoryResolver::new(categories, Arc::clone(&notifier)),
            persister: ComponentPersister::new(components, Arc::clone(&notifier)),
            attacher: ImageAttacher::new(images, Arc::clone(&notifier)),
            notifier,
        }
    }

    /// Drive `request` to a terminal state.
    ///
    /// `known` is the caller's current category list, used for matching.
    pub async fn run(
        &self,
        request: SaveRequest,
        known: &[Category],
    ) -> Result<SaveOutcome, SaveError> {
        let mut state = SaveState::Idle(request);
        loop {
            state = match state {
                SaveState::Done(outcome) => return Ok(outcome),
                SaveState::Failed(err) => return Err(err),
                pending => self.step(pending, known).await,
            };
        }
    }

    /// Perform exactly one transition.
    ///
    /// Terminal states are returned unchanged.
    pub async fn step(&self, state: SaveState, known: &[Category]) -> SaveState {
        let from = state.name();
        let next = match state {
            SaveState::Idle(request) => SaveState::ValidatingCategory(request),
            SaveState::ValidatingCategory(request) => self.validate(request),
            SaveState::ResolvingCategory(request) => self.resolve(request, known).await,
            SaveState::PersistingComponent {
                mode,
                write,
                upload,
                created_category,
            } => self.persist(mode, &write, upload, created_category).await,
            SaveState::AttachingImage {
                mode,
                component_id,
                upload,
                created_category,
            } => {
                let image = self.attacher.attach(component_id, &upload).await;
                SaveState::Done(SaveOutcome {
                    component_id,
                    mode,
                    created_category,
                    image,
                })
            }
            terminal @ (SaveState::Done(_) | SaveState::Failed(_)) => terminal,
        };
        debug!(from, to = next.name(), "Save workflow transition");
        next
    }

    fn validate(&self, request: SaveRequest) -> SaveState {
        let failure = if request.category_input.trim().is_empty() {
            Some(SaveError::MissingCategory)
        } else {
            request.draft.validate().err().map(SaveError::from)
        };
        match failure {
            Some(err) => {
                self.notifier.notify(Notice::error(err.to_string()));
                SaveState::Failed(err)
            }
            None => SaveState::ResolvingCategory(request),
        }
    }

    async fn resolve(&self, request: SaveRequest, known: &[Category]) -> SaveState {
        let resolution = match self.resolver.resolve(known, &request.category_input).await {
            Ok(resolution) => resolution,
            Err(err) => return SaveState::Failed(err),
        };
        match request.draft.into_write(resolution.category_id) {
            Ok(write) => SaveState::PersistingComponent {
                mode: request.mode,
                write,
                upload: request.draft.image.pending_upload().cloned(),
                created_category: resolution.created,
            },
            Err(err) => SaveState::Failed(err.into()),
        }
    }

    async fn persist(
        &self,
        mode: SaveMode,
        write: &ComponentWrite,
        upload: Option<ImageUpload>,
        created_category: Option<Category>,
    ) -> SaveState {
        let saved = match self.persister.save(mode, write).await {
            Ok(saved) => saved,
            Err(err) => {
                self.notifier.notify(Notice::error("Save failed"));
                return SaveState::Failed(err);
            }
        };
        match upload {
            Some(upload) => SaveState::AttachingImage {
                mode,
                component_id: saved.id,
                upload,
                created_category,
            },
            None => SaveState::Done(SaveOutcome {
                component_id: saved.id,
                mode,
                created_category,
                image: ImageOutcome::NotRequested,
            }),
        }
    }
}
