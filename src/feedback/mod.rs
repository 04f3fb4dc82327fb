pub mod service;
pub mod template;

use std::sync::Arc;

use bevy_app::App;
use bevy_ecs::message::Messages;

use crate::model::{Language, Resolution, WasteItem};
use crate::session::commands::SessionCommand;
use crate::session::state::LevelSession;
use crate::settings::GameSettings;

pub use service::{
    ExplanationError, ExplanationRequest, ExplanationResult, ExplanationService,
    HttpExplanationService,
};
pub use template::local_message;

/// Builds the message shown with a feedback card.
///
/// With no service configured (or enrichment disabled in settings) it is the
/// local template alone. With a service it asks the remote collaborator and
/// falls back unconditionally on any failure; the player never sees an
/// error state, only a message.
#[derive(Clone, Default)]
pub struct FeedbackComposer {
    service: Option<Arc<dyn ExplanationService>>,
}

impl FeedbackComposer {
    pub fn local_only() -> Self {
        Self { service: None }
    }

    pub fn with_service(service: Arc<dyn ExplanationService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// Build a composer from the player's settings. Enrichment disabled means
    /// no service gets constructed at all; the local template is the whole
    /// composer.
    pub fn from_settings(
        settings: &GameSettings,
        endpoint: &str,
    ) -> ExplanationResult<Self> {
        if !settings.enrichment_enabled {
            return Ok(Self::local_only());
        }
        let service = HttpExplanationService::new(
            endpoint,
            &settings.explanation_model,
            settings.explanation_timeout,
        )?;
        Ok(Self::with_service(Arc::new(service)))
    }

    /// Compose a message for a resolution. Never empty, synchronously
    /// available when no service is configured, and eventually available
    /// within the service timeout otherwise.
    pub async fn compose(
        &self,
        item: &WasteItem,
        resolution: Resolution,
        language: Language,
    ) -> String {
        if let Some(service) = &self.service {
            let request = ExplanationRequest::for_resolution(item, resolution, language);
            match service.explain(&request).await {
                Ok(message) if !message.trim().is_empty() => return message,
                Ok(_) => {
                    tracing::warn!("explanation service returned an empty message; using local fallback");
                }
                Err(err) => {
                    tracing::warn!("feedback enrichment failed; using local fallback: {err}");
                }
            }
        }
        template::local_message(item, resolution, language)
    }

    /// Best-effort upgrade of the feedback card currently pending in `app`.
    ///
    /// Captures the card's token before awaiting, so a response that lands
    /// after the session moved on is discarded by the applicator. The card
    /// already shows the local message; on any service failure it simply
    /// stays as it is. Returns whether an enrichment command was queued.
    pub async fn enrich_pending(&self, app: &mut App) -> bool {
        let Some(service) = &self.service else {
            return false;
        };

        let (token, request) = {
            let session = app.world().resource::<LevelSession>();
            let Some(token) = session.pending_token() else {
                return false;
            };
            let Some(feedback) = session.pending_feedback() else {
                return false;
            };
            (
                token,
                ExplanationRequest::from_feedback(feedback, session.language()),
            )
        };

        match service.explain(&request).await {
            Ok(message) => {
                app.world_mut()
                    .resource_mut::<Messages<SessionCommand>>()
                    .write(SessionCommand::ApplyEnrichment { token, message });
                true
            }
            Err(err) => {
                tracing::warn!("feedback enrichment failed; keeping local message: {err}");
                false
            }
        }
    }
}
