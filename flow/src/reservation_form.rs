use crate::model::trip_form::TripForm;
use chrono::{Local, Utc};
use kernel::model::feedback::Toast;
use kernel::model::geo::GeoPoint;
use kernel::repository::blob::BlobStore;
use kernel::repository::document::DocumentStore;
use kernel::repository::feedback::FeedbackPresenter;
use kernel::repository::identity::IdentityProvider;
use kernel::repository::image::ImagePicker;
use shared::error::{AppError, AppResult};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const SUCCESS_MESSAGE: &str = "El viaje se ha registrado correctamente";

const PHOTO_PROMPT: &str = "imagen";

// Single attempt, no retry. The bound exists so a hung write surfaces as
// a visible failure instead of a loading indicator that never goes away.
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Written at `path`; the form can be discarded.
    Stored { path: String },
    /// Validation failed; nothing was called and no feedback was raised.
    Rejected,
    /// The write failed or timed out; the fields stay populated so the
    /// user can resubmit.
    Failed,
}

/// One open reservation form: holds the trip fields, validates them, and
/// orchestrates submission. Collaborators are injected at construction.
pub struct ReservationForm {
    fields: TripForm,
    documents: Arc<dyn DocumentStore>,
    feedback: Arc<dyn FeedbackPresenter>,
}

impl ReservationForm {
    /// Opens a fresh form. Identity fields are prefilled when a session
    /// exists and stay blank otherwise; `date`/`time` are stamped from
    /// the local clock.
    pub fn open(
        identity: &dyn IdentityProvider,
        documents: Arc<dyn DocumentStore>,
        feedback: Arc<dyn FeedbackPresenter>,
    ) -> Self {
        let now = Local::now();
        let mut fields = TripForm {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            ..TripForm::default()
        };
        if let Some(identity) = identity.current() {
            fields.uid = identity.id;
            fields.name = identity.display_name;
        }
        Self {
            fields,
            documents,
            feedback,
        }
    }

    pub fn fields(&self) -> &TripForm {
        &self.fields
    }

    pub fn set_vehicle(&mut self, vehicle: impl Into<String>) {
        self.fields.vehicle = vehicle.into();
    }

    pub fn set_plate(&mut self, plate: impl Into<String>) {
        self.fields.plate = plate.into();
    }

    pub fn set_slot(&mut self, slot: u32) {
        self.fields.slot = Some(slot);
    }

    pub fn set_price(&mut self, price: f64) {
        self.fields.price = Some(price);
    }

    /// Overwrites the destination with the serialized pair. Called from
    /// the location picker's click path; there is no manual entry path.
    pub fn set_destination(&mut self, at: GeoPoint) {
        self.fields.destination = Some(at.to_string());
    }

    /// Prompts for a photo. A cancelled capture leaves the field as it
    /// was and reports `false`.
    pub async fn take_photo(&mut self, picker: &dyn ImagePicker) -> AppResult<bool> {
        match picker.capture(PHOTO_PROMPT).await? {
            Some(data_url) => {
                self.fields.image = Some(data_url);
                Ok(true)
            }
            None => {
                tracing::debug!("photo capture cancelled");
                Ok(false)
            }
        }
    }

    /// Offloads a captured data URL to blob storage and keeps the
    /// download URL in its place. No-op without a captured photo or when
    /// the field already holds a URL.
    pub async fn upload_photo(&mut self, blobs: &dyn BlobStore) -> AppResult<Option<String>> {
        let Some(image) = &self.fields.image else {
            return Ok(None);
        };
        if !image.starts_with("data:") {
            return Ok(None);
        }
        let path = format!("trips/{}/{}.img", self.fields.uid, Uuid::new_v4());
        let url = blobs.upload(&path, image).await?;
        self.fields.image = Some(url.clone());
        Ok(Some(url))
    }

    /// Pure check of the required-field constraints; never mutates.
    pub fn validate(&self) -> bool {
        self.fields.is_valid()
    }

    /// Submits the reservation. An invalid form is rejected without any
    /// collaborator call or feedback. Otherwise the write is a single
    /// bounded attempt; the loading indicator is dismissed exactly once
    /// whatever the outcome, and a failed write leaves the form intact.
    pub async fn submit(&self) -> AppResult<SubmitOutcome> {
        let Some(record) = self.fields.build_record() else {
            tracing::debug!("submission blocked: form incomplete");
            return Ok(SubmitOutcome::Rejected);
        };
        let document = serde_json::to_value(&record)?;
        let path = record.document_path(Utc::now().timestamp_millis());

        self.feedback.show_loading().await;
        let outcome = match tokio::time::timeout(
            SUBMIT_TIMEOUT,
            self.documents.put(&path, &document),
        )
        .await
        {
            Ok(Ok(())) => {
                tracing::info!(%path, "trip registered");
                self.feedback
                    .present_toast(Toast::success(SUCCESS_MESSAGE))
                    .await;
                SubmitOutcome::Stored { path }
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, %path, "trip write failed");
                self.feedback.present_toast(Toast::error(e.to_string())).await;
                SubmitOutcome::Failed
            }
            Err(_) => {
                let e = AppError::DocumentStoreError(format!(
                    "document write timed out after {}s",
                    SUBMIT_TIMEOUT.as_secs()
                ));
                tracing::error!(error = %e, %path, "trip write timed out");
                self.feedback.present_toast(Toast::error(e.to_string())).await;
                SubmitOutcome::Failed
            }
        };
        self.feedback.dismiss_loading().await;
        Ok(outcome)
    }
}
