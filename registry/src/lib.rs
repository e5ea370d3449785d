use std::sync::Arc;

use adapter::firestore::FirestoreClient;
use adapter::geoip::IpGeolocator;
use adapter::headless_map::HeadlessMapSurface;
use adapter::memory::MemoryDocumentStore;
use adapter::picker::FileImagePicker;
use adapter::presenter::TracePresenter;
use adapter::session::SessionIdentityProvider;
use adapter::storage::FirebaseStorageClient;
use kernel::repository::blob::BlobStore;
use kernel::repository::document::DocumentStore;
use kernel::repository::feedback::FeedbackPresenter;
use kernel::repository::geolocation::Geolocator;
use kernel::repository::identity::IdentityProvider;
use kernel::repository::image::ImagePicker;
use kernel::repository::map::MapSurface;
use shared::config::AppConfig;
use shared::env::{which, Environment};

#[derive(Clone)]
pub struct AppRegistry {
    document_store: Arc<dyn DocumentStore>,
    blob_store: Arc<dyn BlobStore>,
    session: Arc<SessionIdentityProvider>,
    feedback_presenter: Arc<dyn FeedbackPresenter>,
    geolocator: Arc<dyn Geolocator>,
    map_surface: Arc<dyn MapSurface>,
    image_picker: Arc<dyn ImagePicker>,
}

impl AppRegistry {
    pub fn new(config: &AppConfig) -> Self {
        // Development runs against the in-memory store so the smoke flow
        // needs no credentials.
        let document_store: Arc<dyn DocumentStore> = match which() {
            Environment::Development => Arc::new(MemoryDocumentStore::new()),
            Environment::Production => Arc::new(FirestoreClient::new(&config.firestore)),
        };
        let blob_store = Arc::new(FirebaseStorageClient::new(&config.storage));
        let session = Arc::new(SessionIdentityProvider::new());
        let feedback_presenter = Arc::new(TracePresenter::new());
        let geolocator = Arc::new(IpGeolocator::new(&config.geolocation));
        let map_surface = Arc::new(HeadlessMapSurface::new());
        let image_picker = Arc::new(FileImagePicker::default());
        Self {
            document_store,
            blob_store,
            session,
            feedback_presenter,
            geolocator,
            map_surface,
            image_picker,
        }
    }

    pub fn document_store(&self) -> Arc<dyn DocumentStore> {
        self.document_store.clone()
    }

    pub fn blob_store(&self) -> Arc<dyn BlobStore> {
        self.blob_store.clone()
    }

    pub fn identity_provider(&self) -> Arc<dyn IdentityProvider> {
        self.session.clone()
    }

    /// Concrete session handle, for the shell's sign-in path.
    pub fn session(&self) -> Arc<SessionIdentityProvider> {
        self.session.clone()
    }

    pub fn feedback_presenter(&self) -> Arc<dyn FeedbackPresenter> {
        self.feedback_presenter.clone()
    }

    pub fn geolocator(&self) -> Arc<dyn Geolocator> {
        self.geolocator.clone()
    }

    pub fn map_surface(&self) -> Arc<dyn MapSurface> {
        self.map_surface.clone()
    }

    pub fn image_picker(&self) -> Arc<dyn ImagePicker> {
        self.image_picker.clone()
    }
}
