use anyhow::Result;
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub firestore: FirestoreConfig,
    pub storage: StorageConfig,
    pub map: MapConfig,
    pub geolocation: GeolocationConfig,
}

#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub base_url: String,
    pub project_id: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub base_url: String,
    pub bucket: String,
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub style: String,
    pub access_token: Option<String>,
    pub default_zoom: f64,
}

#[derive(Debug, Clone)]
pub struct GeolocationConfig {
    pub endpoint: String,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        dotenv().ok();

        let firestore = FirestoreConfig {
            base_url: env::var("FIRESTORE_BASE_URL")
                .unwrap_or_else(|_| "https://firestore.googleapis.com".to_string()),
            project_id: env::var("FIRESTORE_PROJECT_ID")
                .unwrap_or_else(|_| "parking-app".to_string()),
            api_key: env::var("FIRESTORE_API_KEY").ok(),
        };

        let storage = StorageConfig {
            base_url: env::var("STORAGE_BASE_URL")
                .unwrap_or_else(|_| "https://firebasestorage.googleapis.com".to_string()),
            bucket: env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| format!("{}.appspot.com", firestore.project_id)),
        };

        let map = MapConfig {
            style: env::var("MAP_STYLE")
                .unwrap_or_else(|_| "mapbox://styles/mapbox/streets-v11".to_string()),
            access_token: env::var("MAP_ACCESS_TOKEN").ok(),
            default_zoom: env::var("MAP_DEFAULT_ZOOM")
                .unwrap_or_else(|_| "12".to_string())
                .parse()
                .unwrap_or(12.0),
        };

        let geolocation = GeolocationConfig {
            endpoint: env::var("GEOLOCATION_ENDPOINT")
                .unwrap_or_else(|_| "https://ipapi.co/json/".to_string()),
        };

        Ok(Self {
            firestore,
            storage,
            map,
            geolocation,
        })
    }
}
