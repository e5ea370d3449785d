use anyhow::Result;
use flow::{LocationPicker, ReservationForm, SubmitOutcome};
use kernel::model::geo::GeoPoint;
use kernel::model::user::Identity;
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::env::{which, Environment};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    bootstrap().await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

/// Headless smoke flow: sign in, open a form and a picker, register one
/// trip against the configured document store.
async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let registry = AppRegistry::new(&app_config);

    let uid = std::env::var("TRIP_UID").unwrap_or_else(|_| "u1".to_string());
    let display_name = std::env::var("TRIP_USER").unwrap_or_else(|_| "Ana".to_string());
    registry.session().sign_in(Identity::new(uid.into(), display_name));

    let identity = registry.identity_provider();
    let mut form = ReservationForm::open(
        identity.as_ref(),
        registry.document_store(),
        registry.feedback_presenter(),
    );
    form.set_vehicle("Toyota Yaris");
    form.set_plate("AB1234");
    form.set_slot(2);
    form.set_price(1000.0);

    let mut picker = LocationPicker::new(registry.map_surface(), registry.geolocator());
    picker.open("map", &app_config.map).await?;
    let destination = std::env::var("TRIP_DESTINATION")
        .ok()
        .and_then(|raw| raw.parse::<GeoPoint>().ok())
        .unwrap_or(LocationPicker::FALLBACK_CENTER);
    picker.click(destination, &mut form);

    if form.take_photo(registry.image_picker().as_ref()).await? {
        form.upload_photo(registry.blob_store().as_ref()).await?;
    }

    match form.submit().await? {
        SubmitOutcome::Stored { path } => tracing::info!(%path, "trip registered"),
        SubmitOutcome::Rejected => tracing::warn!("form rejected by validation"),
        SubmitOutcome::Failed => tracing::error!("trip registration failed"),
    }

    identity.sign_out();
    Ok(())
}
