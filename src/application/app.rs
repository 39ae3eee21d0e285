use crate::api::{self, AppState};
use crate::application::events::{self, EventPublisher};
use crate::config::Settings;
use crate::infrastructure::{Database, DogStore, PictureStore, WalkStore};
use crate::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, instrument};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    db_pool: PgPool,
}

impl Application {
    #[instrument]
    pub async fn new() -> Result<Self> {
        let settings = Settings::new()?;

        info!("Connecting to database at {}", settings.database.host);
        let db_pool = PgPoolOptions::new()
            .max_connections(settings.database.max_connections)
            .connect(&settings.database_url())
            .await?;

        sqlx::migrate!("./migrations").run(&db_pool).await?;

        Ok(Self { settings, db_pool })
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let (publisher, rx) = EventPublisher::channel();
        let consumer = events::spawn_consumer(rx);

        let state = AppState {
            dogs: DogStore::new(self.db_pool.clone()),
            walks: WalkStore::new(self.db_pool.clone()),
            pictures: PictureStore::new(self.settings.pictures.path.clone()),
            events: publisher,
            database: Database::new(self.db_pool.clone()),
        };

        let address = format!(
            "{}:{}",
            self.settings.application.host, self.settings.application.port
        );
        info!("Starting Dogwalk server on {address}");

        let listener = tokio::net::TcpListener::bind(&address).await?;
        axum::serve(listener, api::router(state)).await?;

        consumer.abort();
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }
}
