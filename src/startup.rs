use crate::{
    app_state::AppState,
    configuration::{ApplicationSettings, DatabaseSettings, Settings},
    request_id::RequestUuid,
    routes::{health_check, subscriptions},
    storage::{PostgresSubscriptionStore, SubscriptionStore},
    telemetry::request_span,
};
use anyhow::Context;
use axum::Router;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub struct Application {
    local_addr: SocketAddr,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Connects to Postgres, applies pending migrations and binds the listener.
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let db_pool = get_connection_pool(&config.database);

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("Failed to migrate the database")?;

        let store = Arc::new(PostgresSubscriptionStore::new(db_pool));
        let application = Self::build_with_store(&config.application, store)
            .await
            .context("Failed to bind the application listener")?;

        Ok(application)
    }

    pub async fn build_with_store(
        config: &ApplicationSettings,
        store: Arc<dyn SubscriptionStore>,
    ) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            local_addr,
            listener,
            router: router(AppState { store }),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("Listening on {}", self.local_addr);
        axum::serve(self.listener, self.router).await
    }
}

pub fn get_connection_pool(config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(config.with_db())
}

fn router(app_state: AppState) -> Router {
    Router::new()
        .merge(health_check::router())
        .merge(subscriptions::router())
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(RequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
