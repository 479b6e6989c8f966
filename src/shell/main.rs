use arcade_bookings::modules::bookings::adapters::outbound::booking_store_file::FileBookingStore;
use arcade_bookings::modules::bookings::adapters::outbound::booking_store_in_memory::InMemoryBookingStore;
use arcade_bookings::modules::bookings::core::ports::BookingStore;
use arcade_bookings::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use arcade_bookings::shell::config::{Config, StoreBackend};
use arcade_bookings::shell::graphql::{AppSchema, build_schema};
use arcade_bookings::shell::http::router;
use arcade_bookings::shell::state::AppState;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let store: Arc<dyn BookingStore> = match config.store {
        StoreBackend::File => {
            tracing::info!(path = %config.data_file.display(), "using file booking store");
            Arc::new(FileBookingStore::new(&config.data_file))
        }
        StoreBackend::Memory => {
            tracing::info!("using in-memory booking store");
            Arc::new(InMemoryBookingStore::new())
        }
    };
    // Intents stay in process until an email/payment relay is attached.
    let outbox = Arc::new(InMemoryDomainOutbox::new());

    let state = AppState::build(store, outbox, config.policy.clone());
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("bookings API listening on http://{addr}");
    tracing::info!("GraphQL endpoint: http://{addr}/gql");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("bookings API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
