use std::net::SocketAddr;

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use garage_booking_backend::{
    config::Config,
    db,
    entities::notification_template,
    middleware::rate_limit::log_request,
    routes,
    utils::notify,
    AppState,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garage_booking_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Starting server at {}", config.server_addr());

    // Connect to database
    let db = db::connect(&config)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Connected to database");

    // Run migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Migrations complete");

    // Seed notification templates the booking lifecycle emits against
    seed_notification_templates(&db).await;

    // Create app state
    let state = AppState {
        db,
        config: config.clone(),
    };

    // Create router with middleware
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(axum::middleware::from_fn(log_request));

    // Start server with socket address for rate limiting
    let addr: SocketAddr = config.server_addr().parse().expect("Invalid address");
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Failed to start server");
}

/// Seed a template row per lifecycle notification type if it doesn't exist
async fn seed_notification_templates(db: &sea_orm::DatabaseConnection) {
    for template_type in notify::TEMPLATE_TYPES {
        let existing = notification_template::Entity::find()
            .filter(notification_template::Column::TemplateType.eq(template_type))
            .one(db)
            .await
            .expect("Failed to check for notification template");

        if existing.is_none() {
            let template = notification_template::ActiveModel {
                id: Set(Uuid::new_v4()),
                template_type: Set(template_type.to_string()),
                body: Set(format!("Your booking has a new event: {template_type}")),
            };

            template
                .insert(db)
                .await
                .expect("Failed to create notification template");
            tracing::info!("Notification template created: {}", template_type);
        }
    }
}
