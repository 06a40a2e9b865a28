use std::sync::Arc;

use auth::Authenticator;
use order_service::config::Config;
use order_service::customer::service::CustomerService;
use order_service::dashboard::aggregator::Aggregator;
use order_service::dashboard::classifier::CountryTable;
use order_service::dashboard::revenue::EstimatedRevenue;
use order_service::dashboard::service::DashboardService;
use order_service::inbound::http::router::create_router;
use order_service::inbound::http::router::AppState;
use order_service::order::service::OrderService;
use order_service::outbound::repositories::PostgresCustomerRepository;
use order_service::outbound::repositories::PostgresOrderRepository;
use order_service::outbound::repositories::PostgresUserRepository;
use order_service::user::service::AuthService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "order-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        cors_origins = ?config.server.cors_origins,
        token_ttl_hours = config.jwt.expiration_hours,
        items_per_order = config.dashboard.items_per_order,
        unit_price = config.dashboard.unit_price,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes()).with_token_ttl(config.jwt.token_ttl()?),
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let customer_repository = Arc::new(PostgresCustomerRepository::new(pg_pool.clone()));
    let order_repository = Arc::new(PostgresOrderRepository::new(pg_pool));

    let aggregator = Aggregator::new(
        CountryTable::default(),
        Box::new(EstimatedRevenue::new(
            config.dashboard.items_per_order,
            config.dashboard.unit_price,
        )),
    );

    let state = AppState {
        auth_service: Arc::new(AuthService::new(user_repository, authenticator)),
        customer_service: Arc::new(CustomerService::new(Arc::clone(&customer_repository))),
        order_service: Arc::new(OrderService::new(
            Arc::clone(&order_repository),
            Arc::clone(&customer_repository),
        )),
        dashboard_service: Arc::new(DashboardService::new(
            order_repository,
            customer_repository,
            aggregator,
        )),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, &config.server.cors_origins);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
