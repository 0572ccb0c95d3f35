//! OrderDesk API server binary.
//!
//! Wires the MySQL repositories into the core services with explicit
//! constructor-based composition and starts the actix-web server.

use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use od_api::app::create_app;
use od_api::routes::AppState;
use od_core::services::{
    AuthService, CategoryService, CustomerService, OfferService, OrderService, SupplierService,
    TokenService, UserService,
};
use od_infra::{
    create_pool, MySqlCategoryRepository, MySqlCustomerRepository, MySqlOfferRepository,
    MySqlOrderRepository, MySqlSupplierRepository, MySqlUserRepository,
};
use od_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.environment.is_production() && config.jwt.is_using_default_secret() {
        warn!("running in production with the default JWT secret");
    }

    // Database pool and repositories
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let category_repository = Arc::new(MySqlCategoryRepository::new(pool.clone()));
    let supplier_repository = Arc::new(MySqlSupplierRepository::new(pool.clone()));
    let customer_repository = Arc::new(MySqlCustomerRepository::new(pool.clone()));
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let offer_repository = Arc::new(MySqlOfferRepository::new(pool.clone()));
    let order_repository = Arc::new(MySqlOrderRepository::new(pool));

    // Services, composed explicitly
    let token_service = Arc::new(TokenService::new(config.jwt.clone().into()));
    let app_state = web::Data::new(AppState {
        category_service: Arc::new(CategoryService::new(category_repository.clone())),
        supplier_service: Arc::new(SupplierService::new(supplier_repository.clone())),
        customer_service: Arc::new(CustomerService::new(customer_repository.clone())),
        user_service: Arc::new(UserService::new(user_repository.clone())),
        offer_service: Arc::new(OfferService::new(
            offer_repository.clone(),
            category_repository,
            supplier_repository,
        )),
        order_service: Arc::new(OrderService::new(
            order_repository,
            offer_repository,
            customer_repository,
            user_repository.clone(),
        )),
        auth_service: Arc::new(AuthService::new(user_repository, token_service.clone())),
    });

    let bind_address = config.server.bind_address();
    info!(%bind_address, "starting OrderDesk API server");

    let cors_config = config.cors.clone();
    let workers = config.server.workers;

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), token_service.clone(), &cors_config)
    });
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}
