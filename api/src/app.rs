//! Application factory: route tree, middleware, health endpoint.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use od_core::repositories::{
    CategoryRepository, CustomerRepository, OfferRepository, OrderRepository,
    SupplierRepository, UserRepository,
};
use od_core::services::TokenService;
use od_shared::config::CorsConfig;

use crate::middleware::auth::JwtAuth;
use crate::middleware::cors::create_cors;
use crate::routes::{auth, categories, customers, offers, orders, suppliers, users, AppState};

/// Create and configure the application with all dependencies.
///
/// Everything except `/health` and the login endpoint sits behind the JWT
/// middleware.
pub fn create_app<Ca, Su, Cu, Us, Of, Or>(
    app_state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    token_service: Arc<TokenService>,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            actix_web::body::EitherBody<
                tracing_actix_web::StreamSpan<actix_web::body::BoxBody>,
            >,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    Ca: CategoryRepository + 'static,
    Su: SupplierRepository + 'static,
    Cu: CustomerRepository + 'static,
    Us: UserRepository + 'static,
    Of: OfferRepository + 'static,
    Or: OrderRepository + 'static,
{
    let cors = create_cors(cors_config);

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login::<Ca, Su, Cu, Us, Of, Or>))
                        .route(
                            "/me",
                            web::get()
                                .to(auth::me::<Ca, Su, Cu, Us, Of, Or>)
                                .wrap(JwtAuth::new(token_service.clone())),
                        ),
                )
                .service(
                    web::scope("/categories")
                        .wrap(JwtAuth::new(token_service.clone()))
                        .route("", web::post().to(categories::create_category::<Ca, Su, Cu, Us, Of, Or>))
                        .route("", web::get().to(categories::search_categories::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::get().to(categories::get_category::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::put().to(categories::update_category::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::delete().to(categories::delete_category::<Ca, Su, Cu, Us, Of, Or>)),
                )
                .service(
                    web::scope("/suppliers")
                        .wrap(JwtAuth::new(token_service.clone()))
                        .route("", web::post().to(suppliers::create_supplier::<Ca, Su, Cu, Us, Of, Or>))
                        .route("", web::get().to(suppliers::search_suppliers::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::get().to(suppliers::get_supplier::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::put().to(suppliers::update_supplier::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::delete().to(suppliers::delete_supplier::<Ca, Su, Cu, Us, Of, Or>)),
                )
                .service(
                    web::scope("/customers")
                        .wrap(JwtAuth::new(token_service.clone()))
                        .route("", web::post().to(customers::create_customer::<Ca, Su, Cu, Us, Of, Or>))
                        .route("", web::get().to(customers::search_customers::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::get().to(customers::get_customer::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::put().to(customers::update_customer::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::delete().to(customers::delete_customer::<Ca, Su, Cu, Us, Of, Or>)),
                )
                .service(
                    web::scope("/users")
                        .wrap(JwtAuth::new(token_service.clone()))
                        .route("", web::post().to(users::create_user::<Ca, Su, Cu, Us, Of, Or>))
                        .route("", web::get().to(users::search_users::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::get().to(users::get_user::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::put().to(users::update_user::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}/password", web::put().to(users::change_password::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::delete().to(users::delete_user::<Ca, Su, Cu, Us, Of, Or>)),
                )
                .service(
                    web::scope("/offers")
                        .wrap(JwtAuth::new(token_service.clone()))
                        .route("", web::post().to(offers::create_offer::<Ca, Su, Cu, Us, Of, Or>))
                        .route("", web::get().to(offers::search_offers::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::get().to(offers::get_offer::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::put().to(offers::update_offer::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::delete().to(offers::delete_offer::<Ca, Su, Cu, Us, Of, Or>)),
                )
                .service(
                    web::scope("/orders")
                        .wrap(JwtAuth::new(token_service))
                        .route("", web::post().to(orders::create_order::<Ca, Su, Cu, Us, Of, Or>))
                        .route("", web::get().to(orders::search_orders::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::get().to(orders::get_order::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}", web::delete().to(orders::delete_order::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}/status", web::patch().to(orders::change_order_status::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}/items", web::post().to(orders::add_order_item::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}/items/{item_id}", web::patch().to(orders::update_order_item::<Ca, Su, Cu, Us, Of, Or>))
                        .route("/{id}/items/{item_id}", web::delete().to(orders::remove_order_item::<Ca, Su, Cu, Us, Of, Or>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "orderdesk-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
