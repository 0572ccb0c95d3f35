//! Authentication endpoints.

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use validator::Validate;

use od_core::repositories::{
    CategoryRepository, CustomerRepository, OfferRepository, OrderRepository,
    SupplierRepository, UserRepository,
};

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::dto::user::UserResponse;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Checks email and password and returns a bearer token on success.
///
/// # Errors
/// - 400 Bad Request: malformed request data
/// - 401 Unauthorized: unknown email or wrong password
/// - 403 Forbidden: account disabled
pub async fn login<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    Ca: CategoryRepository + 'static,
    Su: SupplierRepository + 'static,
    Cu: CustomerRepository + 'static,
    Us: UserRepository + 'static,
    Of: OfferRepository + 'static,
    Or: OrderRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(LoginResponse::from(token)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/auth/me
///
/// Returns the user the presented token was issued for. The JWT middleware
/// has already verified the token; this re-resolves the user so a deleted or
/// deactivated account is rejected even with a formally valid token.
pub async fn me<Ca, Su, Cu, Us, Of, Or>(
    req: HttpRequest,
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
) -> HttpResponse
where
    Ca: CategoryRepository + 'static,
    Su: SupplierRepository + 'static,
    Cu: CustomerRepository + 'static,
    Us: UserRepository + 'static,
    Of: OfferRepository + 'static,
    Or: OrderRepository + 'static,
{
    let user_id = match req.extensions().get::<AuthContext>() {
        Some(context) => context.user_id,
        None => {
            return HttpResponse::Unauthorized().json(od_shared::types::ErrorResponse::new(
                "unauthorized",
                "Authentication required",
            ));
        }
    };

    match state.user_service.get_user(user_id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
