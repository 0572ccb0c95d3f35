//! User CRUD, search and password endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use od_core::repositories::{
    CategoryRepository, CustomerRepository, OfferRepository, OrderRepository,
    SupplierRepository, UserRepository,
};

use crate::dto::user::{
    ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, UserResponse, UserSearchQuery,
};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/v1/users
pub async fn create_user<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    request: web::Json<CreateUserRequest>,
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
        .user_service
        .create_user(
            &request.email,
            &request.password,
            &request.full_name,
            request.role,
        )
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/users/{id}
pub async fn get_user<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    Ca: CategoryRepository + 'static,
    Su: SupplierRepository + 'static,
    Cu: CustomerRepository + 'static,
    Us: UserRepository + 'static,
    Of: OfferRepository + 'static,
    Or: OrderRepository + 'static,
{
    match state.user_service.get_user(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/users
pub async fn search_users<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    query: web::Query<UserSearchQuery>,
) -> HttpResponse
where
    Ca: CategoryRepository + 'static,
    Su: SupplierRepository + 'static,
    Cu: CustomerRepository + 'static,
    Us: UserRepository + 'static,
    Of: OfferRepository + 'static,
    Or: OrderRepository + 'static,
{
    match state
        .user_service
        .search_users(query.filter(), query.pagination())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page.map(UserResponse::from)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/users/{id}
pub async fn update_user<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateUserRequest>,
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
        .user_service
        .update_user(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/users/{id}/password
pub async fn change_password<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    path: web::Path<Uuid>,
    request: web::Json<ChangePasswordRequest>,
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
        .user_service
        .change_password(path.into_inner(), &request.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/users/{id}
pub async fn delete_user<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    Ca: CategoryRepository + 'static,
    Su: SupplierRepository + 'static,
    Cu: CustomerRepository + 'static,
    Us: UserRepository + 'static,
    Of: OfferRepository + 'static,
    Or: OrderRepository + 'static,
{
    match state.user_service.delete_user(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
