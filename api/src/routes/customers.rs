//! Customer CRUD and search endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use od_core::repositories::{
    CategoryRepository, CustomerRepository, OfferRepository, OrderRepository,
    SupplierRepository, UserRepository,
};

use crate::dto::customer::{
    CreateCustomerRequest, CustomerResponse, CustomerSearchQuery, UpdateCustomerRequest,
};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/v1/customers
pub async fn create_customer<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    request: web::Json<CreateCustomerRequest>,
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
        .customer_service
        .create_customer(
            &request.name,
            &request.email,
            &request.phone,
            request.address.clone(),
        )
        .await
    {
        Ok(customer) => HttpResponse::Created().json(CustomerResponse::from(customer)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/customers/{id}
pub async fn get_customer<Ca, Su, Cu, Us, Of, Or>(
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
    match state.customer_service.get_customer(path.into_inner()).await {
        Ok(customer) => HttpResponse::Ok().json(CustomerResponse::from(customer)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/customers
pub async fn search_customers<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    query: web::Query<CustomerSearchQuery>,
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
        .customer_service
        .search_customers(query.filter(), query.pagination())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page.map(CustomerResponse::from)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/customers/{id}
pub async fn update_customer<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateCustomerRequest>,
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
        .customer_service
        .update_customer(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(customer) => HttpResponse::Ok().json(CustomerResponse::from(customer)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/customers/{id}
pub async fn delete_customer<Ca, Su, Cu, Us, Of, Or>(
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
    match state
        .customer_service
        .delete_customer(path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
