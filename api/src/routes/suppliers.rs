//! Supplier CRUD and search endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use od_core::repositories::{
    CategoryRepository, CustomerRepository, OfferRepository, OrderRepository,
    SupplierRepository, UserRepository,
};

use crate::dto::supplier::{
    CreateSupplierRequest, SupplierResponse, SupplierSearchQuery, UpdateSupplierRequest,
};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/v1/suppliers
pub async fn create_supplier<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    request: web::Json<CreateSupplierRequest>,
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
        .supplier_service
        .create_supplier(&request.name, &request.email, &request.phone)
        .await
    {
        Ok(supplier) => HttpResponse::Created().json(SupplierResponse::from(supplier)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/suppliers/{id}
pub async fn get_supplier<Ca, Su, Cu, Us, Of, Or>(
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
    match state.supplier_service.get_supplier(path.into_inner()).await {
        Ok(supplier) => HttpResponse::Ok().json(SupplierResponse::from(supplier)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/suppliers
pub async fn search_suppliers<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    query: web::Query<SupplierSearchQuery>,
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
        .supplier_service
        .search_suppliers(query.filter(), query.pagination())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page.map(SupplierResponse::from)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/suppliers/{id}
pub async fn update_supplier<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateSupplierRequest>,
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
        .supplier_service
        .update_supplier(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(supplier) => HttpResponse::Ok().json(SupplierResponse::from(supplier)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/suppliers/{id}
pub async fn delete_supplier<Ca, Su, Cu, Us, Of, Or>(
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
        .supplier_service
        .delete_supplier(path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
