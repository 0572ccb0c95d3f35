//! Offer CRUD and search endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use od_core::repositories::{
    CategoryRepository, CustomerRepository, OfferRepository, OrderRepository,
    SupplierRepository, UserRepository,
};

use crate::dto::offer::{
    CreateOfferRequest, OfferResponse, OfferSearchQuery, UpdateOfferRequest,
};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/v1/offers
pub async fn create_offer<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    request: web::Json<CreateOfferRequest>,
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
        .offer_service
        .create_offer(
            &request.name,
            request.price,
            request.offer_type,
            request.description.clone(),
            request.category_id,
            request.supplier_id,
        )
        .await
    {
        Ok(offer) => HttpResponse::Created().json(OfferResponse::from(offer)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/offers/{id}
pub async fn get_offer<Ca, Su, Cu, Us, Of, Or>(
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
    match state.offer_service.get_offer(path.into_inner()).await {
        Ok(offer) => HttpResponse::Ok().json(OfferResponse::from(offer)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/offers
pub async fn search_offers<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    query: web::Query<OfferSearchQuery>,
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
        .offer_service
        .search_offers(query.filter(), query.pagination())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page.map(OfferResponse::from)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/offers/{id}
pub async fn update_offer<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateOfferRequest>,
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
        .offer_service
        .update_offer(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(offer) => HttpResponse::Ok().json(OfferResponse::from(offer)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/offers/{id}
pub async fn delete_offer<Ca, Su, Cu, Us, Of, Or>(
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
    match state.offer_service.delete_offer(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
