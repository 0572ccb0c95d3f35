//! Order endpoints: lifecycle of the order aggregate and its line items.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use od_core::repositories::{
    CategoryRepository, CustomerRepository, OfferRepository, OrderRepository,
    SupplierRepository, UserRepository,
};

use crate::dto::order::{
    AddOrderItemRequest, ChangeOrderStatusRequest, CreateOrderRequest, OrderResponse,
    OrderSearchQuery, UpdateOrderItemRequest,
};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/v1/orders
pub async fn create_order<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    request: web::Json<CreateOrderRequest>,
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
        .order_service
        .create_order(request.customer_id, request.user_id)
        .await
    {
        Ok(order) => HttpResponse::Created().json(OrderResponse::from(order)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/orders/{id}
pub async fn get_order<Ca, Su, Cu, Us, Of, Or>(
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
    match state.order_service.get_order(path.into_inner()).await {
        Ok(order) => HttpResponse::Ok().json(OrderResponse::from(order)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/orders
pub async fn search_orders<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    query: web::Query<OrderSearchQuery>,
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
        .order_service
        .search_orders(query.filter(), query.pagination())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page.map(OrderResponse::from)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/orders/{id}/items
pub async fn add_order_item<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    path: web::Path<Uuid>,
    request: web::Json<AddOrderItemRequest>,
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
        .order_service
        .add_item(path.into_inner(), request.offer_id, request.quantity)
        .await
    {
        Ok(order) => HttpResponse::Created().json(OrderResponse::from(order)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PATCH /api/v1/orders/{id}/items/{item_id}
pub async fn update_order_item<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    path: web::Path<(Uuid, Uuid)>,
    request: web::Json<UpdateOrderItemRequest>,
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

    let (order_id, item_id) = path.into_inner();
    match state
        .order_service
        .update_item_quantity(order_id, item_id, request.quantity)
        .await
    {
        Ok(order) => HttpResponse::Ok().json(OrderResponse::from(order)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/orders/{id}/items/{item_id}
pub async fn remove_order_item<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    path: web::Path<(Uuid, Uuid)>,
) -> HttpResponse
where
    Ca: CategoryRepository + 'static,
    Su: SupplierRepository + 'static,
    Cu: CustomerRepository + 'static,
    Us: UserRepository + 'static,
    Of: OfferRepository + 'static,
    Or: OrderRepository + 'static,
{
    let (order_id, item_id) = path.into_inner();
    match state.order_service.remove_item(order_id, item_id).await {
        Ok(order) => HttpResponse::Ok().json(OrderResponse::from(order)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PATCH /api/v1/orders/{id}/status
pub async fn change_order_status<Ca, Su, Cu, Us, Of, Or>(
    state: web::Data<AppState<Ca, Su, Cu, Us, Of, Or>>,
    path: web::Path<Uuid>,
    request: web::Json<ChangeOrderStatusRequest>,
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
        .order_service
        .change_status(path.into_inner(), request.status)
        .await
    {
        Ok(order) => HttpResponse::Ok().json(OrderResponse::from(order)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/orders/{id}
pub async fn delete_order<Ca, Su, Cu, Us, Of, Or>(
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
    match state.order_service.delete_order(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
