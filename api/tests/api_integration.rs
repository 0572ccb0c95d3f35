//! HTTP-level integration tests: the full route tree served over in-memory
//! repositories, exercised with actix test requests.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{test, web};
use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;
use uuid::Uuid;

use od_api::app::create_app;
use od_api::routes::AppState;
use od_core::domain::entities::category::Category;
use od_core::domain::entities::customer::Customer;
use od_core::domain::entities::offer::Offer;
use od_core::domain::entities::order::Order;
use od_core::domain::entities::supplier::Supplier;
use od_core::domain::entities::user::{User, UserRole};
use od_core::errors::DomainError;
use od_core::repositories::{
    CategoryFilter, CategoryRepository, CustomerFilter, CustomerRepository, OfferFilter,
    OfferRepository, OrderFilter, OrderRepository, SupplierFilter, SupplierRepository,
    UserFilter, UserRepository,
};
use od_core::services::{
    AuthService, CategoryService, CustomerService, OfferService, OrderService, SupplierService,
    TokenService, TokenServiceConfig, UserService,
};
use od_shared::config::CorsConfig;
use od_shared::types::Pagination;

// Compact in-memory repositories. Search ignores filters and pagination;
// these tests never rely on either.

macro_rules! in_memory_repository {
    ($name:ident, $entity:ty) => {
        #[derive(Default)]
        struct $name {
            rows: RwLock<HashMap<Uuid, $entity>>,
        }

        impl $name {
            async fn get(&self, id: Uuid) -> Option<$entity> {
                self.rows.read().await.get(&id).cloned()
            }

            async fn put(&self, id: Uuid, entity: $entity) {
                self.rows.write().await.insert(id, entity);
            }

            async fn remove(&self, id: Uuid) -> bool {
                self.rows.write().await.remove(&id).is_some()
            }

            async fn all(&self) -> Vec<$entity> {
                self.rows.read().await.values().cloned().collect()
            }
        }
    };
}

in_memory_repository!(Categories, Category);
in_memory_repository!(Suppliers, Supplier);
in_memory_repository!(Customers, Customer);
in_memory_repository!(Users, User);
in_memory_repository!(Offers, Offer);
in_memory_repository!(Orders, Order);

#[async_trait]
impl CategoryRepository for Categories {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        Ok(self.get(id).await)
    }
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        Ok(self.all().await.into_iter().find(|c| c.name == name))
    }
    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        self.put(category.id, category.clone()).await;
        Ok(category)
    }
    async fn update(&self, category: Category) -> Result<Category, DomainError> {
        self.put(category.id, category.clone()).await;
        Ok(category)
    }
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.remove(id).await)
    }
    async fn search(
        &self,
        _filter: &CategoryFilter,
        _pagination: &Pagination,
    ) -> Result<(Vec<Category>, u64), DomainError> {
        let all = self.all().await;
        let total = all.len() as u64;
        Ok((all, total))
    }
}

#[async_trait]
impl SupplierRepository for Suppliers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>, DomainError> {
        Ok(self.get(id).await)
    }
    async fn find_by_email(&self, email: &str) -> Result<Option<Supplier>, DomainError> {
        Ok(self.all().await.into_iter().find(|s| s.email == email))
    }
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Supplier>, DomainError> {
        Ok(self.all().await.into_iter().find(|s| s.phone == phone))
    }
    async fn create(&self, supplier: Supplier) -> Result<Supplier, DomainError> {
        self.put(supplier.id, supplier.clone()).await;
        Ok(supplier)
    }
    async fn update(&self, supplier: Supplier) -> Result<Supplier, DomainError> {
        self.put(supplier.id, supplier.clone()).await;
        Ok(supplier)
    }
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.remove(id).await)
    }
    async fn search(
        &self,
        _filter: &SupplierFilter,
        _pagination: &Pagination,
    ) -> Result<(Vec<Supplier>, u64), DomainError> {
        let all = self.all().await;
        let total = all.len() as u64;
        Ok((all, total))
    }
}

#[async_trait]
impl CustomerRepository for Customers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        Ok(self.get(id).await)
    }
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        Ok(self.all().await.into_iter().find(|c| c.email == email))
    }
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Customer>, DomainError> {
        Ok(self.all().await.into_iter().find(|c| c.phone == phone))
    }
    async fn create(&self, customer: Customer) -> Result<Customer, DomainError> {
        self.put(customer.id, customer.clone()).await;
        Ok(customer)
    }
    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        self.put(customer.id, customer.clone()).await;
        Ok(customer)
    }
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.remove(id).await)
    }
    async fn search(
        &self,
        _filter: &CustomerFilter,
        _pagination: &Pagination,
    ) -> Result<(Vec<Customer>, u64), DomainError> {
        let all = self.all().await;
        let total = all.len() as u64;
        Ok((all, total))
    }
}

#[async_trait]
impl UserRepository for Users {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.get(id).await)
    }
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.all().await.into_iter().find(|u| u.email == email))
    }
    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.put(user.id, user.clone()).await;
        Ok(user)
    }
    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.put(user.id, user.clone()).await;
        Ok(user)
    }
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.remove(id).await)
    }
    async fn search(
        &self,
        _filter: &UserFilter,
        _pagination: &Pagination,
    ) -> Result<(Vec<User>, u64), DomainError> {
        let all = self.all().await;
        let total = all.len() as u64;
        Ok((all, total))
    }
}

#[async_trait]
impl OfferRepository for Offers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offer>, DomainError> {
        Ok(self.get(id).await)
    }
    async fn find_by_name(&self, name: &str) -> Result<Option<Offer>, DomainError> {
        Ok(self.all().await.into_iter().find(|o| o.name == name))
    }
    async fn create(&self, offer: Offer) -> Result<Offer, DomainError> {
        self.put(offer.id, offer.clone()).await;
        Ok(offer)
    }
    async fn update(&self, offer: Offer) -> Result<Offer, DomainError> {
        self.put(offer.id, offer.clone()).await;
        Ok(offer)
    }
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.remove(id).await)
    }
    async fn search(
        &self,
        _filter: &OfferFilter,
        _pagination: &Pagination,
    ) -> Result<(Vec<Offer>, u64), DomainError> {
        let all = self.all().await;
        let total = all.len() as u64;
        Ok((all, total))
    }
}

#[async_trait]
impl OrderRepository for Orders {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        Ok(self.get(id).await)
    }
    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        self.put(order.id, order.clone()).await;
        Ok(order)
    }
    async fn update(&self, order: Order) -> Result<Order, DomainError> {
        if self.get(order.id).await.is_none() {
            return Err(DomainError::not_found("Order"));
        }
        self.put(order.id, order.clone()).await;
        Ok(order)
    }
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.remove(id).await)
    }
    async fn search(
        &self,
        _filter: &OrderFilter,
        _pagination: &Pagination,
    ) -> Result<(Vec<Order>, u64), DomainError> {
        let all = self.all().await;
        let total = all.len() as u64;
        Ok((all, total))
    }
}

type TestAppState = AppState<Categories, Suppliers, Customers, Users, Offers, Orders>;

const STAFF_EMAIL: &str = "sam@orderdesk.example";
const STAFF_PASSWORD: &str = "correct horse battery staple";

async fn test_state() -> (web::Data<TestAppState>, Arc<TokenService>) {
    let categories = Arc::new(Categories::default());
    let suppliers = Arc::new(Suppliers::default());
    let customers = Arc::new(Customers::default());
    let users = Arc::new(Users::default());
    let offers = Arc::new(Offers::default());
    let orders = Arc::new(Orders::default());

    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "api-test-secret".to_string(),
        ..Default::default()
    }));

    let user_service = Arc::new(UserService::new(users.clone()));
    user_service
        .create_user(STAFF_EMAIL, STAFF_PASSWORD, "Sam Ops", UserRole::Staff)
        .await
        .unwrap();

    let state = web::Data::new(AppState {
        category_service: Arc::new(CategoryService::new(categories.clone())),
        supplier_service: Arc::new(SupplierService::new(suppliers.clone())),
        customer_service: Arc::new(CustomerService::new(customers.clone())),
        user_service,
        offer_service: Arc::new(OfferService::new(
            offers.clone(),
            categories,
            suppliers,
        )),
        order_service: Arc::new(OrderService::new(orders, offers, customers, users.clone())),
        auth_service: Arc::new(AuthService::new(users, token_service.clone())),
    });

    (state, token_service)
}

async fn login<S, B>(app: &S) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": STAFF_EMAIL, "password": STAFF_PASSWORD }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(app, request).await;
    body["access_token"].as_str().unwrap().to_string()
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let (state, token_service) = test_state().await;
    let app =
        test::init_service(create_app(state, token_service, &CorsConfig::default())).await;

    let request = test::TestRequest::get().uri("/health").to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());
}

#[actix_rt::test]
async fn test_login_and_me() {
    let (state, token_service) = test_state().await;
    let app =
        test::init_service(create_app(state, token_service, &CorsConfig::default())).await;

    let token = login(&app).await;

    let request = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["email"], STAFF_EMAIL);
    assert!(body.get("password_hash").is_none());
}

#[actix_rt::test]
async fn test_login_with_wrong_password_is_401() {
    let (state, token_service) = test_state().await;
    let app =
        test::init_service(create_app(state, token_service, &CorsConfig::default())).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": STAFF_EMAIL, "password": "wrong" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[actix_rt::test]
async fn test_protected_routes_require_token() {
    let (state, token_service) = test_state().await;
    let app =
        test::init_service(create_app(state, token_service, &CorsConfig::default())).await;

    let request = test::TestRequest::get().uri("/api/v1/categories").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[actix_rt::test]
async fn test_category_crud_over_http() {
    let (state, token_service) = test_state().await;
    let app =
        test::init_service(create_app(state, token_service, &CorsConfig::default())).await;
    let token = login(&app).await;
    let auth = ("Authorization", format!("Bearer {}", token));

    // Create
    let request = test::TestRequest::post()
        .uri("/api/v1/categories")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "Office Supplies" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = test::read_body_json(response).await;
    let category_id = body["id"].as_str().unwrap().to_string();

    // Duplicate name conflicts
    let request = test::TestRequest::post()
        .uri("/api/v1/categories")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "Office Supplies" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status().as_u16(), 409);

    // Get by id
    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/categories/{}", category_id))
        .insert_header(auth.clone())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["name"], "Office Supplies");

    // Unknown id is 404
    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/categories/{}", Uuid::new_v4()))
        .insert_header(auth.clone())
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status().as_u16(), 404);

    // Delete, then the record is gone
    let request = test::TestRequest::delete()
        .uri(&format!("/api/v1/categories/{}", category_id))
        .insert_header(auth.clone())
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status().as_u16(), 204);

    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/categories/{}", category_id))
        .insert_header(auth)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_rt::test]
async fn test_order_flow_over_http() {
    let (state, token_service) = test_state().await;
    let app =
        test::init_service(create_app(state, token_service, &CorsConfig::default())).await;
    let token = login(&app).await;
    let auth = ("Authorization", format!("Bearer {}", token));

    // Catalog setup: category, supplier, offer priced 10.0.
    let request = test::TestRequest::post()
        .uri("/api/v1/categories")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "Furniture" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    let category_id = body["id"].as_str().unwrap().to_string();

    let request = test::TestRequest::post()
        .uri("/api/v1/suppliers")
        .insert_header(auth.clone())
        .set_json(json!({
            "name": "Acme Wholesale",
            "email": "sales@acme.example",
            "phone": "+61255501234"
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    let supplier_id = body["id"].as_str().unwrap().to_string();

    let request = test::TestRequest::post()
        .uri("/api/v1/offers")
        .insert_header(auth.clone())
        .set_json(json!({
            "name": "Ergonomic Chair",
            "price": "10.0",
            "offer_type": "product",
            "category_id": category_id,
            "supplier_id": supplier_id
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    let offer_id = body["id"].as_str().unwrap().to_string();

    // Customer and order.
    let request = test::TestRequest::post()
        .uri("/api/v1/customers")
        .insert_header(auth.clone())
        .set_json(json!({
            "name": "Jane Cooper",
            "email": "a@x.com",
            "phone": "+61412345678"
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    let customer_id = body["id"].as_str().unwrap().to_string();

    let request = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(auth.clone())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    let user_id = body["id"].as_str().unwrap().to_string();

    let request = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header(auth.clone())
        .set_json(json!({ "customer_id": customer_id, "user_id": user_id }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    let order_id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["status"], "created");

    // Add two chairs at the current price.
    let request = test::TestRequest::post()
        .uri(&format!("/api/v1/orders/{}/items", order_id))
        .insert_header(auth.clone())
        .set_json(json!({ "offer_id": offer_id, "quantity": 2 }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["items"][0]["price"], "10.0");
    assert_eq!(body["items"][0]["quantity"], 2);
    assert_eq!(body["total"], "20.0");

    // Reprice the offer; the snapshot must not move.
    let request = test::TestRequest::put()
        .uri(&format!("/api/v1/offers/{}", offer_id))
        .insert_header(auth.clone())
        .set_json(json!({ "price": "99.0" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/orders/{}", order_id))
        .insert_header(auth.clone())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["items"][0]["price"], "10.0");
    assert_eq!(body["total"], "20.0");

    // Zero quantity is rejected at the edge.
    let request = test::TestRequest::post()
        .uri(&format!("/api/v1/orders/{}/items", order_id))
        .insert_header(auth.clone())
        .set_json(json!({ "offer_id": offer_id, "quantity": 0 }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status().as_u16(), 400);

    // Status transitions are free-form.
    let request = test::TestRequest::patch()
        .uri(&format!("/api/v1/orders/{}/status", order_id))
        .insert_header(auth.clone())
        .set_json(json!({ "status": "completed" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["status"], "completed");

    // Remove the item; the order is empty again.
    let item_id = body["items"][0]["id"].as_str().unwrap().to_string();
    let request = test::TestRequest::delete()
        .uri(&format!("/api/v1/orders/{}/items/{}", order_id, item_id))
        .insert_header(auth)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["total"], "0");
}
