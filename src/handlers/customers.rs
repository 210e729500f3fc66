use actix_web::http::header;
use actix_web::{web, HttpResponse};

use super::Customers;
use crate::dto::{CustomerRequest, CustomerResponse, CustomerWithOrders, OrderResponse};
use crate::errors::AppError;

/// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    responses(
        (status = 200, description = "All customers", body = Vec<CustomerResponse>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn list_customers(svc: web::Data<Customers>) -> Result<HttpResponse, AppError> {
    let customers = web::block(move || svc.list()).await??;
    Ok(HttpResponse::Ok().json(customers))
}

/// GET /api/customers/{id}
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "Customer not found"),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    svc: web::Data<Customers>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let customer = web::block(move || svc.get(id)).await??;
    Ok(HttpResponse::Ok().json(customer))
}

/// POST /api/customers
#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Invalid fields"),
        (status = 409, description = "Email already in use"),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    svc: web::Data<Customers>,
    body: web::Json<CustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let created = web::block(move || svc.create(body)).await??;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/customers/{}", created.id)))
        .json(created))
}

/// PUT /api/customers/{id}
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerResponse),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Email already in use"),
    ),
    tag = "customers"
)]
pub async fn update_customer(
    svc: web::Data<Customers>,
    path: web::Path<i64>,
    body: web::Json<CustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let body = body.into_inner();
    let updated = web::block(move || svc.update(id, body)).await??;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/customers/{id}
///
/// Refused with 409 while any order references the customer.
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Customer has orders"),
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    svc: web::Data<Customers>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    web::block(move || svc.delete(id)).await??;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/customers/{id}/orders
#[utoipa::path(
    get,
    path = "/api/customers/{id}/orders",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Orders placed by the customer", body = Vec<OrderResponse>),
        (status = 404, description = "Customer not found"),
    ),
    tag = "customers"
)]
pub async fn customer_orders(
    svc: web::Data<Customers>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let orders = web::block(move || svc.orders(id)).await??;
    Ok(HttpResponse::Ok().json(orders))
}

/// GET /api/customers/{id}/summary
///
/// The customer together with id, total and date of each of its orders.
#[utoipa::path(
    get,
    path = "/api/customers/{id}/summary",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer with orders", body = CustomerWithOrders),
        (status = 404, description = "Customer not found"),
    ),
    tag = "customers"
)]
pub async fn customer_summary(
    svc: web::Data<Customers>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let summary = web::block(move || svc.summary(id)).await??;
    Ok(HttpResponse::Ok().json(summary))
}
