use actix_web::http::header;
use actix_web::{web, HttpResponse};

use super::Orders;
use crate::dto::{OrderRequest, OrderResponse, OrderWithCustomer};
use crate::errors::AppError;

/// GET /api/orders
///
/// Every order with its customer name and product names.
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders", body = Vec<OrderResponse>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(svc: web::Data<Orders>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || svc.list()).await??;
    Ok(HttpResponse::Ok().json(orders))
}

/// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    svc: web::Data<Orders>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let order = web::block(move || svc.get(id)).await??;
    Ok(HttpResponse::Ok().json(order))
}

/// POST /api/orders
///
/// Places an order. The order row and its product links are written in a
/// single database transaction that also holds a lock on the customer row.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderResponse),
        (status = 404, description = "Customer or products not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn place_order(
    svc: web::Data<Orders>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let placed = web::block(move || svc.place(body)).await??;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/orders/{}", placed.id)))
        .json(placed))
}

/// PUT /api/orders/{id}
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 404, description = "Order, customer or products not found"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    svc: web::Data<Orders>,
    path: web::Path<i64>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let body = body.into_inner();
    let updated = web::block(move || svc.update(id, body)).await??;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    svc: web::Data<Orders>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    web::block(move || svc.delete(id)).await??;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/orders/{id}/summary
#[utoipa::path(
    get,
    path = "/api/orders/{id}/summary",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with its customer", body = OrderWithCustomer),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn order_summary(
    svc: web::Data<Orders>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let summary = web::block(move || svc.summary(id)).await??;
    Ok(HttpResponse::Ok().json(summary))
}
