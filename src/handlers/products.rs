use actix_web::http::header;
use actix_web::{web, HttpResponse};

use super::Products;
use crate::dto::{ProductRequest, ProductResponse};
use crate::errors::AppError;

#[utoipa::path(
    get,
    path = "/api/products",
    responses((status = 200, description = "All products", body = Vec<ProductResponse>)),
    tag = "products"
)]
pub async fn list_products(svc: web::Data<Products>) -> Result<HttpResponse, AppError> {
    let products = web::block(move || svc.list()).await??;
    Ok(HttpResponse::Ok().json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn get_product(
    svc: web::Data<Products>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let product = web::block(move || svc.get(id)).await??;
    Ok(HttpResponse::Ok().json(product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid fields"),
    ),
    tag = "products"
)]
pub async fn create_product(
    svc: web::Data<Products>,
    body: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let created = web::block(move || svc.create(body)).await??;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/products/{}", created.id)))
        .json(created))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn update_product(
    svc: web::Data<Products>,
    path: web::Path<i64>,
    body: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let body = body.into_inner();
    let updated = web::block(move || svc.update(id, body)).await??;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/products/{id}
///
/// A product still listed on an order is kept and reported as 409.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product is referenced by orders"),
    ),
    tag = "products"
)]
pub async fn delete_product(
    svc: web::Data<Products>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    web::block(move || svc.delete(id)).await??;
    Ok(HttpResponse::NoContent().finish())
}
