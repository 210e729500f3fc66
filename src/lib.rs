pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::{CustomerService, OrderService, ProductService};
use infrastructure::{DieselCustomerRepository, DieselOrderRepository, DieselProductRepository};

pub use config::Config;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::customers::list_customers,
        handlers::customers::get_customer,
        handlers::customers::create_customer,
        handlers::customers::update_customer,
        handlers::customers::delete_customer,
        handlers::customers::customer_orders,
        handlers::customers::customer_summary,
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::place_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
        handlers::orders::order_summary,
    ),
    components(schemas(
        dto::CustomerRequest,
        dto::ProductRequest,
        dto::OrderRequest,
        dto::CustomerResponse,
        dto::ProductResponse,
        dto::OrderResponse,
        dto::OrderSummary,
        dto::CustomerSummary,
        dto::CustomerWithOrders,
        dto::OrderWithCustomer,
    )),
    tags(
        (name = "customers", description = "Customer records and their order history"),
        (name = "products", description = "Fragrance catalogue"),
        (name = "orders", description = "Order placement and maintenance"),
    )
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let customers = Arc::new(DieselCustomerRepository::new(pool.clone()));
    let products = Arc::new(DieselProductRepository::new(pool.clone()));
    let orders = Arc::new(DieselOrderRepository::new(pool));

    let customer_service = web::Data::new(CustomerService::new(customers.clone(), orders.clone()));
    let product_service = web::Data::new(ProductService::new(products.clone()));
    let order_service = web::Data::new(OrderService::new(orders, customers, products));
    let openapi = ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(customer_service.clone())
            .app_data(product_service.clone())
            .app_data(order_service.clone())
            .app_data(web::JsonConfig::default().error_handler(errors::json_error_handler))
            .app_data(web::PathConfig::default().error_handler(errors::path_error_handler))
            .wrap(Logger::default())
            .route("/health", web::get().to(handlers::health::health))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .service(web::scope("/api").configure(api_routes))
    })
    .bind((host.to_string(), port))?
    .run())
}

fn api_routes(cfg: &mut web::ServiceConfig) {
    use handlers::{customers, orders, products};

    cfg.service(
        web::scope("/customers")
            .route("", web::get().to(customers::list_customers))
            .route("", web::post().to(customers::create_customer))
            .route("/{id}", web::get().to(customers::get_customer))
            .route("/{id}", web::put().to(customers::update_customer))
            .route("/{id}", web::delete().to(customers::delete_customer))
            .route("/{id}/orders", web::get().to(customers::customer_orders))
            .route("/{id}/summary", web::get().to(customers::customer_summary)),
    )
    .service(
        web::scope("/products")
            .route("", web::get().to(products::list_products))
            .route("", web::post().to(products::create_product))
            .route("/{id}", web::get().to(products::get_product))
            .route("/{id}", web::put().to(products::update_product))
            .route("/{id}", web::delete().to(products::delete_product)),
    )
    .service(
        web::scope("/orders")
            .route("", web::get().to(orders::list_orders))
            .route("", web::post().to(orders::place_order))
            .route("/{id}", web::get().to(orders::get_order))
            .route("/{id}", web::put().to(orders::update_order))
            .route("/{id}", web::delete().to(orders::delete_order))
            .route("/{id}/summary", web::get().to(orders::order_summary)),
    );
}
