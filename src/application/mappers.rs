//! Pure conversions between request/response records and domain values.

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::order::Order;
use crate::domain::product::{NewProduct, Product};
use crate::dto::{
    CustomerRequest, CustomerResponse, CustomerSummary, OrderResponse, OrderSummary,
    ProductRequest, ProductResponse,
};

impl From<CustomerRequest> for NewCustomer {
    fn from(req: CustomerRequest) -> Self {
        NewCustomer {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
        }
    }
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        CustomerResponse {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
        }
    }
}

impl From<Customer> for CustomerSummary {
    fn from(c: Customer) -> Self {
        CustomerSummary {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
        }
    }
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        NewProduct {
            name: req.name,
            brand: req.brand,
            price: req.price,
            stock_quantity: req.stock_quantity,
            description: req.description,
            concentration: req.concentration,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            id: p.id,
            name: p.name,
            brand: p.brand,
            price: p.price,
            stock_quantity: p.stock_quantity,
            concentration: p.concentration,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        OrderResponse {
            id: o.id,
            customer_name: o.customer.full_name(),
            products: o.product_names(),
            total_amount: o.total_amount,
            date_created: o.date_created,
        }
    }
}

impl From<&Order> for OrderSummary {
    fn from(o: &Order) -> Self {
        OrderSummary {
            id: o.id,
            total_amount: o.total_amount,
            date_created: o.date_created,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use proptest::prelude::*;

    use super::*;

    fn persisted_customer(id: i64, new: NewCustomer) -> Customer {
        Customer {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
        }
    }

    fn persisted_product(id: i64, new: NewProduct) -> Product {
        Product {
            id,
            name: new.name,
            brand: new.brand,
            price: new.price,
            stock_quantity: new.stock_quantity,
            description: new.description,
            concentration: new.concentration,
        }
    }

    #[test]
    fn order_response_joins_customer_name_and_product_names() {
        let order = Order {
            id: 7,
            date_created: NaiveDateTime::default(),
            total_amount: 200.0,
            customer: Customer {
                id: 1,
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "a@x".to_string(),
            },
            products: vec![
                persisted_product(
                    1,
                    NewProduct {
                        name: "Rose".to_string(),
                        brand: "A".to_string(),
                        price: 50.0,
                        stock_quantity: 10,
                        description: None,
                        concentration: None,
                    },
                ),
                persisted_product(
                    2,
                    NewProduct {
                        name: "Oud".to_string(),
                        brand: "B".to_string(),
                        price: 150.0,
                        stock_quantity: 5,
                        description: None,
                        concentration: None,
                    },
                ),
            ],
        };

        let summary = OrderSummary::from(&order);
        let resp = OrderResponse::from(order);

        assert_eq!(resp.customer_name, "Ada Lovelace");
        assert_eq!(resp.products, vec!["Rose", "Oud"]);
        assert_eq!(resp.total_amount, 200.0);
        assert_eq!(summary.id, 7);
        assert_eq!(summary.total_amount, 200.0);
    }

    proptest! {
        #[test]
        fn customer_round_trip_keeps_fields(
            first in "[A-Za-z]{1,12}",
            last in "[A-Za-z]{1,12}",
            email in "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,3}",
            id in 1i64..100_000,
        ) {
            let req = CustomerRequest { first_name: first, last_name: last, email };
            let resp = CustomerResponse::from(persisted_customer(id, req.clone().into()));
            prop_assert_eq!(resp.id, id);
            prop_assert_eq!(resp.first_name, req.first_name);
            prop_assert_eq!(resp.last_name, req.last_name);
            prop_assert_eq!(resp.email, req.email);
        }

        #[test]
        fn product_round_trip_keeps_shared_fields(
            name in "[A-Za-z ]{1,16}",
            brand in "[A-Za-z]{1,10}",
            price in 0.01f64..5_000.0,
            stock in 0i32..1_000,
            concentration in prop::option::of(prop::sample::select(vec!["EDT", "EDP", "Parfum"])),
            id in 1i64..100_000,
        ) {
            let req = ProductRequest {
                name,
                brand,
                price,
                stock_quantity: stock,
                description: Some("notes".to_string()),
                concentration: concentration.map(str::to_string),
            };
            let resp = ProductResponse::from(persisted_product(id, req.clone().into()));
            prop_assert_eq!(resp.id, id);
            prop_assert_eq!(resp.name, req.name);
            prop_assert_eq!(resp.brand, req.brand);
            prop_assert_eq!(resp.price, req.price);
            prop_assert_eq!(resp.stock_quantity, req.stock_quantity);
            prop_assert_eq!(resp.concentration, req.concentration);
        }
    }
}
