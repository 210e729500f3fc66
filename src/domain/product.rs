#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub description: Option<String>,
    /// Conventionally EDT, EDP or Parfum. Not enforced.
    pub concentration: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub description: Option<String>,
    pub concentration: Option<String>,
}
