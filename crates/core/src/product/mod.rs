mod error;
mod requests;
mod responses;
mod types;

pub use error::ValidationError;
pub use requests::CreateProductRequest;
pub use responses::{CreateProductResponse, ListProductsResponse, ProductResponse};
pub use types::{NewProduct, Product, ProductType};
