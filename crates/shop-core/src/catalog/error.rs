//! Catalog Errors

use std::fmt;

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

pub const LIST_LOAD_FAILED: &str = "Unable to load products";
pub const PRODUCT_LOAD_FAILED: &str = "Error loading product";

/// Which catalog call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogRequest {
    ListProducts,
    Product(u32),
}

impl fmt::Display for CatalogRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogRequest::ListProducts => write!(f, "list products"),
            CatalogRequest::Product(id) => write!(f, "get product {}", id),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{request}: request failed: {source}")]
    Network {
        request: CatalogRequest,
        #[source]
        source: reqwest::Error,
    },

    #[error("{request}: unexpected HTTP status {status}")]
    Status { request: CatalogRequest, status: u16 },

    #[error("product {0} not found")]
    NotFound(u32),

    #[error("{request}: invalid response body: {source}")]
    Decode {
        request: CatalogRequest,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn request(&self) -> CatalogRequest {
        match self {
            CatalogError::Network { request, .. }
            | CatalogError::Status { request, .. }
            | CatalogError::Decode { request, .. } => *request,
            CatalogError::NotFound(id) => CatalogRequest::Product(*id),
        }
    }

    /// Text shown to the user in the error alert
    pub fn user_message(&self) -> &'static str {
        user_message_for(self.request())
    }
}

/// User-facing failure text for a catalog call
fn user_message_for(request: CatalogRequest) -> &'static str {
    match request {
        CatalogRequest::ListProducts => LIST_LOAD_FAILED,
        CatalogRequest::Product(_) => PRODUCT_LOAD_FAILED,
    }
}
