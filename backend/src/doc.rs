//! OpenAPI document assembled from handler annotations.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::accounts::{AccountResponse, LoginRequest, RegisterRequest};

/// Aggregated OpenAPI description of the REST surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
    ),
    components(schemas(RegisterRequest, LoginRequest, AccountResponse, Error, ErrorCode)),
    tags(
        (name = "accounts", description = "Employee registration and login"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_the_account_endpoints() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths;
        assert!(paths.contains_key("/api/v1/accounts"));
        assert!(paths.contains_key("/api/v1/login"));
        assert!(paths.contains_key("/health/live"));
        assert!(paths.contains_key("/health/ready"));
    }
}
