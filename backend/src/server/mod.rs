//! Server construction and wiring.
//!
//! Collaborators are assembled here with explicit constructor injection:
//! pool into repository, repository plus hasher into the workflow, workflow
//! into the HTTP state.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use tracker_backend::RequestTrace;
use tracker_backend::domain::AccountWorkflowService;
use tracker_backend::inbound::http::accounts::{login, register};
use tracker_backend::inbound::http::health::{HealthState, live, ready};
use tracker_backend::inbound::http::state::HttpState;
use tracker_backend::outbound::persistence::{DbPool, DieselAccountRepository};
use tracker_backend::outbound::security::Argon2PasswordHasher;

#[cfg(debug_assertions)]
use tracker_backend::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire the production adapters into the HTTP dependency bundle.
fn build_http_state(pool: &DbPool) -> HttpState {
    let repository = Arc::new(DieselAccountRepository::new(pool.clone()));
    let hasher = Arc::new(Argon2PasswordHasher::new());
    HttpState::new(Arc::new(AccountWorkflowService::new(repository, hasher)))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1").service(register).service(login);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(RequestTrace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Build and start the HTTP server from the given configuration.
///
/// The readiness probe flips to 200 once the server factory is registered;
/// the caller awaits the returned [`Server`] to completion.
pub fn run(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config.db_pool));
    let health_state = web::Data::new(HealthState::new());
    let factory_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(factory_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
