//! Request handlers and route registration.

use crate::error::ApiError;
use crate::shell::{render_shell, PageShell, ShellConfig, CLIENTS_PAGE_COMPONENT};
use crate::state::AppState;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use actix_web_lab::respond::Html;
use clientdir_core::{core_version, DEFAULT_LETTER};
use serde::Deserialize;
use serde_json::json;

/// Query string accepted by `GET /clients`.
#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    pub letter: Option<String>,
}

impl LookupParams {
    /// Parses a raw query string; unparseable input yields the defaults.
    pub fn from_query_string(query: &str) -> Self {
        web::Query::<Self>::from_query(query)
            .map(web::Query::into_inner)
            .unwrap_or_default()
    }
}

/// Registers every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_clients).service(index).service(health);
}

/// Client lookup by starting letter.
#[get("/clients")]
async fn list_clients(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let params = LookupParams::from_query_string(req.query_string());

    let response = web::block(move || state.lookup(params.letter.as_deref()))
        .await
        .map_err(|_| ApiError::Blocking)??;

    Ok(HttpResponse::Ok().json(response))
}

/// Frontend bootstrap for the client directory page.
#[get("/")]
async fn index(config: web::Data<ShellConfig>) -> impl Responder {
    let page = PageShell {
        component: CLIENTS_PAGE_COMPONENT.to_string(),
        props: json!({
            "lookup_url": "/clients",
            "default_letter": DEFAULT_LETTER,
        }),
        url: "/".to_string(),
        title: "Clients".to_string(),
    };

    Html(render_shell(&page, &config))
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": core_version(),
    }))
}
