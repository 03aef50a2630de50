//! Command API endpoints
//!
//! Every endpoint accepts a JSON object body and answers 200 with an empty
//! body once the line has been appended to the command channel.

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::{json, Value};
use tracing::debug;

use super::routes::{route_table, RouteBinding};
use crate::command::{CommandGateway, RawRequest};
use crate::error::CommandError;
use crate::registry::CommandRegistry;

/// Configure command API routes; expects `web::Data<CommandGateway>` on the app
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/commands", web::get().to(list_commands_handler))
        .route("/command/{keyword}", web::post().to(submit_by_keyword_handler));

    for binding in route_table(CommandRegistry::global()) {
        cfg.service(
            web::resource(binding.path.clone())
                .app_data(web::Data::new(binding))
                .route(web::post().to(submit_route_handler)),
        );
    }
}

/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "extcmd"
    }))
}

/// GET /commands - registered command kinds and their routes
async fn list_commands_handler(gateway: web::Data<CommandGateway>) -> HttpResponse {
    let registry = gateway.registry();
    HttpResponse::Ok().json(json!({
        "total": registry.len(),
        "commands": registry.schemas(),
        "routes": route_table(registry),
    }))
}

/// POST /<command> and its path parameter variants
async fn submit_route_handler(
    req: HttpRequest,
    body: web::Bytes,
    binding: web::Data<RouteBinding>,
    gateway: web::Data<CommandGateway>,
) -> Result<HttpResponse, CommandError> {
    let mut raw = RawRequest::from_body(&body)?;
    for (param, field) in &binding.path_params {
        if let Some(value) = req.match_info().get(param) {
            raw.insert(*field, Value::String(value.to_string()));
        }
    }

    debug!(route = %binding.path, command = binding.command, "Dispatching command route");
    gateway.submit(binding.command, raw).await?;
    Ok(HttpResponse::Ok().finish())
}

/// POST /command/{keyword} - generic dispatch by keyword
async fn submit_by_keyword_handler(
    keyword: web::Path<String>,
    body: web::Bytes,
    gateway: web::Data<CommandGateway>,
) -> Result<HttpResponse, CommandError> {
    let keyword = keyword.into_inner().to_ascii_uppercase();
    // Reject unknown keywords before looking at the body
    gateway.schema(&keyword)?;

    let raw = RawRequest::from_body(&body)?;
    gateway.submit(&keyword, raw).await?;
    Ok(HttpResponse::Ok().finish())
}
