//! Menu listing workload.
//!
//! Serves `/`: hero banner, category slider and one section per category.
//! The page is edge-cacheable; upstream listing responses are also kept in
//! an in-process store for the lifetime of the component instance.

use std::sync::{Arc, OnceLock};

use dine_cache::ResponseStore;
use dine_core::{LogFormat, RequestContext};
use dine_data::ContentClient;
use dine_observability::{init_tracing, StructuredLogger};
use dine_pages::component::{load_config, request_header, send_page};
use dine_pages::{serve_listing, PageResponse};
use spin_sdk::http::{IncomingRequest, ResponseOutparam};
use spin_sdk::http_component;

const WORKLOAD: &str = "menu-listing";

static STORE: OnceLock<Arc<ResponseStore>> = OnceLock::new();

/// Main HTTP handler for the listing page.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let upstream_id = request_header(&req, "x-request-id");
    let mut ctx = RequestContext::new(req.path_with_query().unwrap_or_default(), upstream_id.as_deref());

    let config = load_config();
    init_tracing(config.as_ref().map(|c| c.log_format).unwrap_or(LogFormat::Json));

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD)
        .with_route(&ctx.path);
    logger.info("Listing request started");

    let page = match config {
        Ok(config) => {
            let store = STORE.get_or_init(|| Arc::new(ResponseStore::new())).clone();
            let client = ContentClient::new(config.api_base_url())
                .with_store(store)
                .with_logger(logger.clone());
            serve_listing(&client, &config, &mut ctx).await
        }
        Err(e) => {
            logger
                .error_builder("Invalid configuration")
                .field("error", e.to_string())
                .emit();
            PageResponse::server_error(&ctx.request_id)
        }
    };

    let status = page.status;
    if let Err(e) = send_page(response_out, page).await {
        logger
            .error_builder("Failed to send response")
            .field("error", e.to_string())
            .emit();
        return;
    }

    logger
        .info_builder("Listing request complete")
        .field_i64("status", i64::from(status))
        .duration_ms("total_ms", ctx.timing.elapsed())
        .emit();
}
