//! Product detail workload.
//!
//! Serves `/product/<documentId>`: product summary, image, add-on selection
//! form and add-to-cart control. Always rendered fresh.

use dine_core::{LogFormat, RequestContext};
use dine_data::ContentClient;
use dine_observability::{init_tracing, StructuredLogger};
use dine_pages::component::{load_config, request_header, send_page};
use dine_pages::{serve_product, PageResponse};
use spin_sdk::http::{IncomingRequest, ResponseOutparam};
use spin_sdk::http_component;

const WORKLOAD: &str = "product-detail";

/// Main HTTP handler for the product page.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let upstream_id = request_header(&req, "x-request-id");
    let mut ctx = RequestContext::new(req.path_with_query().unwrap_or_default(), upstream_id.as_deref());

    let config = load_config();
    init_tracing(config.as_ref().map(|c| c.log_format).unwrap_or(LogFormat::Json));

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD)
        .with_route(&ctx.path);

    let page = match config {
        Ok(config) => {
            let client = ContentClient::new(config.api_base_url()).with_logger(logger.clone());
            serve_product(&client, &config, &mut ctx).await
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
    match send_page(response_out, page).await {
        Ok(()) => logger
            .info_builder("Product request complete")
            .field_i64("status", i64::from(status))
            .duration_ms("total_ms", ctx.timing.elapsed())
            .emit(),
        Err(e) => logger
            .error_builder("Failed to send response")
            .field("error", e.to_string())
            .emit(),
    }
}
