//! Request handling shared by the workloads.
//!
//! Errors never escape: fetch failures become a logged 500 page and
//! unknown products a 404 page.

use dine_core::{RequestContext, StorefrontConfig};
use dine_data::{ContentClient, HttpTransport};

use crate::error::PageError;
use crate::listing::{load_listing, render_listing};
use crate::product::{load_product, render_product};
use crate::response::{listing_cache_policy, product_cache_policy, PageResponse};
use crate::routes::extract_document_id;

/// Serve the listing page.
pub async fn serve_listing<T: HttpTransport>(
    client: &ContentClient<T>,
    config: &StorefrontConfig,
    ctx: &mut RequestContext,
) -> PageResponse {
    ctx.timing.mark("load_start");
    let result = load_listing(client, config).await;
    ctx.timing.mark("load_end");

    match result {
        Ok(view) => {
            let body = render_listing(&view, config);
            log_rendered(client, ctx, 200, body.len());
            PageResponse::html(200, body, &listing_cache_policy(config), &ctx.request_id)
        }
        Err(err) => error_response(client, ctx, err),
    }
}

/// Serve a product page for the document id in `ctx.path`.
pub async fn serve_product<T: HttpTransport>(
    client: &ContentClient<T>,
    config: &StorefrontConfig,
    ctx: &mut RequestContext,
) -> PageResponse {
    let Some(document_id) = extract_document_id(&ctx.path).map(str::to_string) else {
        return error_response(client, ctx, PageError::NotFound(ctx.path.clone()));
    };

    ctx.timing.mark("load_start");
    let result = load_product(client, &document_id).await;
    ctx.timing.mark("load_end");

    match result {
        Ok(detail) => {
            let body = render_product(&detail, config);
            log_rendered(client, ctx, 200, body.len());
            PageResponse::html(200, body, &product_cache_policy(), &ctx.request_id)
        }
        Err(err) => error_response(client, ctx, err),
    }
}

fn error_response<T: HttpTransport>(
    client: &ContentClient<T>,
    ctx: &RequestContext,
    err: PageError,
) -> PageResponse {
    match err {
        PageError::NotFound(_) => {
            client
                .logger()
                .info_builder("Not found")
                .field("path", ctx.path.as_str())
                .emit();
            PageResponse::not_found(&ctx.request_id)
        }
        PageError::Fetch(_) => {
            client
                .logger()
                .error_builder("Page render failed")
                .field("path", ctx.path.as_str())
                .field("error", err.to_string())
                .emit();
            PageResponse::server_error(&ctx.request_id)
        }
    }
}

fn log_rendered<T: HttpTransport>(client: &ContentClient<T>, ctx: &RequestContext, status: u16, bytes: usize) {
    let mut log = client
        .logger()
        .info_builder("Page rendered")
        .field_i64("status", i64::from(status))
        .field_i64("bytes", bytes as i64);
    if let Some(load) = ctx.timing.between("load_start", "load_end") {
        log = log.duration_ms("load_ms", load);
    }
    log.emit();
}
