//! Spin component glue shared by the workloads.

use dine_core::{ConfigError, StorefrontConfig};
use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::variables;

use crate::response::PageResponse;

/// First value of a request header, if present and valid UTF-8.
pub fn request_header(req: &IncomingRequest, name: &str) -> Option<String> {
    req.headers()
        .get(&name.to_string())
        .into_iter()
        .next()
        .and_then(|v| String::from_utf8(v).ok())
}

/// Build the storefront configuration from Spin application variables.
pub fn load_config() -> Result<StorefrontConfig, ConfigError> {
    config_from_variables(|name| variables::get(name).ok())
}

/// Build and validate a configuration from named variables.
///
/// Blank values count as unset. Only `api_base_url` is required.
pub fn config_from_variables<F>(lookup: F) -> Result<StorefrontConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let api_base_url = value("api_base_url").ok_or(ConfigError::Missing("apiBaseUrl"))?;
    let mut config = StorefrontConfig::new(api_base_url);

    if let Some(origin) = value("media_origin") {
        config = config.with_media_origin(origin);
    }
    if let Some(secs) = value("revalidate_secs") {
        let secs = secs.trim().parse().map_err(|e| ConfigError::Invalid {
            option: "revalidateSecs",
            reason: format!("{}", e),
        })?;
        config = config.with_revalidate_secs(secs);
    }
    if let Some(url) = value("slider_script_url") {
        config = config.with_slider_script_url(url.trim());
    }
    if let Some(format) = value("log_format") {
        config = config.with_log_format(format.parse()?);
    }

    config.validate()?;
    Ok(config)
}

/// Write a rendered page to the Spin response.
pub async fn send_page(response_out: ResponseOutparam, page: PageResponse) -> anyhow::Result<()> {
    let header_list: Vec<(String, Vec<u8>)> = page
        .headers
        .into_iter()
        .map(|(name, value)| (name.to_ascii_lowercase(), value.into_bytes()))
        .collect();
    let headers = Fields::from_list(&header_list)
        .map_err(|e| anyhow::anyhow!("invalid response headers: {:?}", e))?;

    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(page.status)
        .map_err(|_| anyhow::anyhow!("invalid status code {}", page.status))?;

    let mut body = response.take_body();
    response_out.set(response);
    body.send(page.body.into_bytes())
        .await
        .map_err(|e| anyhow::anyhow!("failed to write body: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dine_core::LogFormat;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(pairs: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars = vars(pairs);
        config_from_variables(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_all_variables() {
        let config = load(&[
            ("api_base_url", "https://cms.example.com/api"),
            ("media_origin", "https://media.example.com"),
            ("revalidate_secs", "120"),
            ("slider_script_url", "/static/slider/dine_ui.js"),
            ("log_format", "human"),
        ])
        .unwrap();

        assert_eq!(config.api_base_url(), "https://cms.example.com/api");
        assert_eq!(config.media_origin(), "https://media.example.com");
        assert_eq!(config.revalidate_secs, 120);
        assert_eq!(config.slider_script_url.as_deref(), Some("/static/slider/dine_ui.js"));
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn test_blank_optionals_are_unset() {
        let config = load(&[
            ("api_base_url", "https://cms.example.com/api"),
            ("media_origin", ""),
            ("revalidate_secs", " "),
            ("slider_script_url", ""),
        ])
        .unwrap();

        assert_eq!(config.media_origin, None);
        assert_eq!(config.revalidate_secs, dine_core::DEFAULT_REVALIDATE_SECS);
        assert_eq!(config.slider_script_url, None);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_or_blank_base_url() {
        assert!(matches!(load(&[]), Err(ConfigError::Missing("apiBaseUrl"))));
        assert!(matches!(
            load(&[("api_base_url", "  ")]),
            Err(ConfigError::Missing("apiBaseUrl"))
        ));
    }

    #[test]
    fn test_invalid_values() {
        let base = ("api_base_url", "https://cms.example.com/api");
        assert!(matches!(
            load(&[base, ("revalidate_secs", "soon")]),
            Err(ConfigError::Invalid { option: "revalidateSecs", .. })
        ));
        assert!(matches!(
            load(&[base, ("log_format", "xml")]),
            Err(ConfigError::Invalid { option: "logFormat", .. })
        ));
        assert!(matches!(
            load(&[("api_base_url", "cms.example.com")]),
            Err(ConfigError::Invalid { option: "apiBaseUrl", .. })
        ));
    }
}
