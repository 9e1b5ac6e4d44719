use ferrous_revip_domain::ProviderError;
use std::time::Duration;

/// Sends `request` and returns the body of a 2xx response.
pub(crate) async fn fetch_body(
    request: reqwest::RequestBuilder,
    timeout: Duration,
) -> Result<Vec<u8>, ProviderError> {
    let response = tokio::time::timeout(timeout, request.send())
        .await
        .map_err(|_| ProviderError::Timeout)?
        .map_err(|e| classify(e, ProviderError::Transport))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::HttpStatus(status.as_u16()));
    }

    let body = tokio::time::timeout(timeout, response.bytes())
        .await
        .map_err(|_| ProviderError::Timeout)?
        .map_err(|e| classify(e, ProviderError::Body))?;

    Ok(body.to_vec())
}

fn classify(e: reqwest::Error, otherwise: fn(String) -> ProviderError) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        otherwise(e.to_string())
    }
}
