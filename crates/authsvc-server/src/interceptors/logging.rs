//! Request logging
//!
//! Each call runs inside an `rpc` span carrying the method and request id.
//! The request id comes from `x-request-id` metadata or is generated, and is
//! echoed back on every response, failed calls included.

use crate::constants::REQUEST_ID_HEADER;
use std::future::Future;
use std::time::Instant;
use tonic::metadata::AsciiMetadataValue;
use tonic::{Code, Request, Response, Status};
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

/// Request id from metadata, or a fresh UUID
pub fn request_id<T>(request: &Request<T>) -> String {
    request
        .metadata()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned)
}

/// Run `call` with start and finish logging
///
/// The result is returned untouched apart from the request id, which is
/// attached to the response or the error status.
pub async fn log_call<R, F>(
    method: &str,
    request_id: &str,
    call: F,
) -> Result<Response<R>, Status>
where
    F: Future<Output = Result<Response<R>, Status>>,
{
    let span = info_span!("rpc", method, request_id);

    async move {
        let started = Instant::now();
        info!("Incoming request");

        let mut result = call.await;
        let elapsed = started.elapsed();

        if let Ok(value) = request_id.parse::<AsciiMetadataValue>() {
            let metadata = match &mut result {
                Ok(response) => response.metadata_mut(),
                Err(status) => status.metadata_mut(),
            };
            metadata.insert(REQUEST_ID_HEADER, value);
        }

        match &result {
            Ok(_) => info!(?elapsed, "Request succeeded"),
            Err(status) if matches!(status.code(), Code::Internal | Code::Unknown) => {
                error!(
                    ?elapsed,
                    code = ?status.code(),
                    message = status.message(),
                    "Request failed"
                );
            }
            Err(status) => {
                warn!(
                    ?elapsed,
                    code = ?status.code(),
                    message = status.message(),
                    "Request rejected"
                );
            }
        }

        result
    }
    .instrument(span)
    .await
}
