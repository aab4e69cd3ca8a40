use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use posts_core::envelope::Envelope;

/// An [`Envelope`] delivered as an HTTP response.
///
/// `statusCode` becomes the HTTP status and `body` is sent as JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeResponse(pub Envelope);

impl From<Envelope> for EnvelopeResponse {
    fn from(envelope: Envelope) -> Self {
        Self(envelope)
    }
}

impl IntoResponse for EnvelopeResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::BAD_GATEWAY);

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.0.body,
        )
            .into_response()
    }
}
