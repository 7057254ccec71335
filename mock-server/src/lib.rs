use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use tokio::net::TcpListener;

pub const BODY_CONTENT: &str = "Body content";
pub const INTERNATIONAL: &str = "32 décembre";

/// Size of the `/big` body; above ureq's default 10MB read limit.
pub const BIG_BODY_LEN: usize = 11 * 1024 * 1024;

/// "32 d\xe9cembre" in ISO-8859-1, which is not valid UTF-8.
pub const LATIN1_BYTES: &[u8] = b"32 d\xe9cembre";

pub fn app() -> Router {
    Router::new()
        .route("/body", get(|| async { BODY_CONTENT }))
        .route("/intl", get(international))
        .route("/empty", get(|| async { "" }))
        .route("/latin1", get(latin1))
        .route("/big", get(|| async { "a".repeat(BIG_BODY_LEN) }))
        .route("/echo", post(echo))
        .route("/redirect", get(|| async { Redirect::to("/body") }))
        .route("/fail", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn international() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        INTERNATIONAL,
    )
}

async fn latin1() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=iso-8859-1")],
        LATIN1_BYTES,
    )
}

/// Echo form pairs back as a JSON array of `[name, value]`, in received order.
async fn echo(Form(pairs): Form<Vec<(String, String)>>) -> Json<Vec<(String, String)>> {
    tracing::debug!(count = pairs.len(), "echoing form");
    Json(pairs)
}
