use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub fn not_found<S: AsRef<str>>(s: S) -> Response {
    (StatusCode::NOT_FOUND, s.as_ref().to_string()).into_response()
}
