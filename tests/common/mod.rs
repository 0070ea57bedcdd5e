//! Helpers shared by the integration tests.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::json;

/// Nothing listens here, so connections are refused.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/users";

/// Starts a throwaway upstream answering `GET /users` with `status` and
/// `body`, returning the URL to fetch.
pub fn spawn_upstream(status: StatusCode, body: String) -> String {
    let server = HttpServer::new(move || {
        let body = body.clone();
        App::new().route(
            "/users",
            web::get().to(move || {
                let body = body.clone();
                async move {
                    HttpResponse::build(status)
                        .content_type(ContentType::json())
                        .body(body)
                }
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind upstream");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    format!("http://{addr}/users")
}

/// JSON array of users with the given ids, shaped like the real endpoint.
pub fn users_json(ids: impl IntoIterator<Item = i64>) -> String {
    let users: Vec<_> = ids
        .into_iter()
        .map(|id| {
            json!({
                "id": id,
                "firstname": format!("Имя{id}"),
                "lastname": format!("Фамилия{id}"),
                "email": format!("user{id}@example.com"),
                "phone": format!("+7999000{id:04}"),
                "updatedAt": "2024-01-15T10:00:00.000Z",
            })
        })
        .collect();

    serde_json::Value::Array(users).to_string()
}
