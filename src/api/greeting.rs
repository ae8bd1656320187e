use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

pub async fn root() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello from FastAPI Backend!",
    })
}

pub async fn hello() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello from the backend API!",
    })
}
