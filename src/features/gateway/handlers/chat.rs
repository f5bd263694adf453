use actix_web::{web, HttpResponse};
use log::info;

use crate::features::app::app_state::AppState;

pub async fn chat(
    query: String,
    data: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Received POST request to /chat");

    let answer = data.ai.chat(&query).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(answer))
}
