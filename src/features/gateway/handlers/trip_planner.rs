use actix_web::{web, HttpResponse};
use log::info;

use crate::features::app::app_state::AppState;
use crate::features::gateway::prompt::render_trip_prompt;
use crate::features::gateway::types::PlanRequest;

pub async fn plan_trip(
    req: web::Json<PlanRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Received trip plan request: {:?}", req);

    let prompt = render_trip_prompt(&req);
    let itinerary = data.ai.chat(&prompt).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(itinerary))
}
