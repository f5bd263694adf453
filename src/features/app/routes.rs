use actix_web::web;

use crate::features::gateway::handlers::{chat, generate_image, image_form, plan_trip};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/chat").route(web::post().to(chat)))
        .service(
            web::resource("/trip-planner")
                .route(web::post().to(plan_trip))
                .route(web::get().to(plan_trip)),
        )
        .service(
            web::resource("/image/generate")
                .route(web::get().to(image_form))
                .route(web::post().to(generate_image)),
        );
}
