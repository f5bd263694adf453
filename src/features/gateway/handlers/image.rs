use actix_web::{error::ErrorInternalServerError, web, HttpResponse};
use askama::Template;
use log::{error, info};

use crate::features::app::app_state::AppState;
use crate::features::gateway::types::ImageInstruction;

#[derive(Template)]
#[template(path = "image_form.html")]
struct ImageFormView;

#[derive(Template)]
#[template(path = "show.html")]
struct ShowView<'a> {
    image_url: &'a str,
}

fn render_html<T: Template>(view: &T) -> Result<HttpResponse, actix_web::Error> {
    let html = view.render().map_err(|e| {
        error!("Failed to render view: {}", e);
        ErrorInternalServerError(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

pub async fn image_form() -> Result<HttpResponse, actix_web::Error> {
    render_html(&ImageFormView)
}

pub async fn generate_image(
    form: web::Form<ImageInstruction>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Received POST request to /image/generate");

    let image_url = data.ai.generate_image(&form.instruction).await?;
    info!("Generated image at {}", image_url);

    render_html(&ShowView {
        image_url: &image_url,
    })
}
