use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use ai_trip_gateway::features::ai::openai::OpenAiClient;
use ai_trip_gateway::features::app::config::AppConfig;
use ai_trip_gateway::{configure, AppState};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    #[cfg(feature = "logging")]
    env_logger::init();

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    info!(
        "Using chat model {} and image model {} at {}",
        config.openai.chat_model, config.openai.image_model, config.openai.base_url
    );
    let state = web::Data::new(AppState::new(Arc::new(OpenAiClient::new(config.openai))));

    info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
