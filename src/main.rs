use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use hero_board::api;
use hero_board::config::Config;
use hero_board::db::create_pool;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;

    log::info!(
        "Starting server on {}:{}",
        config.server.host,
        config.server.port
    );

    let pool = create_pool(&config).await.map_err(|e| {
        log::error!("Failed to open database: {:?}", e);
        std::io::Error::other(e)
    })?;

    log::info!("Database connection established");

    let openapi = api::ApiDoc::openapi();

    let server_host = config.server.host.clone();
    let server_port = config.server.port;
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(pool.clone()))
            .route(
                "/api/docs",
                web::get().to(|| async {
                    actix_web::HttpResponse::PermanentRedirect()
                        .append_header(("Location", "/api/docs/"))
                        .finish()
                }),
            )
            .service(
                SwaggerUi::new("/api/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(api::configure)
    })
    .bind(format!("{}:{}", server_host, server_port))?
    .run()
    .await
}
