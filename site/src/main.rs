use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;

mod config;

use config::ServerConfig;

async fn spa(cfg: web::Data<ServerConfig>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(cfg.index_file())?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = ServerConfig::from_env()?;
    log::info!(
        "serving {} (assets {}) on http://{}:{}",
        cfg.dist.display(),
        cfg.assets.display(),
        cfg.host,
        cfg.port
    );

    let bind = (cfg.host.clone(), cfg.port);
    let data = web::Data::new(cfg);

    HttpServer::new(move || {
        let cfg = data.get_ref();
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .service(Files::new("/assets", cfg.assets.clone()))
            // unknown paths get index.html so client-side routes resolve
            .service(
                Files::new("/", cfg.dist.clone())
                    .index_file("index.html")
                    .default_handler(web::get().to(spa)),
            )
    })
    .bind(bind.clone())
    .with_context(|| format!("binding {}:{}", bind.0, bind.1))?
    .run()
    .await
    .context("server stopped with an error")
}
