#[macro_use]
mod macros;

mod app;
mod defaults;
mod encode;
mod errors;
mod extractor;
mod filters;
mod generator;
mod handlers;
mod logo;
mod models;
mod payload;
mod qrcode;
mod ser;

use crate::defaults::Defaults;
use actix_web::server;
use dotenv::dotenv;
use env_logger;
use log::info;
use openssl::ssl::{SslAcceptor, SslFiletype, SslMethod};
use std::env;

fn main() {
    dotenv().ok();

    env_logger::init();

    let host = env::var("HOST").unwrap_or("0.0.0.0:3000".to_owned());
    let defaults_file = env::var("DEFAULTS_FILE").unwrap_or("default_values.json".to_owned());
    let defaults = Defaults::load(&defaults_file)
        .expect(&format!("Cannot load defaults from '{}'", &defaults_file));

    let sys = actix::System::new("qrforge");

    info!("Starting");
    let mut srv = server::new(move || app::create_app(defaults.clone()));

    srv = if let Ok(folder) = env::var("TLS_FOLDER") {
        let mut builder = SslAcceptor::mozilla_intermediate(SslMethod::tls()).unwrap();
        builder
            .set_private_key_file(format!("{}/privkey.pem", folder), SslFiletype::PEM)
            .unwrap();
        builder
            .set_certificate_chain_file(format!("{}/fullchain.pem", folder))
            .unwrap();
        srv.bind_ssl(&host, builder)
            .expect(&format!("Can not bind_ssl to '{}'", &host))
    } else {
        srv.bind(&host)
            .expect(&format!("Can not bind to '{}'", &host))
    };
    srv.start();
    sys.run();
}
