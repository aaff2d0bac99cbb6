use crate::defaults::Defaults;
use crate::handlers::*;
use actix_web::{http::Method, middleware, App};

pub struct AppState {
    pub defaults: Defaults,
}

// logo uploads travel base64-encoded inside the form body
const MAX_FORM_SIZE: usize = 8 * 1024 * 1024;

pub fn create_app(defaults: Defaults) -> App<AppState> {
    let state = AppState { defaults };
    App::with_state(state)
        .middleware(middleware::Logger::new("\"%r\" %s %b %Dms"))
        .resource("/", |r| {
            r.method(Method::GET).with(webui::index);
            r.method(Method::POST).with_config(webui::generate, |cfg| {
                (cfg.0).limit(MAX_FORM_SIZE);
            });
        })
        .resource("/download", |r| {
            r.method(Method::POST).with_config(webui::download, |cfg| {
                (cfg.0).limit(MAX_FORM_SIZE);
            });
        })
        .resource("/api/qrcode", |r| r.method(Method::POST).with(generate_qrcode))
}
