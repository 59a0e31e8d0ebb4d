use std::sync::Arc;

use actix_files::Files;
use actix_web::{App, HttpServer, web};
use leptos::config::get_configuration;
use leptos::prelude::*;
use leptos_actix::{LeptosRoutes, generate_route_list, handle_server_fns_with_context};

use signin::config::ServerSettings;
use signin::frontend::{App as SignInApp, shell};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    // env_logger picks up RUST_LOG
    env_logger::init();

    let settings = ServerSettings::from_env().map_err(std::io::Error::other)?;
    let store = Arc::new(
        settings
            .credential_store()
            .map_err(std::io::Error::other)?,
    );
    log::info!("Credential store seeded with {} account(s)", store.len());

    let conf = get_configuration(None).map_err(std::io::Error::other)?;
    let addr = conf.leptos_options.site_addr;
    let routes = generate_route_list(SignInApp);

    log::info!("Listening on http://{}", addr);

    HttpServer::new(move || {
        let leptos_options = conf.leptos_options.clone();
        let site_root = leptos_options.site_root.to_string();
        let fn_store = store.clone();
        let route_store = store.clone();

        App::new()
            .route(
                "/api/{tail:.*}",
                handle_server_fns_with_context(move || provide_context(fn_store.clone())),
            )
            .service(Files::new("/pkg", format!("{}/pkg", site_root)))
            .leptos_routes_with_context(
                routes.clone(),
                move || provide_context(route_store.clone()),
                {
                    let leptos_options = leptos_options.clone();
                    move || shell(leptos_options.clone())
                },
            )
            .app_data(web::Data::new(leptos_options))
    })
    .bind(&addr)?
    .run()
    .await
}
