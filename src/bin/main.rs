#![recursion_limit = "256"]
// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering) of the item widget
// - Static file serving for the WASM bundle, stylesheet and icons
//
// There is no API: all item state lives in the browser.

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use item_manager::web_app::app::App as WebApp;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use leptos_meta::MetaTags;
    use tracing_subscriber::EnvFilter;

    // Load environment variables (LEPTOS_*, RUST_LOG)
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Leptos configuration
    let conf = leptos_config::get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();

        App::new()
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Category and delete icons
            .service(Files::new("/icons", format!("{site_root}/icons")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
