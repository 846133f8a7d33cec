#![warn(clippy::all)]

use std::env;
use std::error::Error;
use std::io;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use handlebars::Handlebars;
use log::info;

use corpus::{Concordance, CorpusSource, CsvConcordance};

use crate::controllers::view;
use crate::error::HtmlError;

/// Shared state for the application: the corpus handle and the
/// template registry.
pub struct ServerData {
    pub corpus: CorpusSource,
    pub template: Handlebars<'static>,
}

/// Registers the Handlebars templates for the application.
fn register_templates() -> Result<Handlebars<'static>, Box<dyn Error>> {
    let mut tpl = Handlebars::new();
    tpl.set_strict_mode(true);
    tpl.register_templates_directory(".hbs", "./web/templates/")?;

    Ok(tpl)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    // Set up logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Get env configuration
    let path = env::var("CORPUS_PATH").unwrap_or_else(|_| "./data/kjv.csv".to_string());
    let corpus = CorpusSource::new(path);

    // Read the corpus once so a bad path fails at boot instead of on
    // the first request. The result is discarded; every query re-reads
    // the file.
    let books = CsvConcordance::all_books(&corpus).expect("Error reading the corpus");
    info!(
        "Serving {} books from {}",
        books.len(),
        corpus.path().display()
    );

    HttpServer::new(move || {
        // Create handlebars registry
        let template = register_templates().unwrap();

        // Wire up the application
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(ServerData {
                corpus: corpus.clone(),
                template,
            }))
            // Chapter numbers past i32 pass the route guard but fail
            // extraction; render the themed 404 for those as well.
            .app_data(
                web::PathConfig::default()
                    .error_handler(|_, _| HtmlError(error::Error::PageNotFound).into()),
            )
            .service(actix_files::Files::new("/static", "./web/static").use_etag(true))
            .service(
                web::resource("/about")
                    .name("about")
                    .route(web::get().to(view::about)),
            )
            .service(
                web::resource("/")
                    .name("index")
                    .route(web::get().to(view::index::<CsvConcordance>)),
            )
            .service(
                web::resource("/search")
                    .name("search")
                    .route(web::post().to(view::search::<CsvConcordance>))
                    .route(web::get().to(view::search_redirect)),
            )
            .service(
                web::resource("/old-testament")
                    .name("old-testament")
                    .route(web::get().to(view::old_testament::<CsvConcordance>)),
            )
            .service(
                web::resource("/new-testament")
                    .name("new-testament")
                    .route(web::get().to(view::new_testament::<CsvConcordance>)),
            )
            .service(
                web::resource("/book/{book}/chapters")
                    .name("book")
                    .route(web::get().to(view::book::<CsvConcordance>)),
            )
            .service(
                web::resource("/book/{book}/chapter/{chapter:\\d+}")
                    .name("chapter")
                    .route(web::get().to(view::chapter::<CsvConcordance>)),
            )
            .default_service(web::route().to(view::not_found))
    })
    .workers(num_cpus::get())
    .bind("0.0.0.0:8080")?
    .run()
    .await
}

mod controllers;
mod error;
#[macro_use]
mod macros;
mod responder;
#[cfg(test)]
mod test;
