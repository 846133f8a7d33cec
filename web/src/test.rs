use std::str;

use actix_web::dev::ServiceResponse;
use actix_web::{test, web, App, HttpRequest, HttpResponse};
use handlebars::Handlebars;

use corpus::models::{Testament, Verse};
use corpus::{Concordance, CorpusError, CorpusSource};

use crate::controllers::view;
use crate::error::{Error, HtmlError};
use crate::ServerData;

/// Runs the given check inside a request handler, so it can generate
/// URLs from the application's named routes.
pub async fn with_service<F>(f: F)
where
    F: Fn(HttpRequest) + Clone + 'static,
{
    let srv = test::init_service(
        App::new()
            .service(web::resource("/test").to(move |req: HttpRequest| {
                let f = f.clone();
                async move {
                    f(req);
                    HttpResponse::Ok().finish()
                }
            }))
            .service(web::resource("/").name("index"))
            .service(web::resource("/book/{book}/chapters").name("book"))
            .service(web::resource("/book/{book}/chapter/{chapter:\\d+}").name("chapter")),
    )
    .await;

    test::call_service(&srv, test::TestRequest::with_uri("/test").to_request()).await;
}

fn test_verse() -> Verse {
    Verse {
        book: "Psalms".to_string(),
        chapter: 119,
        verse: 105,
        text: "NUN. Thy word is a lamp unto my feet, and a light unto my path.".to_string(),
    }
}

/// Fixed-data [`Concordance`] for handler tests. Only Psalm 119:105
/// exists; every other chapter is empty.
pub struct TestConcordance;

impl Concordance for TestConcordance {
    fn all_books(_: &CorpusSource) -> Result<Vec<String>, CorpusError> {
        Ok(vec!["Psalms".to_string(), "John".to_string()])
    }

    fn testament_books(
        testament: Testament,
        _: &CorpusSource,
    ) -> Result<Vec<String>, CorpusError> {
        Ok(match testament {
            Testament::Old => vec!["Psalms".to_string()],
            Testament::New => vec!["John".to_string()],
        })
    }

    fn chapters(book: &str, _: &CorpusSource) -> Result<Vec<i32>, CorpusError> {
        Ok(match book {
            "Psalms" => (1..=150).collect(),
            _ => vec![],
        })
    }

    fn verses(book: &str, chapter: i32, _: &CorpusSource) -> Result<Vec<Verse>, CorpusError> {
        if book == "Psalms" && chapter == 119 {
            Ok(vec![test_verse()])
        } else {
            Ok(vec![])
        }
    }

    fn search(_: &str, _: &CorpusSource) -> Result<Vec<Verse>, CorpusError> {
        Ok(vec![test_verse()])
    }
}

// The source is never read; TestConcordance answers from fixed data.
fn test_source() -> CorpusSource {
    CorpusSource::new("./corpus.test.csv")
}

async fn call(req: test::TestRequest) -> ServiceResponse {
    let mut template = Handlebars::new();
    template.set_strict_mode(true);
    template
        .register_templates_directory(".hbs", "./templates/")
        .expect("Could not register template files");

    let srv = test::init_service(
        App::new()
            .app_data(web::Data::new(ServerData {
                corpus: test_source(),
                template,
            }))
            .app_data(
                web::PathConfig::default()
                    .error_handler(|_, _| HtmlError(Error::PageNotFound).into()),
            )
            .service(
                web::resource("/about")
                    .name("about")
                    .route(web::get().to(view::about)),
            )
            .service(
                web::resource("/")
                    .name("index")
                    .route(web::get().to(view::index::<TestConcordance>)),
            )
            .service(
                web::resource("/search")
                    .name("search")
                    .route(web::post().to(view::search::<TestConcordance>))
                    .route(web::get().to(view::search_redirect)),
            )
            .service(
                web::resource("/old-testament")
                    .name("old-testament")
                    .route(web::get().to(view::old_testament::<TestConcordance>)),
            )
            .service(
                web::resource("/new-testament")
                    .name("new-testament")
                    .route(web::get().to(view::new_testament::<TestConcordance>)),
            )
            .service(
                web::resource("/book/{book}/chapters")
                    .name("book")
                    .route(web::get().to(view::book::<TestConcordance>)),
            )
            .service(
                web::resource("/book/{book}/chapter/{chapter:\\d+}")
                    .name("chapter")
                    .route(web::get().to(view::chapter::<TestConcordance>)),
            )
            .default_service(web::route().to(view::not_found)),
    )
    .await;

    test::call_service(&srv, req.to_request()).await
}

pub async fn get_response(uri: &str) -> ServiceResponse {
    call(test::TestRequest::with_uri(uri)).await
}

pub async fn html_response(uri: &str) -> String {
    body_string(get_response(uri).await).await
}

pub async fn post_search(query: &str) -> ServiceResponse {
    post_form("/search", &[("query", query)]).await
}

pub async fn post_form(uri: &str, form: &[(&str, &str)]) -> ServiceResponse {
    call(test::TestRequest::post().uri(uri).set_form(form)).await
}

pub async fn body_string(resp: ServiceResponse) -> String {
    str::from_utf8(&test::read_body(resp).await)
        .expect("Could not convert response to UTF8")
        .to_string()
}
