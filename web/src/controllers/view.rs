use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;

use corpus::models::Testament;
use corpus::Concordance;

use crate::controllers::SearchForm;
use crate::error::{Error, HtmlError};
use crate::responder::*;
use crate::ServerData;

/// Result for HTML response handlers
type ViewResult = Result<HttpResponse, HtmlError>;

/// Handles HTTP requests for the about page.
pub async fn about(data: web::Data<ServerData>) -> ViewResult {
    let body = TemplateData::new(EmptyData, Meta::for_about()).to_html("about", &data.template)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(body))
}

/// Handles HTTP requests for the book index.
///
/// Returns an HTML page listing every book in the corpus, split into
/// an Old and a New Testament list. Each list is its own query, and
/// every query re-reads the corpus file.
pub async fn index<C>(data: web::Data<ServerData>, req: HttpRequest) -> ViewResult
where
    C: Concordance + 'static,
{
    let source = data.corpus.to_owned();
    let old = web::block(move || C::testament_books(Testament::Old, &source)).await??;
    let source = data.corpus.to_owned();
    let new = web::block(move || C::testament_books(Testament::New, &source)).await??;

    let books_data = AllBooksData::new(old, new, &req);
    let body =
        TemplateData::new(&books_data, Meta::for_all_books()).to_html("index", &data.template)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(body))
}

/// Handles HTTP requests for a book's chapter list
/// (e.g. /book/John/chapters).
///
/// A book name that never occurs in the corpus renders an empty list,
/// not an error.
pub async fn book<C>(
    data: web::Data<ServerData>,
    params: web::Path<(String,)>,
    req: HttpRequest,
) -> ViewResult
where
    C: Concordance + 'static,
{
    let (book,) = params.into_inner();
    let source = data.corpus.to_owned();
    let name = book.to_owned();
    let chapters = web::block(move || C::chapters(&name, &source)).await??;

    let chapters_data = ChaptersData::new(book, chapters, &req);
    let body = TemplateData::new(
        &chapters_data,
        Meta::for_book(&chapters_data.book, &chapters_data.links.current.url),
    )
    .to_html("chapters", &data.template)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(body))
}

/// Handles HTTP requests for a chapter's verses
/// (e.g. /book/John/chapter/11).
///
/// A chapter with no verses renders the not-found page; an unknown
/// book is just such a chapter.
pub async fn chapter<C>(
    data: web::Data<ServerData>,
    params: web::Path<(String, i32)>,
    req: HttpRequest,
) -> ViewResult
where
    C: Concordance + 'static,
{
    let (book, chapter) = params.into_inner();
    let source = data.corpus.to_owned();
    let name = book.to_owned();
    let verses = web::block(move || C::verses(&name, chapter, &source)).await??;

    if verses.is_empty() {
        return Err(Error::ChapterNotFound { book, chapter }.into());
    }

    let verses_data = VersesData::new(book, chapter, verses, &req);
    let body = TemplateData::new(
        &verses_data,
        Meta::for_chapter(
            &verses_data.reference_string,
            &verses_data.verses,
            &verses_data.links,
        ),
    )
    .to_html("verses", &data.template)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(body))
}

/// Handles HTTP requests for a search results page.
///
/// Returns an HTML page with every verse whose text contains the
/// posted query as a case-insensitive substring.
pub async fn search<C>(
    data: web::Data<ServerData>,
    form: web::Form<SearchForm>,
    req: HttpRequest,
) -> ViewResult
where
    C: Concordance + 'static,
{
    let query = form.into_inner().query;
    let source = data.corpus.to_owned();
    let q = query.to_owned();
    let verses = web::block(move || C::search(&q, &source)).await??;

    let body = TemplateData::new(
        SearchResultData::from_verses(query.to_owned(), verses, &req),
        Meta::for_search(&query, &req.uri().to_string()),
    )
    .to_html("search-results", &data.template)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(body))
}

/// Sends search visitors without a posted query back to the book
/// index.
pub async fn search_redirect() -> ViewResult {
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish())
}

/// Handles HTTP requests for the Old Testament book list.
pub async fn old_testament<C>(data: web::Data<ServerData>, req: HttpRequest) -> ViewResult
where
    C: Concordance + 'static,
{
    testament_page::<C>(Testament::Old, data, req).await
}

/// Handles HTTP requests for the New Testament book list.
pub async fn new_testament<C>(data: web::Data<ServerData>, req: HttpRequest) -> ViewResult
where
    C: Concordance + 'static,
{
    testament_page::<C>(Testament::New, data, req).await
}

async fn testament_page<C>(
    testament: Testament,
    data: web::Data<ServerData>,
    req: HttpRequest,
) -> ViewResult
where
    C: Concordance + 'static,
{
    let source = data.corpus.to_owned();
    let books = web::block(move || C::testament_books(testament, &source)).await??;
    debug!("{}: {:?}", testament, books);

    let testament_data = TestamentData::new(testament, books, &req);
    let body = TemplateData::new(&testament_data, Meta::for_testament(testament))
        .to_html("testament", &data.template)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(body))
}

/// Default service for every path without a route.
pub async fn not_found() -> ViewResult {
    Err(Error::PageNotFound.into())
}
