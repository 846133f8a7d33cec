use actix_web::HttpRequest;
use handlebars::Handlebars;
use log::error;
use serde;
use serde_derive::Serialize;

use corpus::models::{Testament, Verse};

use crate::error::Error;
use crate::responder::link::{
    verse_url, AllBooksLinks, ChaptersLinks, Link, TestamentLinks, VersesLinks,
};
use crate::responder::meta::Meta;

/// Represents empty data.
///
/// This is used to render Handlebars templates that don't
/// need any context to render (e.g. the About page).
#[derive(Clone, Serialize, Debug)]
pub struct EmptyData;

/// Error data for the error page.
#[derive(Clone, Serialize, Debug)]
pub struct ErrorData {
    message: String,
}

impl ErrorData {
    /// Creates new error data from a web [`Error`].
    pub fn from_error(e: &Error) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}

/// Data for the book index, split into testament lists.
#[derive(Clone, Serialize, Debug)]
pub struct AllBooksData {
    old_testament: Vec<String>,
    new_testament: Vec<String>,
    pub links: AllBooksLinks,
}

impl AllBooksData {
    pub fn new(old: Vec<String>, new: Vec<String>, req: &HttpRequest) -> Self {
        let links = AllBooksLinks::new(&old, &new, req);
        Self {
            old_testament: old,
            new_testament: new,
            links,
        }
    }
}

/// Data for the chapter list of one book.
#[derive(Clone, Serialize, Debug)]
pub struct ChaptersData {
    pub book: String,
    pub chapters: Vec<i32>,
    pub links: ChaptersLinks,
}

impl ChaptersData {
    /// Creates new chapter list data.
    pub fn new(book: String, chapters: Vec<i32>, req: &HttpRequest) -> Self {
        let links = ChaptersLinks::new(&book, &chapters, req);
        Self {
            book,
            chapters,
            links,
        }
    }
}

/// Data for the verses of one chapter.
#[derive(Clone, Serialize, Debug)]
pub struct VersesData {
    pub book: String,
    pub chapter: i32,
    pub reference_string: String,
    pub verses: Vec<Verse>,
    pub links: VersesLinks,
}

impl VersesData {
    /// Creates new data for the verses page.
    pub fn new(book: String, chapter: i32, verses: Vec<Verse>, req: &HttpRequest) -> Self {
        let reference_string = format!("{} {}", book, chapter);
        let links = VersesLinks::new(&book, chapter, req);

        Self {
            book,
            chapter,
            reference_string,
            verses,
            links,
        }
    }
}

/// A search result.
#[derive(Clone, Serialize, Debug)]
pub struct SearchResult {
    link: Link,
    pub text: String,
}

/// Data for the search results page.
#[derive(Clone, Serialize, Debug)]
pub struct SearchResultData {
    pub matches: Vec<SearchResult>,
    pub query: String,
}

impl SearchResultData {
    /// Creates new search result data from matching verses.
    pub fn from_verses(query: String, verses: Vec<Verse>, req: &HttpRequest) -> Self {
        let matches = verses.into_iter().map(|v| SearchResult {
            link: verse_url(&v.book, v.chapter, v.verse, req),
            text: v.text,
        });

        Self {
            matches: matches.collect(),
            query,
        }
    }
}

/// Data for a single-testament book list.
#[derive(Clone, Serialize, Debug)]
pub struct TestamentData {
    pub testament: String,
    pub books: Vec<String>,
    pub links: TestamentLinks,
}

impl TestamentData {
    pub fn new(testament: Testament, books: Vec<String>, req: &HttpRequest) -> Self {
        let links = TestamentLinks::new(&books, req);
        Self {
            testament: testament.to_string(),
            books,
            links,
        }
    }
}

/// The full context handed to a page template: the page data plus the
/// head metadata.
#[derive(Clone, Serialize, Debug)]
pub struct TemplateData<T: serde::Serialize> {
    data: T,
    meta: Meta,
}

impl<T: serde::Serialize> TemplateData<T> {
    /// Create new HTML template data.
    pub fn new(data: T, meta: Meta) -> Self {
        Self { data, meta }
    }

    /// Convert the template data to HTML
    pub fn to_html(&self, tpl_name: &str, renderer: &Handlebars) -> Result<String, Error> {
        renderer.render(tpl_name, &self).map_err(|e| {
            error!("{}", e);
            Error::Template
        })
    }
}
