use actix_web::error::UrlGenerationError;
use actix_web::HttpRequest;
use log::error;
use serde_derive::Serialize;
use url::Url;

/// Name used in the HTML title generator
pub const NAME: &str = "Scriptura";

fn invalid_url(e: UrlGenerationError) -> Url {
    error!("{:?}", e);
    Url::parse("https://scriptura.rs").unwrap()
}

/// Generates the URL of the book index.
fn index_url(req: &HttpRequest) -> Link {
    Link::new(
        &req.url_for_static("index").unwrap_or_else(invalid_url),
        NAME.to_string(),
    )
}

/// Generates a chapter-list URL for the given book.
fn book_url(b: &str, req: &HttpRequest) -> Link {
    Link::new(
        &req.url_for("book", [b]).unwrap_or_else(invalid_url),
        b.to_string(),
    )
}

/// Generates a verses URL for the given book and chapter.
fn chapter_url(b: &str, c: i32, req: &HttpRequest) -> Link {
    let chapter_string = c.to_string();
    Link::new(
        &req.url_for("chapter", [b, chapter_string.as_str()])
            .unwrap_or_else(invalid_url),
        format!("{} {}", b, chapter_string),
    )
}

/// Generates a verse URL from the given book, chapter, and verse.
///
/// The URL targets the chapter page with a fragment anchoring the
/// individual verse.
pub(super) fn verse_url(b: &str, c: i32, v: i32, req: &HttpRequest) -> Link {
    let chapter_string = c.to_string();
    let verse_string = v.to_string();
    let mut url = req
        .url_for("chapter", [b, chapter_string.as_str()])
        .unwrap_or_else(invalid_url);
    url.set_fragment(Some(&format!("v{}", verse_string)));
    Link::new(&url, format!("{} {}:{}", b, chapter_string, verse_string))
}

/// Link representing a URL and label
#[derive(Clone, Serialize, Debug)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    fn new(url: &Url, label: String) -> Self {
        let url_string = if let Some(fragment) = url.fragment() {
            format!("{}#{}", url.path(), fragment)
        } else {
            url.path().to_string()
        };

        Self {
            label,
            url: url_string,
        }
    }
}

/// Links for the book index.
#[derive(Clone, Serialize, Debug)]
pub struct AllBooksLinks {
    pub old_testament: Vec<Link>,
    pub new_testament: Vec<Link>,
}

impl AllBooksLinks {
    /// Creates book links for both testament lists.
    pub(super) fn new(old: &[String], new: &[String], req: &HttpRequest) -> Self {
        Self {
            old_testament: old.iter().map(|b| book_url(b, req)).collect(),
            new_testament: new.iter().map(|b| book_url(b, req)).collect(),
        }
    }
}

/// Links for the chapter list of one book.
#[derive(Clone, Serialize, Debug)]
pub struct ChaptersLinks {
    pub books: Link,
    pub chapters: Vec<Link>,
    pub current: Link,
}

impl ChaptersLinks {
    /// Creates a new structure of chapter links. Chapter labels carry
    /// the bare number; the book name is already on the page.
    pub(super) fn new(book: &str, chapters: &[i32], req: &HttpRequest) -> Self {
        Self {
            books: index_url(req),
            chapters: chapters
                .iter()
                .map(|c| {
                    let mut link = chapter_url(book, *c, req);
                    link.label = c.to_string();
                    link
                })
                .collect(),
            current: book_url(book, req),
        }
    }
}

/// Links for the verses of one chapter.
#[derive(Clone, Serialize, Debug)]
pub struct VersesLinks {
    pub books: Link,
    pub book: Link,
    pub current: Link,
}

impl VersesLinks {
    /// Creates a new structure of verses links.
    pub(super) fn new(book: &str, chapter: i32, req: &HttpRequest) -> Self {
        Self {
            books: index_url(req),
            book: book_url(book, req),
            current: chapter_url(book, chapter, req),
        }
    }
}

/// Links for a single-testament book list.
#[derive(Clone, Serialize, Debug)]
pub struct TestamentLinks {
    pub books: Vec<Link>,
}

impl TestamentLinks {
    pub(super) fn new(books: &[String], req: &HttpRequest) -> Self {
        Self {
            books: books.iter().map(|b| book_url(b, req)).collect(),
        }
    }
}
