use std::path::Path;

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use handlebars::Handlebars;
use lazy_static::lazy_static;
use log::error;
use thiserror::Error as ThisError;

use corpus::CorpusError;

use crate::responder::{ErrorData, Meta, TemplateData};

/// Error type for the application.
#[derive(ThisError, Debug)]
pub enum Error {
    #[error("There was an error with the Actix blocking pool. Cause: {cause}")]
    Actix { cause: String },

    #[error("The corpus could not be read. Cause: {cause}")]
    Corpus { cause: String },

    #[error("{book} {chapter} was not found.")]
    ChapterNotFound { book: String, chapter: i32 },

    #[error("That page was not found.")]
    PageNotFound,

    #[error("There was an error rendering the HTML page.")]
    Template,
}

impl From<CorpusError> for Error {
    fn from(e: CorpusError) -> Self {
        match e {
            CorpusError::DataUnavailable { cause } => Error::Corpus { cause },
        }
    }
}

lazy_static! {
    static ref ERR_TPL: Handlebars<'static> = {
        // The server runs from the workspace root; tests run from web/.
        let dir = if Path::new("./web/templates").exists() {
            "./web/templates"
        } else {
            "./templates"
        };

        let mut tpl = Handlebars::new();
        tpl.register_template_file("base", format!("{}/base.hbs", dir))
            .unwrap();
        tpl.register_template_file("error", format!("{}/error.hbs", dir))
            .unwrap();
        tpl
    };
}

/// Error to display as HTML.
#[derive(ThisError, Debug)]
#[error("HTML Error: {0}")]
pub struct HtmlError(pub Error);

impl From<Error> for HtmlError {
    fn from(f: Error) -> Self {
        HtmlError(f)
    }
}

impl From<CorpusError> for HtmlError {
    fn from(e: CorpusError) -> Self {
        HtmlError(Error::from(e))
    }
}

impl From<BlockingError> for HtmlError {
    fn from(e: BlockingError) -> Self {
        error!("{}", e);
        HtmlError(Error::Actix {
            cause: e.to_string(),
        })
    }
}

impl ResponseError for HtmlError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            Error::Actix { .. } | Error::Corpus { .. } | Error::Template => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Error::ChapterNotFound { .. } | Error::PageNotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Transforms an [`HtmlError`] into an HTTP response carrying the
    /// rendered error page.
    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Unhandled: {}", self.0);
        }

        let body = TemplateData::new(ErrorData::from_error(&self.0), Meta::for_error())
            .to_html("error", &ERR_TPL)
            .unwrap_or_else(|_| format!("<h1>Error</h1><p>{}</p>", self.0));

        HttpResponse::build(self.status_code())
            .content_type("text/html")
            .body(body)
    }
}
