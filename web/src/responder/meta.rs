use serde_derive::Serialize;

use corpus::models::{Testament, Verse};

use crate::responder::link::VersesLinks;

/// Head metadata for a rendered page: title, description, and the
/// canonical URL.
#[derive(Clone, Serialize, Debug)]
pub struct Meta {
    description: String,
    title: String,
    url: String,
}

impl Meta {
    pub fn for_about() -> Self {
        Self {
            description: "About Scriptura".to_string(),
            title: format!(title_format!(), "About"),
            url: format!(url_format!(), "/about"),
        }
    }

    pub fn for_all_books() -> Self {
        Self {
            description: "Browse and search the King James Version of the Bible."
                .to_string(),
            title: format!(title_format!(), "King James Version"),
            url: format!(url_format!(), ""),
        }
    }

    pub fn for_book(book: &str, url: &str) -> Self {
        Self {
            description: format!("The book of {}", book),
            title: format!(title_format!(), book),
            url: format!(url_format!(), url),
        }
    }

    pub fn for_error() -> Self {
        Self {
            description: "Error page".to_string(),
            title: format!(title_format!(), "Error"),
            url: format!(url_format!(), ""),
        }
    }

    pub fn for_chapter(reference: &str, verses: &[Verse], links: &VersesLinks) -> Self {
        Self {
            description: match verses.first() {
                None => reference.to_owned(),
                Some(v) => format!("{}...", v.text),
            },
            title: format!(title_format!(), reference),
            url: format!(url_format!(), links.current.url),
        }
    }

    pub fn for_search(query: &str, url: &str) -> Self {
        let results_string = format!("Results for '{}'", query);
        Self {
            description: results_string.to_owned(),
            title: format!(title_format!(), results_string),
            url: format!(url_format!(), url),
        }
    }

    pub fn for_testament(testament: Testament) -> Self {
        let name = testament.to_string();
        let url = match testament {
            Testament::Old => "/old-testament",
            Testament::New => "/new-testament",
        };
        Self {
            description: format!("Books of the {}", name),
            title: format!(title_format!(), name),
            url: format!(url_format!(), url),
        }
    }
}
