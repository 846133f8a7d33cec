use serde_derive::Deserialize;

pub mod view;

/// Form body posted by the search box.
#[derive(Deserialize)]
pub struct SearchForm {
    pub query: String,
}
