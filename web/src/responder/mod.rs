//! Page payloads handed to the Handlebars templates: per-page data
//! structures, generated links, and head metadata.

mod data;
mod link;
mod meta;

pub use self::data::{
    AllBooksData, ChaptersData, EmptyData, ErrorData, SearchResultData, TemplateData,
    TestamentData, VersesData,
};
pub use self::meta::Meta;
