use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// Record for one verse in the corpus.
///
/// A verse is uniquely identified by `(book, chapter, verse)`. The
/// `serde` renames bind each field to its exact column name in the
/// source file; a file with different headers fails to load.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Verse {
    #[serde(rename(deserialize = "Book"))]
    pub book: String,
    #[serde(rename(deserialize = "Chapter"))]
    pub chapter: i32,
    #[serde(rename(deserialize = "Verse"))]
    pub verse: i32,
    #[serde(rename(deserialize = "Text"))]
    pub text: String,
}

/// Enum for the testaments in the corpus (Old or New). The label is
/// derived from the book name at query time, never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Testament {
    Old,
    New,
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Testament::Old => write!(f, "Old Testament"),
            Testament::New => write!(f, "New Testament"),
        }
    }
}
