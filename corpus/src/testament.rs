use std::collections::HashSet;

use crate::models::{Testament, Verse};

/// Old Testament book names, in canonical order.
pub const OLD_TESTAMENT: [&str; 39] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
];

/// New Testament book names, in canonical order.
pub const NEW_TESTAMENT: [&str; 27] = [
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// A verse record paired with its derived testament label.
#[derive(Clone, Debug)]
pub struct ClassifiedVerse {
    pub testament: Option<Testament>,
    pub verse: Verse,
}

/// Membership index mapping book names to testaments.
///
/// The two name sets are collected once at construction. Lookups are
/// exact, case-sensitive matches against the sets.
#[derive(Clone, Debug)]
pub struct TestamentIndex {
    old: HashSet<&'static str>,
    new: HashSet<&'static str>,
}

impl TestamentIndex {
    /// Builds an index from caller-supplied name lists.
    pub fn new(old: &[&'static str], new: &[&'static str]) -> Self {
        Self {
            old: old.iter().copied().collect(),
            new: new.iter().copied().collect(),
        }
    }

    /// Builds the canonical sixty-six book index.
    pub fn canonical() -> Self {
        Self::new(&OLD_TESTAMENT, &NEW_TESTAMENT)
    }

    /// Returns the testament for the given book name.
    ///
    /// A name in both sets resolves to `Old` (checked first). A name in
    /// neither set yields `None` rather than an error.
    pub fn label(&self, book: &str) -> Option<Testament> {
        if self.old.contains(book) {
            Some(Testament::Old)
        } else if self.new.contains(book) {
            Some(Testament::New)
        } else {
            None
        }
    }

    /// Annotates each record with its derived testament label.
    pub fn classify(&self, verses: Vec<Verse>) -> Vec<ClassifiedVerse> {
        verses
            .into_iter()
            .map(|verse| ClassifiedVerse {
                testament: self.label(&verse.book),
                verse,
            })
            .collect()
    }
}
