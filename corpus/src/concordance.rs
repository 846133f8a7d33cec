use std::collections::HashSet;
use std::hash::Hash;

use crate::loader;
use crate::models::{Testament, Verse};
use crate::{CorpusError, CorpusSource};

/// Trait implemented by types that can query the verse corpus.
///
/// Every operation reads the corpus fresh through the source handle, so
/// two calls never share state. The web layer is generic over this
/// trait and substitutes a fixed-data implementation in its tests.
pub trait Concordance {
    /// Lists the distinct book names in the corpus, ordered by first
    /// appearance in the file.
    fn all_books(source: &CorpusSource) -> Result<Vec<String>, CorpusError>;

    /// Lists the distinct book names classified into the given
    /// testament, ordered by first appearance among matching records.
    ///
    /// A book in neither membership list appears in neither testament.
    fn testament_books(
        testament: Testament,
        source: &CorpusSource,
    ) -> Result<Vec<String>, CorpusError>;

    /// Lists the distinct chapter numbers of the given book, in file
    /// order (not guaranteed sorted). An unknown book yields an empty
    /// list rather than an error.
    fn chapters(book: &str, source: &CorpusSource) -> Result<Vec<i32>, CorpusError>;

    /// Returns the full records of the given book and chapter. No
    /// matches yield an empty list rather than an error.
    fn verses(book: &str, chapter: i32, source: &CorpusSource)
        -> Result<Vec<Verse>, CorpusError>;

    /// Returns every record whose text contains the query as a
    /// case-insensitive substring.
    ///
    /// The empty query is a substring of everything and so matches the
    /// whole corpus.
    fn search(query: &str, source: &CorpusSource) -> Result<Vec<Verse>, CorpusError>;
}

/// Main implementation of [`Concordance`], backed by the CSV corpus.
pub struct CsvConcordance;

impl Concordance for CsvConcordance {
    fn all_books(source: &CorpusSource) -> Result<Vec<String>, CorpusError> {
        Ok(distinct(loader::load(source)?.into_iter().map(|v| v.book)))
    }

    fn testament_books(
        testament: Testament,
        source: &CorpusSource,
    ) -> Result<Vec<String>, CorpusError> {
        let classified = source.testaments().classify(loader::load(source)?);

        Ok(distinct(
            classified
                .into_iter()
                .filter(|c| c.testament == Some(testament))
                .map(|c| c.verse.book),
        ))
    }

    fn chapters(book: &str, source: &CorpusSource) -> Result<Vec<i32>, CorpusError> {
        Ok(distinct(
            loader::load(source)?
                .into_iter()
                .filter(|v| v.book == book)
                .map(|v| v.chapter),
        ))
    }

    fn verses(
        book: &str,
        chapter: i32,
        source: &CorpusSource,
    ) -> Result<Vec<Verse>, CorpusError> {
        Ok(loader::load(source)?
            .into_iter()
            .filter(|v| v.book == book && v.chapter == chapter)
            .collect())
    }

    fn search(query: &str, source: &CorpusSource) -> Result<Vec<Verse>, CorpusError> {
        let needle = query.to_lowercase();

        Ok(loader::load(source)?
            .into_iter()
            .filter(|v| v.text.to_lowercase().contains(&needle))
            .collect())
    }
}

/// Keeps the first occurrence of each distinct item, preserving
/// encounter order.
fn distinct<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
