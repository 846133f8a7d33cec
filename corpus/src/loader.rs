use csv::Reader;

use crate::models::Verse;
use crate::{CorpusError, CorpusSource};

/// Reads every verse record from the corpus file, in file order.
///
/// The file is read fresh on every call; nothing is cached between
/// calls. The header row must carry the exact column names `Book`,
/// `Chapter`, `Verse`, and `Text`. Any read or parse failure maps to
/// [`CorpusError::DataUnavailable`].
pub fn load(source: &CorpusSource) -> Result<Vec<Verse>, CorpusError> {
    let mut reader = Reader::from_path(source.path()).map_err(data_unavailable)?;
    reader
        .deserialize::<Verse>()
        .map(|row| row.map_err(data_unavailable))
        .collect()
}

fn data_unavailable(e: csv::Error) -> CorpusError {
    CorpusError::DataUnavailable {
        cause: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn source_from(contents: &str) -> (NamedTempFile, CorpusSource) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let source = CorpusSource::new(file.path());
        (file, source)
    }

    #[test]
    fn loads_records_in_file_order() {
        let (_file, source) = source_from(
            "Book,Chapter,Verse,Text\n\
             Genesis,1,1,\"In the beginning God created the heaven and the earth.\"\n\
             Genesis,1,2,\"And the earth was without form, and void; and darkness was upon the face of the deep.\"\n\
             John,11,35,Jesus wept.\n",
        );

        let verses = load(&source).unwrap();

        assert_eq!(verses.len(), 3);
        assert_eq!(verses[0].book, "Genesis");
        assert_eq!(verses[0].chapter, 1);
        assert_eq!(verses[0].verse, 1);
        assert_eq!(verses[2].text, "Jesus wept.");
    }

    #[test]
    fn quoted_fields_keep_their_commas() {
        let (_file, source) = source_from(
            "Book,Chapter,Verse,Text\n\
             Genesis,1,2,\"And the earth was without form, and void; and darkness was upon the face of the deep.\"\n",
        );

        let verses = load(&source).unwrap();

        assert!(verses[0].text.contains("without form, and void"));
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let source = CorpusSource::new("./no/such/corpus.csv");

        let err = load(&source).unwrap_err();

        assert!(matches!(err, CorpusError::DataUnavailable { .. }));
    }

    #[test]
    fn wrong_headers_are_data_unavailable() {
        let (_file, source) = source_from(
            "book,chapter,verse,text\n\
             Genesis,1,1,In the beginning\n",
        );

        let err = load(&source).unwrap_err();

        assert!(matches!(err, CorpusError::DataUnavailable { .. }));
    }

    #[test]
    fn unparseable_chapter_is_data_unavailable() {
        let (_file, source) = source_from(
            "Book,Chapter,Verse,Text\n\
             Genesis,one,1,In the beginning\n",
        );

        let err = load(&source).unwrap_err();

        assert!(matches!(err, CorpusError::DataUnavailable { .. }));
    }
}
