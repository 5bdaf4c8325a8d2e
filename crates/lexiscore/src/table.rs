//! CSV input rows and metric output rows.

use std::collections::HashSet;
use std::io::Write;

use anyhow::Context;
use camino::Utf8Path;
use lexiscore_core::{BatchEntry, MetricsRecord};

/// Read batch entries from a CSV file with `URL_ID` and `URL` columns.
///
/// Other columns are ignored and cells are trimmed. A row missing either
/// column is an error; a repeated identifier is only warned about.
pub fn read_entries(path: &Utf8Path) -> anyhow::Result<Vec<BatchEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_std_path())
        .with_context(|| format!("failed to open input table {path}"))?;

    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    for (index, row) in reader.deserialize::<BatchEntry>().enumerate() {
        // Header is line 1.
        let entry = row.with_context(|| format!("{path}: invalid row at line {}", index + 2))?;
        if !seen.insert(entry.id.clone()) {
            tracing::warn!(id = %entry.id, "duplicate URL_ID in input");
        }
        entries.push(entry);
    }

    tracing::debug!(rows = entries.len(), "input table read");
    Ok(entries)
}

/// Write records as CSV, header first, columns in [`MetricsRecord::COLUMNS`] order.
///
/// The header is written even when there are no records.
pub fn write_records<W: Write>(writer: W, records: &[MetricsRecord]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(MetricsRecord::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use lexiscore_core::{Document, Lexicon, analyze};
    use std::fs;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join("input.csv")).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_id_and_url_ignoring_extra_columns() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(
            &tmp,
            "URL_ID,URL,NOTES\n37, https://example.com/a ,first\n38,docs/b.txt,\n",
        );

        let entries = read_entries(&path).unwrap();
        assert_eq!(
            entries,
            vec![
                BatchEntry {
                    id: "37".into(),
                    url: "https://example.com/a".into()
                },
                BatchEntry {
                    id: "38".into(),
                    url: "docs/b.txt".into()
                },
            ]
        );
    }

    #[test]
    fn column_order_does_not_matter() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(&tmp, "URL,URL_ID\na.txt,1\n");

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries[0].id, "1");
        assert_eq!(entries[0].url, "a.txt");
    }

    #[test]
    fn missing_column_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(&tmp, "ID,LINK\n1,a.txt\n");

        assert!(read_entries(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_entries(Utf8Path::new("/nonexistent/input.csv")).unwrap_err();
        assert!(err.to_string().contains("failed to open input table"));
    }

    #[test]
    fn header_is_written_for_empty_output() {
        let mut out = Vec::new();
        write_records(&mut out, &[]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim_end(), MetricsRecord::COLUMNS.join(","));
    }

    #[test]
    fn rows_follow_header_order() {
        let lexicon = Lexicon::from_words(["good"], ["bad"]);
        let record = analyze(
            &Document {
                id: "7".into(),
                url: "https://example.com/x".into(),
                text: "Good news. We like it.".into(),
            },
            &lexicon,
        );

        let mut out = Vec::new();
        write_records(&mut out, std::slice::from_ref(&record)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next().unwrap(), MetricsRecord::COLUMNS.join(","));
        let row: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(row.len(), MetricsRecord::COLUMNS.len());
        assert_eq!(row[0], "7");
        assert_eq!(row[1], "https://example.com/x");
        assert_eq!(row[2], "1");
        assert_eq!(row[3], "0");
        assert!(lines.next().is_none());
    }

    #[test]
    fn every_field_lands_under_its_column() {
        let record = MetricsRecord {
            url_id: "id".into(),
            url: "u".into(),
            positive_score: 3,
            negative_score: 4,
            polarity_score: 0.5,
            subjectivity_score: 0.25,
            avg_sentence_length: 7.5,
            percentage_of_complex_words: 0.125,
            fog_index: 8.75,
            avg_number_of_words_per_sentence: 9.5,
            complex_word_count: 10,
            word_count: 11,
            syllable_per_word: 1.375,
            personal_pronouns: 12,
            avg_word_length: 4.625,
        };
        let expected: [(&str, f64); 13] = [
            ("POSITIVE SCORE", 3.0),
            ("NEGATIVE SCORE", 4.0),
            ("POLARITY SCORE", 0.5),
            ("SUBJECTIVITY SCORE", 0.25),
            ("AVG SENTENCE LENGTH", 7.5),
            ("PERCENTAGE OF COMPLEX WORDS", 0.125),
            ("FOG INDEX", 8.75),
            ("AVG NUMBER OF WORDS PER SENTENCE", 9.5),
            ("COMPLEX WORD COUNT", 10.0),
            ("WORD COUNT", 11.0),
            ("SYLLABLE PER WORD", 1.375),
            ("PERSONAL PRONOUNS", 12.0),
            ("AVG WORD LENGTH", 4.625),
        ];

        let mut out = Vec::new();
        write_records(&mut out, &[record]).unwrap();
        let mut reader = csv::Reader::from_reader(out.as_slice());
        let headers = reader.headers().unwrap().clone();
        let row = reader.records().next().unwrap().unwrap();

        assert_eq!(headers.iter().collect::<Vec<_>>(), MetricsRecord::COLUMNS);
        assert_eq!(&row[0], "id");
        assert_eq!(&row[1], "u");
        for (offset, (column, value)) in expected.iter().enumerate() {
            let index = offset + 2;
            assert_eq!(&headers[index], *column);
            let cell: f64 = row[index].parse().unwrap();
            assert!((cell - value).abs() < f64::EPSILON, "{column}: got {cell}");
        }
    }
}
