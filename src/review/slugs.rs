use crate::error::Result;
use std::io::Read;
use std::path::Path;

const SCHOOL_SEGMENT: &str = "/school/";

/// The path segment after `/school/`, if the URL has one.
pub fn slug_from_url(url: &str) -> Option<&str> {
    let start = url.find(SCHOOL_SEGMENT)? + SCHOOL_SEGMENT.len();
    let rest = &url[start..];
    let slug = rest.split('/').next().unwrap_or_default();
    (!slug.is_empty()).then_some(slug)
}

/// Slugs from every non-empty data cell of a CSV, column by column. The first row is a header.
pub fn slugs_from_csv<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut columns: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        for (index, cell) in record.iter().enumerate() {
            if columns.len() <= index {
                columns.resize_with(index + 1, Vec::new);
            }
            if !cell.is_empty() {
                columns[index].push(cell.to_string());
            }
        }
    }

    Ok(columns
        .iter()
        .flatten()
        .filter_map(|cell| slug_from_url(cell))
        .map(str::to_string)
        .collect())
}

pub fn slugs_from_csv_path(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    let slugs = slugs_from_csv(file)?;
    tracing::debug!(path = %path.display(), count = slugs.len(), "slugs extracted");
    Ok(slugs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_the_segment_after_school() {
        assert_eq!(
            slug_from_url("https://ezyschooling.com/school/green-valley-school"),
            Some("green-valley-school")
        );
        assert_eq!(
            slug_from_url("https://ezyschooling.com/school/dps-rk-puram/fees"),
            Some("dps-rk-puram")
        );
        assert_eq!(slug_from_url("https://ezyschooling.com/school/"), None);
        assert_eq!(slug_from_url("https://ezyschooling.com/schools"), None);
        assert_eq!(slug_from_url("not a url"), None);
    }

    #[test]
    fn csv_cells_are_read_column_by_column() {
        let input = "\
primary,backup
https://ezyschooling.com/school/alpha,https://ezyschooling.com/school/gamma
https://ezyschooling.com/school/beta,
notes only,https://example.com/about
";
        let slugs = slugs_from_csv(input.as_bytes()).expect("csv should parse");
        assert_eq!(slugs, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn header_row_is_not_scanned() {
        let input = "https://ezyschooling.com/school/header-only\n";
        let slugs = slugs_from_csv(input.as_bytes()).expect("csv should parse");
        assert!(slugs.is_empty());
    }

    #[test]
    fn reads_slugs_from_file() {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("schools.csv");
        std::fs::write(&path, "url\nhttps://ezyschooling.com/school/delta\n")
            .expect("csv should be written");
        let slugs = slugs_from_csv_path(&path).expect("csv should be read");
        assert_eq!(slugs, vec!["delta"]);
    }
}
