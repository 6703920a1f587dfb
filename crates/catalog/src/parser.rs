//! Parsers for course collection files.
//!
//! Two formats are supported:
//! - CSV export of the course spreadsheet, one header row naming the columns
//! - JSON array of course objects with the same field names
//!
//! CSV fields may be quoted. Inside quotes, commas and newlines are literal and
//! `""` is an escaped quote, which matters for scholarship descriptions such as
//! `"UC International First Year Scholarship - $10,000-20,000"`.

use crate::error::{CatalogError, Result};
use crate::types::CourseRecord;
use rayon::prelude::*;
use std::path::Path;

/// Columns every CSV file must provide
const REQUIRED_COLUMNS: [&str; 12] = [
    "university_name",
    "location",
    "course_name",
    "course_level",
    "field_of_study",
    "duration_years",
    "tuition_fee_nzd",
    "entry_requirements",
    "exams_required",
    "scholarship_available",
    "scholarship_details",
    "apply_link",
];

/// Optional column, defaulting to an empty string
const IMAGE_COLUMN: &str = "image_url";

/// One physical CSV record and the line it started on
#[derive(Debug)]
struct RawRow {
    line: usize,
    fields: Vec<String>,
}

/// Position of every known column in the header row
struct ColumnMap {
    width: usize,
    required: [usize; REQUIRED_COLUMNS.len()],
    image_url: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &RawRow, file: &str) -> Result<Self> {
        let names: Vec<&str> = header.fields.iter().map(|f| f.trim()).collect();
        let position = |column: &str| names.iter().position(|name| *name == column);

        let mut required = [0; REQUIRED_COLUMNS.len()];
        for (slot, column) in required.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = position(column).ok_or_else(|| CatalogError::MissingColumn {
                file: file.to_string(),
                column: column.to_string(),
            })?;
        }

        Ok(Self {
            width: names.len(),
            required,
            image_url: position(IMAGE_COLUMN),
        })
    }

    fn to_course(&self, row: &RawRow) -> Result<CourseRecord> {
        if row.fields.len() != self.width {
            return Err(CatalogError::FieldCountMismatch {
                expected: self.width,
                found: row.fields.len(),
                line: row.line,
            });
        }

        let value = |idx: usize| row.fields[idx].trim().to_string();
        let [
            university_name,
            location,
            course_name,
            course_level,
            field_of_study,
            duration_years,
            tuition_fee_nzd,
            entry_requirements,
            exams_required,
            scholarship_available,
            scholarship_details,
            apply_link,
        ] = self.required.map(value);

        Ok(CourseRecord {
            university_name,
            location,
            image_url: self.image_url.map(value).unwrap_or_default(),
            course_name,
            course_level,
            field_of_study,
            duration_years,
            tuition_fee_nzd,
            entry_requirements,
            exams_required,
            scholarship_available,
            scholarship_details,
            apply_link,
        })
    }
}

/// Split CSV text into records, honouring quoted fields.
///
/// Blank lines are dropped. An unterminated quote is reported against the
/// line the record started on.
fn split_records(content: &str, file: &str) -> Result<Vec<RawRow>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            '\n' if in_quotes => {
                field.push('\n');
                line += 1;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            '\n' => {
                fields.push(std::mem::take(&mut field));
                push_row(&mut rows, row_start, std::mem::take(&mut fields));
                line += 1;
                row_start = line;
            }
            '\r' if !in_quotes => {}
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(CatalogError::ParseError {
            file: file.to_string(),
            line: row_start,
            reason: "Unterminated quoted field".to_string(),
        });
    }

    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_row(&mut rows, row_start, fields);
    }

    Ok(rows)
}

fn push_row(rows: &mut Vec<RawRow>, line: usize, fields: Vec<String>) {
    let blank = fields.len() == 1 && fields[0].trim().is_empty();
    if !blank {
        rows.push(RawRow { line, fields });
    }
}

/// Parse CSV text into course records.
///
/// `file` is only used for error messages. Rows are converted in parallel;
/// the output keeps file order.
pub fn parse_courses_csv_str(content: &str, file: &str) -> Result<Vec<CourseRecord>> {
    let mut rows = split_records(content, file)?.into_iter();

    let header = match rows.next() {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };
    let columns = ColumnMap::from_header(&header, file)?;

    let rows: Vec<RawRow> = rows.collect();
    rows.par_iter().map(|row| columns.to_course(row)).collect()
}

/// Parse the CSV course file at `path`
pub fn parse_courses_csv(path: &Path) -> Result<Vec<CourseRecord>> {
    let content = std::fs::read_to_string(path)?;
    parse_courses_csv_str(&content, &file_name(path))
}

/// Parse a JSON array of course records
pub fn parse_courses_json_str(content: &str, file: &str) -> Result<Vec<CourseRecord>> {
    serde_json::from_str(content).map_err(|source| CatalogError::JsonError {
        file: file.to_string(),
        source,
    })
}

/// Parse the JSON course file at `path`
pub fn parse_courses_json(path: &Path) -> Result<Vec<CourseRecord>> {
    let content = std::fs::read_to_string(path)?;
    parse_courses_json_str(&content, &file_name(path))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "university_name,location,image_url,course_name,course_level,field_of_study,duration_years,tuition_fee_nzd,entry_requirements,exams_required,scholarship_available,scholarship_details,apply_link";

    #[test]
    fn test_parse_csv_with_quoted_fields() {
        let csv = format!(
            "{HEADER}\n\
             University of Canterbury,Christchurch,,Bachelor of Engineering,Undergraduate,Engineering,4,30000,\"High school diploma with math/science\",IELTS,Yes,\"UC International First Year Scholarship - $10,000-20,000\",https://www.canterbury.ac.nz/study\n"
        );

        let courses = parse_courses_csv_str(&csv, "courses.csv").unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(
            courses[0].scholarship_details,
            "UC International First Year Scholarship - $10,000-20,000"
        );
        assert_eq!(courses[0].tuition_fee(), Some(30000));
        assert_eq!(courses[0].image_url, "");
    }

    #[test]
    fn test_escaped_quotes_and_embedded_newlines() {
        let csv = format!(
            "{HEADER}\r\n\
             A,B,,C,Postgraduate,IT,2,1,\"Say \"\"hi\"\"\nthen apply\",IELTS,No,,https://a\r\n\
             \r\n\
             D,E,,F,Undergraduate,IT,3,2,none,PTE,No,,https://d\r\n"
        );

        let courses = parse_courses_csv_str(&csv, "courses.csv").unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].entry_requirements, "Say \"hi\"\nthen apply");
        assert_eq!(courses[1].university_name, "D");
    }

    #[test]
    fn test_columns_in_any_order_without_image() {
        let csv = "apply_link,university_name,location,course_name,course_level,field_of_study,duration_years,tuition_fee_nzd,entry_requirements,exams_required,scholarship_available,scholarship_details\n\
                   https://x,Lincoln University,Lincoln,Bachelor of Agriculture,Undergraduate,Agriculture,3,29000,NCEA,IELTS,No,";

        let courses = parse_courses_csv_str(csv, "courses.csv").unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].apply_link, "https://x");
        assert_eq!(courses[0].university_name, "Lincoln University");
        assert_eq!(courses[0].scholarship_details, "");
    }

    #[test]
    fn test_field_count_mismatch_reports_line() {
        let csv = format!("{HEADER}\nA,B,C\n");
        let err = parse_courses_csv_str(&csv, "courses.csv").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::FieldCountMismatch { expected: 13, found: 3, line: 2 }
        ));
    }

    #[test]
    fn test_missing_column() {
        let err = parse_courses_csv_str("university_name,location\n", "courses.csv").unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn { ref column, .. } if column == "course_name"));
    }

    #[test]
    fn test_unterminated_quote() {
        let csv = format!("{HEADER}\nA,\"B\n");
        let err = parse_courses_csv_str(&csv, "courses.csv").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_courses_csv_str("", "courses.csv").unwrap().is_empty());
        assert!(parse_courses_csv_str(HEADER, "courses.csv").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json() {
        let json = r#"[{
            "university_name": "University of Waikato",
            "location": "Hamilton",
            "course_name": "Master of Cyber Security",
            "course_level": "Postgraduate",
            "field_of_study": "IT",
            "duration_years": "2",
            "tuition_fee_nzd": "34000",
            "entry_requirements": "Bachelor's degree",
            "exams_required": "IELTS",
            "scholarship_available": "No",
            "apply_link": "https://www.waikato.ac.nz"
        }]"#;

        let courses = parse_courses_json_str(json, "courses.json").unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].scholarship_details, "");
        assert_eq!(courses[0].duration(), Some(2));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_courses_json_str("{\"not\": \"an array\"}", "courses.json").unwrap_err();
        assert!(matches!(err, CatalogError::JsonError { .. }));
    }
}
