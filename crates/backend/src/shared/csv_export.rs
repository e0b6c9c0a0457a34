use axum::http::header;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;

/// A record exported as one CSV line
pub trait CsvRow {
    const HEADER: &'static [&'static str];

    fn record(&self) -> Vec<String>;
}

/// Header line followed by one line per row, even when there are no rows.
pub fn to_csv<'a, R: CsvRow + 'a>(rows: impl IntoIterator<Item = &'a R>) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(R::HEADER)?;
    for row in rows {
        writer.write_record(row.record())?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("csv buffer: {}", e))
}

/// `text/csv` attachment response
pub fn csv_response<'a, R: CsvRow + 'a>(
    filename: &str,
    rows: impl IntoIterator<Item = &'a R>,
) -> Result<Response, ApiError> {
    let body = to_csv(rows)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        job_id: &'static str,
        amount: &'static str,
    }

    impl CsvRow for Row {
        const HEADER: &'static [&'static str] = &["Job ID", "Amount"];

        fn record(&self) -> Vec<String> {
            vec![self.job_id.into(), self.amount.into()]
        }
    }

    #[test]
    fn test_header_and_quoting() {
        let rows = [
            Row {
                job_id: "J-2841",
                amount: "$120.00",
            },
            Row {
                job_id: "J-2839",
                amount: "$1,085.00",
            },
        ];
        let text = String::from_utf8(to_csv(rows.iter()).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Job ID,Amount", "J-2841,$120.00", "J-2839,\"$1,085.00\""]);
    }

    #[test]
    fn test_empty_export_keeps_header() {
        let rows: Vec<Row> = Vec::new();
        let text = String::from_utf8(to_csv(rows.iter()).unwrap()).unwrap();
        assert_eq!(text, "Job ID,Amount\n");
    }
}
