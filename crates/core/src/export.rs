//! Spreadsheet export of the complete report.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::report::{Report, REPORT_HEADERS};

/// Write the report as an `.xlsx` workbook into `dir`, named after the
/// report's observed date range.
///
/// Cells are written as displayed (the already-formatted strings, not
/// the raw numbers) so the exported sheet matches the on-screen table
/// exactly.
pub fn write_report_xlsx(report: &Report, dir: &Path) -> Result<PathBuf> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Total Summary")?;

    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (row_idx, row) in report.rows.iter().enumerate() {
        for (col, cell) in row.cells.iter().enumerate() {
            worksheet.write_string(row_idx as u32 + 1, col as u16, cell)?;
        }
    }

    let path = dir.join(report.spreadsheet_filename());
    workbook.save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyMetrics;

    #[test]
    fn writes_workbook_named_after_date_range() {
        let report = Report::build(vec![
            DailyMetrics {
                date: "2024-01-01".into(),
                total_bet: 200.0,
                total_win: 150.0,
                ..Default::default()
            },
            DailyMetrics {
                date: "2024-01-02".into(),
                total_bet: 100.0,
                total_win: 50.0,
                ..Default::default()
            },
        ]);

        let dir = tempfile::tempdir().unwrap();
        let path = write_report_xlsx(&report, dir.path()).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "total_summary_2024-01-01_to_2024-01-02.xlsx"
        );
        let size = std::fs::metadata(&path).unwrap().len();
        assert!(size > 0);
    }

    #[test]
    fn writes_header_only_workbook_for_empty_report() {
        let report = Report::build(Vec::new());
        let dir = tempfile::tempdir().unwrap();
        let path = write_report_xlsx(&report, dir.path()).unwrap();
        assert!(path.ends_with("total_summary_unknown_to_unknown.xlsx"));
    }
}
