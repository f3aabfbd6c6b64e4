use rust_xlsxwriter::*;

use crate::error::Result;
use crate::models::response::{Reaction, ResponseRecord};
use crate::utils::time::date_time_parts;

pub struct ExportService;

impl ExportService {
    /// Quote a CSV field if it contains the delimiter, quotes or newlines.
    /// Device ids are opaque client strings, so they get no trust here.
    fn csv_field(value: &str) -> String {
        if value.contains([';', '"', '\n', '\r']) {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    /// Render all records as a semicolon-delimited CSV document. An empty
    /// store yields the header line only.
    pub fn generate_csv(records: &[ResponseRecord]) -> String {
        let mut csv = String::from("date;time;reaction;reaction_label;device_id\n");
        for record in records {
            let (date, time) = date_time_parts(&record.timestamp);
            csv.push_str(&format!(
                "{};{};{};{};{}\n",
                Self::csv_field(&date),
                Self::csv_field(&time),
                record.reaction.code(),
                record.reaction.label(),
                Self::csv_field(record.device_id.as_deref().unwrap_or("")),
            ));
        }
        csv
    }

    /// Generate the two-sheet XLSX workbook: raw rows plus a summary with
    /// counts, percentages and a small category/count table for charting.
    pub fn generate_xlsx(records: &[ResponseRecord]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();

        let header_bg = Color::RGB(0x667EEA);
        let header_text = Color::White;

        let header_format = Format::new()
            .set_bold()
            .set_font_color(header_text)
            .set_background_color(header_bg);

        // ── Sheet 1: raw data ──
        let data_sheet = workbook.add_worksheet();
        data_sheet.set_name("Data")?;

        let columns = [
            ("Date", 15.0),
            ("Time", 12.0),
            ("Reaction", 10.0),
            ("Label", 15.0),
            ("Device ID", 30.0),
        ];
        for (i, (name, width)) in columns.iter().enumerate() {
            data_sheet.set_column_width(i as u16, *width)?;
            data_sheet.write_string_with_format(0, i as u16, *name, &header_format)?;
        }

        for (idx, record) in records.iter().enumerate() {
            let row = idx as u32 + 1;
            let (date, time) = date_time_parts(&record.timestamp);
            data_sheet.write_string(row, 0, &date)?;
            data_sheet.write_string(row, 1, &time)?;
            data_sheet.write_number(row, 2, f64::from(record.reaction.code()))?;
            data_sheet.write_string(row, 3, record.reaction.label())?;
            data_sheet.write_string(row, 4, record.device_id.as_deref().unwrap_or(""))?;
        }

        // ── Sheet 2: summary ──
        let stats_sheet = workbook.add_worksheet();
        stats_sheet.set_name("Statistics")?;
        stats_sheet.set_column_width(0, 20)?;
        stats_sheet.set_column_width(1, 15)?;
        stats_sheet.set_column_width(2, 15)?;

        let title_format = Format::new()
            .set_font_size(16)
            .set_bold()
            .set_font_color(header_bg)
            .set_align(FormatAlign::Center);
        stats_sheet.merge_range(0, 0, 0, 2, "Feedback summary", &title_format)?;

        stats_sheet.write_string_with_format(2, 0, "Category", &header_format)?;
        stats_sheet.write_string_with_format(2, 1, "Count", &header_format)?;
        stats_sheet.write_string_with_format(2, 2, "Percent", &header_format)?;

        let counts: Vec<usize> = Reaction::ALL
            .iter()
            .map(|&r| records.iter().filter(|rec| rec.reaction == r).count())
            .collect();
        // Guard against dividing by zero on an empty store.
        let total = records.len().max(1);

        for (i, (&reaction, &count)) in Reaction::ALL.iter().zip(&counts).enumerate() {
            let row = 3 + i as u32;
            stats_sheet.write_string(row, 0, reaction.label())?;
            stats_sheet.write_number(row, 1, count as f64)?;
            let percent = (count as f64 / total as f64) * 100.0;
            stats_sheet.write_string(row, 2, format!("{:.1}%", percent))?;
        }

        let totals_format = Format::new().set_bold();
        stats_sheet.write_string_with_format(6, 0, "TOTAL", &totals_format)?;
        stats_sheet.write_number_with_format(6, 1, total as f64, &totals_format)?;
        stats_sheet.write_string_with_format(6, 2, "100%", &totals_format)?;

        // Category/count pairs restated in a plain block for charting.
        stats_sheet.write_string_with_format(8, 0, "Chart data", &totals_format)?;
        for (i, (&reaction, &count)) in Reaction::ALL.iter().zip(&counts).enumerate() {
            let row = 9 + i as u32;
            stats_sheet.write_string(row, 0, reaction.label())?;
            stats_sheet.write_number(row, 1, count as f64)?;
        }

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }
}
