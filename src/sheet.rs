//! Worksheet XML builder.
//!
//! Row 1 always carries the column headers; data rows follow in input order
//! starting at row 2. Column order mirrors the caller's column list exactly.

use crate::cell_ref::cell_ref;
use crate::types::{CellValue, Column, Row};
use crate::xml::escape;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";
const WORKSHEET_OPEN: &str = "<worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">";

/// Build the complete `xl/worksheets/sheet1.xml` document.
pub fn build_sheet_xml(columns: &[Column], rows: &[Row]) -> String {
    // Rough sizing: headers plus ~32 bytes per cell.
    let mut xml = String::with_capacity(512 + columns.len() * rows.len() * 32);
    xml.push_str(XML_DECLARATION);
    xml.push_str(WORKSHEET_OPEN);

    write_cols(&mut xml, columns);

    xml.push_str("<sheetData>");

    // Header row.
    write_row_open(&mut xml, 1);
    for (col_idx, column) in columns.iter().enumerate() {
        write_text_cell(&mut xml, col_idx, 1, &column.header);
    }
    xml.push_str("</row>");

    // Data rows, numbered from 2.
    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = row_idx as u32 + 2;
        write_row_open(&mut xml, row_num);
        for (col_idx, column) in columns.iter().enumerate() {
            match row.get(&column.key) {
                Some(CellValue::Number(n)) => write_number_cell(&mut xml, col_idx, row_num, *n),
                Some(CellValue::Text(s)) => write_text_cell(&mut xml, col_idx, row_num, s),
                Some(CellValue::Blank) | None => {}
            }
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Emit the `<cols>` block when at least one column declares a width.
fn write_cols(xml: &mut String, columns: &[Column]) {
    if columns.iter().all(|c| c.width.is_none()) {
        return;
    }

    let mut buf = itoa::Buffer::new();
    xml.push_str("<cols>");
    for (col_idx, column) in columns.iter().enumerate() {
        if let Some(width) = column.width {
            let position = buf.format(col_idx as u32 + 1).to_string();
            xml.push_str("<col min=\"");
            xml.push_str(&position);
            xml.push_str("\" max=\"");
            xml.push_str(&position);
            xml.push_str("\" width=\"");
            xml.push_str(&width.to_string());
            xml.push_str("\" customWidth=\"1\"/>");
        }
    }
    xml.push_str("</cols>");
}

fn write_row_open(xml: &mut String, row_num: u32) {
    let mut buf = itoa::Buffer::new();
    xml.push_str("<row r=\"");
    xml.push_str(buf.format(row_num));
    xml.push_str("\">");
}

fn write_number_cell(xml: &mut String, col_idx: usize, row_num: u32, value: f64) {
    xml.push_str("<c r=\"");
    xml.push_str(&cell_ref(col_idx, row_num));
    xml.push_str("\"><v>");
    xml.push_str(&value.to_string());
    xml.push_str("</v></c>");
}

fn write_text_cell(xml: &mut String, col_idx: usize, row_num: u32, value: &str) {
    xml.push_str("<c r=\"");
    xml.push_str(&cell_ref(col_idx, row_num));
    xml.push_str("\" t=\"inlineStr\"><is><t>");
    xml.push_str(&escape(value));
    xml.push_str("</t></is></c>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![Column::new("a", "A")]
    }

    #[test]
    fn test_header_row_is_first() {
        let xml = build_sheet_xml(&columns(), &[]);
        assert!(xml.contains("<row r=\"1\"><c r=\"A1\" t=\"inlineStr\"><is><t>A</t></is></c></row>"));
    }

    #[test]
    fn test_cell_typing() {
        let rows = vec![
            Row::from_iter([("a", CellValue::from(5.0))]),
            Row::from_iter([("a", CellValue::from("hi"))]),
            Row::from_iter([("a", CellValue::Blank)]),
        ];
        let xml = build_sheet_xml(&columns(), &rows);

        assert!(xml.contains("<c r=\"A2\"><v>5</v></c>"));
        assert!(xml.contains("<c r=\"A3\" t=\"inlineStr\"><is><t>hi</t></is></c>"));
        assert!(!xml.contains("A4\""));
        // The blank row still exists, just without cells.
        assert!(xml.contains("<row r=\"4\"></row>"));
    }

    #[test]
    fn test_missing_key_renders_blank() {
        let rows = vec![Row::new()];
        let xml = build_sheet_xml(&columns(), &rows);
        assert!(xml.contains("<row r=\"2\"></row>"));
    }

    #[test]
    fn test_escaping_in_cells_and_headers() {
        let cols = vec![Column::new("a", "P&L <gross>")];
        let rows = vec![Row::from_iter([("a", CellValue::from("5 & <b>\"x\"</b>"))])];
        let xml = build_sheet_xml(&cols, &rows);

        assert!(xml.contains("P&amp;L &lt;gross&gt;"));
        assert!(xml.contains("5 &amp; &lt;b&gt;&quot;x&quot;&lt;/b&gt;"));
        let body = xml.split("<sheetData>").nth(1).unwrap();
        assert!(!body.contains("<b>"));
    }

    #[test]
    fn test_column_order_preserved() {
        let cols = vec![Column::new("b", "B"), Column::new("a", "A")];
        let rows = vec![Row::from_iter([("a", 1.0), ("b", 2.0)])];
        let xml = build_sheet_xml(&cols, &rows);

        // Column list order wins over row insertion order: "b" is column A.
        assert!(xml.contains("<c r=\"A2\"><v>2</v></c>"));
        assert!(xml.contains("<c r=\"B2\"><v>1</v></c>"));
    }

    #[test]
    fn test_cols_emitted_only_with_widths() {
        let plain = build_sheet_xml(&columns(), &[]);
        assert!(!plain.contains("<cols>"));

        let sized = vec![
            Column::new("a", "A").with_width(20.0),
            Column::new("b", "B"),
        ];
        let xml = build_sheet_xml(&sized, &[]);
        assert!(xml.contains("<cols><col min=\"1\" max=\"1\" width=\"20\" customWidth=\"1\"/></cols>"));
    }

    #[test]
    fn test_float_formatting() {
        let rows = vec![Row::from_iter([("a", 1234.56)])];
        let xml = build_sheet_xml(&columns(), &rows);
        assert!(xml.contains("<v>1234.56</v>"));
    }
}
