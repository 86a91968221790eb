//! Excel-style cell references (A1 notation).

/// Convert a 0-based column index to Excel column letters
/// (0 -> A, 25 -> Z, 26 -> AA, 701 -> ZZ, 702 -> AAA).
pub fn column_letter(index: usize) -> String {
    let mut letters = String::new();
    let mut dividend = index + 1;

    while dividend > 0 {
        let modulo = (dividend - 1) % 26;
        letters.insert(0, (b'A' + modulo as u8) as char);
        dividend = (dividend - modulo - 1) / 26;
    }

    letters
}

/// Build a cell reference like "B3" from a 0-based column index
/// and a 1-based row number.
pub fn cell_ref(col: usize, row: u32) -> String {
    let mut reference = column_letter(col);
    let mut buf = itoa::Buffer::new();
    reference.push_str(buf.format(row));
    reference
}
