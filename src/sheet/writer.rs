//! CSV output in the layout spreadsheet programs open directly.
//!
//! Rows end in CRLF and every text field is quoted; numbers are written
//! bare so they stay numeric when the sheet is opened.

use rust_decimal::Decimal;

/// Appends one CSV record at a time.
#[derive(Debug, Default)]
pub struct Writer {
    out: String,
    fields: usize,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, value: &str) -> &mut Self {
        self.separator();
        self.out.push('"');
        for ch in value.chars() {
            if ch == '"' {
                self.out.push_str("\"\"");
            } else {
                self.out.push(ch);
            }
        }
        self.out.push('"');
        self
    }

    pub fn decimal(&mut self, value: Decimal) -> &mut Self {
        self.separator();
        self.out.push_str(&value.normalize().to_string());
        self
    }

    pub fn end_row(&mut self) -> &mut Self {
        self.out.push_str("\r\n");
        self.fields = 0;
        self
    }

    /// Write a whole record of text fields.
    pub fn row(&mut self, values: &[&str]) -> &mut Self {
        for value in values {
            self.text(value);
        }
        self.end_row()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn separator(&mut self) {
        if self.fields > 0 {
            self.out.push(',');
        }
        self.fields += 1;
    }
}
