use lopdf::Object;
use lopdf::content::Operation;

/// A4 portrait, in points.
pub const PAGE_WIDTH: i64 = 595;
pub const PAGE_HEIGHT: i64 = 842;
pub const MARGIN: i64 = 40;

/// Space kept free at the bottom of every page for the footer line.
const FOOTER_SPACE: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

/// Collects content-stream operations page by page, tracking a cursor that
/// moves down the page. Coordinates are PDF points with the origin at the
/// bottom left.
pub struct Canvas {
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    footer: String,
    /// Baseline of the next line.
    pub y: i64,
}

impl Canvas {
    pub fn new(footer: &str) -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            footer: footer.to_string(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    pub fn content_width(&self) -> i64 {
        PAGE_WIDTH - 2 * MARGIN
    }

    /// Start a new page unless `height` points still fit above the footer.
    pub fn ensure_space(&mut self, height: i64) {
        if self.room() < height {
            self.finish_page();
        }
    }

    /// Like [`ensure_space`](Self::ensure_space), but only when `height`
    /// fits on an empty page at all; taller blocks start where they are.
    pub fn keep_together(&mut self, height: i64) {
        if height <= PAGE_HEIGHT - 2 * MARGIN - FOOTER_SPACE {
            self.ensure_space(height);
        }
    }

    /// Points left between the cursor and the footer.
    pub fn room(&self) -> i64 {
        self.y - (MARGIN + FOOTER_SPACE)
    }

    pub fn new_page(&mut self) {
        self.finish_page();
    }

    pub fn text(&mut self, x: i64, y: i64, font: Font, size: i64, text: &str) {
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![font.resource().into(), Object::Integer(size)],
        ));
        self.ops.push(Operation::new(
            "Td",
            vec![Object::Integer(x), Object::Integer(y)],
        ));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(win_ansi(text))],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    pub fn text_right(&mut self, right: i64, y: i64, font: Font, size: i64, text: &str) {
        self.text(right - text_width(text, size), y, font, size, text);
    }

    pub fn text_center(&mut self, y: i64, font: Font, size: i64, text: &str) {
        let x = (PAGE_WIDTH - text_width(text, size)) / 2;
        self.text(x.max(MARGIN), y, font, size, text);
    }

    /// Fill a rectangle in grey (`gray` from 0 = black to 1 = white), then
    /// restore black for the text drawn on top of it.
    pub fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, gray: Object) {
        self.ops.push(Operation::new("g", vec![gray]));
        self.ops.push(Operation::new(
            "re",
            vec![
                Object::Integer(x),
                Object::Integer(y),
                Object::Integer(width),
                Object::Integer(height),
            ],
        ));
        self.ops.push(Operation::new("f", vec![]));
        self.ops.push(Operation::new("g", vec![Object::Integer(0)]));
    }

    /// Horizontal rule across the content width.
    pub fn rule(&mut self, y: i64) {
        self.ops.push(Operation::new("w", vec![Object::Real(0.5)]));
        self.ops.push(Operation::new(
            "m",
            vec![Object::Integer(MARGIN), Object::Integer(y)],
        ));
        self.ops.push(Operation::new(
            "l",
            vec![Object::Integer(PAGE_WIDTH - MARGIN), Object::Integer(y)],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    fn finish_page(&mut self) {
        let footer = self.footer.clone();
        self.ops.push(Operation::new("g", vec![Object::Real(0.53)]));
        self.text_center(MARGIN, Font::Regular, 9, &footer);
        self.ops.push(Operation::new("g", vec![Object::Integer(0)]));

        self.pages.push(std::mem::take(&mut self.ops));
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// Close the last page and return the operations of every page.
    pub fn finish(mut self) -> Vec<Vec<Operation>> {
        self.finish_page();
        self.pages
    }
}

/// Approximate advance width of `text` in Helvetica at `size` points.
///
/// Uses an average glyph width of 0.55 em, which is close enough for
/// right-aligning short figures.
pub fn text_width(text: &str, size: i64) -> i64 {
    text.chars().count() as i64 * size * 11 / 20
}

/// Greedy word wrap to at most `max_chars` per line. Words longer than a
/// line are kept whole.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Encode for the standard Type1 fonts with `WinAnsiEncoding`.
///
/// Latin-1 maps directly; the bullet and rupee sign get their closest
/// WinAnsi forms, anything else becomes '?'.
pub fn win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '•' => out.push(0x95),
            '–' => out.push(0x96),
            '—' => out.push(0x97),
            '₹' => out.extend_from_slice(b"Rs."),
            c if (c as u32) < 0x80 => out.push(c as u8),
            c if (0xA0..=0xFF).contains(&(c as u32)) => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
    out
}
