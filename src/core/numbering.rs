use chrono::{Datelike, NaiveDate};

use super::error::GstError;

/// Default prefix for system-generated invoice numbers.
pub const DEFAULT_PREFIX: &str = "INV-";

/// The span an invoice serial is unique within.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberingPeriod {
    /// January to December, labelled "2024".
    #[default]
    CalendarYear,
    /// April to March, labelled "2024-25".
    FinancialYear,
}

impl NumberingPeriod {
    /// Starting year of the period that contains `date`.
    pub fn start_year_of(self, date: NaiveDate) -> i32 {
        match self {
            Self::CalendarYear => date.year(),
            Self::FinancialYear if date.month() >= 4 => date.year(),
            Self::FinancialYear => date.year() - 1,
        }
    }

    fn label(self, start_year: i32) -> String {
        match self {
            Self::CalendarYear => start_year.to_string(),
            Self::FinancialYear => format!("{start_year}-{:02}", (start_year + 1).rem_euclid(100)),
        }
    }
}

/// Consecutive invoice serials of the form `{prefix}{period}-{serial}`,
/// e.g. "INV-2024-0001" or, per financial year, "INV-2024-25-0001".
///
/// CGST Rule 46(b) asks for a consecutive serial, unique for a financial
/// year, of at most 16 characters. Both default formats fit up to 9999
/// invoices per period.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    period: NumberingPeriod,
    start_year: i32,
    serial: u64,
    width: usize,
}

impl InvoiceNumberSequence {
    /// A fresh sequence for the period starting in `start_year`.
    pub fn new(prefix: impl Into<String>, start_year: i32) -> Self {
        Self::starting_at(prefix, start_year, 1)
    }

    /// Pick up after `existing` invoices were already issued in the period,
    /// the way a store that only knows its invoice count resumes numbering.
    pub fn after_count(prefix: impl Into<String>, start_year: i32, existing: u64) -> Self {
        Self::starting_at(prefix, start_year, existing + 1)
    }

    /// Resume with `serial` as the next serial to hand out.
    pub fn starting_at(prefix: impl Into<String>, start_year: i32, serial: u64) -> Self {
        Self {
            prefix: prefix.into(),
            period: NumberingPeriod::default(),
            start_year,
            serial,
            width: 4,
        }
    }

    /// Number per financial year (or back to calendar years).
    pub fn per(mut self, period: NumberingPeriod) -> Self {
        self.period = period;
        self
    }

    /// Minimum digits of the serial (4 unless changed).
    pub fn with_padding(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Hand out the next number.
    pub fn next_number(&mut self) -> String {
        let number = self.peek();
        self.serial += 1;
        number
    }

    /// The number [`next_number`](Self::next_number) would return.
    pub fn peek(&self) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.period.label(self.start_year),
            self.serial,
            width = self.width
        )
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn period(&self) -> NumberingPeriod {
        self.period
    }

    /// Move to the period starting in `start_year`; the serial restarts at 1.
    pub fn advance_year(&mut self, start_year: i32) -> Result<(), GstError> {
        if start_year <= self.start_year {
            return Err(GstError::Numbering(format!(
                "cannot move numbering back from {} to {}",
                self.period.label(self.start_year),
                self.period.label(start_year)
            )));
        }
        self.start_year = start_year;
        self.serial = 1;
        Ok(())
    }

    /// Roll into the period of `date` if it lies after the current one.
    ///
    /// Returns whether the sequence moved. Dates in earlier periods leave it
    /// untouched.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let start_year = self.period.start_year_of(date);
        if start_year <= self.start_year {
            return false;
        }
        tracing::debug!(
            from = self.start_year,
            to = start_year,
            "invoice numbering rolled into a new period"
        );
        self.start_year = start_year;
        self.serial = 1;
        true
    }
}
