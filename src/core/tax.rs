//! GST engine: jurisdiction classification, per-line tax and invoice totals.
//!
//! Both jurisdictions carry the same 18% combined rate; only the split
//! between CGST/SGST and IGST changes. Nothing here rounds: stored amounts
//! keep full decimal precision and rounding is a display concern.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::GstError;
use super::types::{Jurisdiction, LineItem, LineTax, Party, Totals};
use super::words::amount_in_words;

/// State code of the seller's registration (Gujarat).
pub const HOME_STATE_CODE: &str = "24";

/// Central GST rate for intra-state supplies.
pub const CGST_RATE: Decimal = dec!(0.09);

/// State GST rate for intra-state supplies.
pub const SGST_RATE: Decimal = dec!(0.09);

/// Integrated GST rate for inter-state supplies.
pub const IGST_RATE: Decimal = dec!(0.18);

/// Largest quantity a line accepts.
pub const MAX_QUANTITY: Decimal = dec!(1000000000000);

/// Largest rate a line accepts (one lakh crore rupees).
pub const MAX_RATE: Decimal = dec!(1000000000000);

/// Classify a supply by the buyer's GSTIN.
///
/// Same-state iff the trimmed GSTIN is non-empty and starts with
/// [`HOME_STATE_CODE`]. An empty GSTIN (unregistered buyer) is treated as
/// other-state. The GSTIN does not have to be well-formed.
pub fn classify(buyer_gstin: &str) -> Jurisdiction {
    let gstin = buyer_gstin.trim();
    if !gstin.is_empty() && gstin.starts_with(HOME_STATE_CODE) {
        Jurisdiction::SameState
    } else {
        Jurisdiction::OtherState
    }
}

/// Classify a supply by the buyer party; a missing GSTIN counts as empty.
pub fn classify_party(buyer: &Party) -> Jurisdiction {
    classify(buyer.gstin.as_deref().unwrap_or(""))
}

/// Compute amount, tax split and total for one line.
///
/// Trusts its inputs: callers sanitize quantity and rate first
/// (see [`parse_or_zero`] and [`check_line`]). Within [`MAX_QUANTITY`] and
/// [`MAX_RATE`] the result is exact; beyond them amounts saturate at the
/// `Decimal` bounds instead of overflowing.
pub fn compute_item(quantity: Decimal, rate: Decimal, jurisdiction: Jurisdiction) -> LineTax {
    let amount = quantity.saturating_mul(rate);
    let (cgst, sgst, igst) = match jurisdiction {
        Jurisdiction::SameState => (
            amount.saturating_mul(CGST_RATE),
            amount.saturating_mul(SGST_RATE),
            Decimal::ZERO,
        ),
        Jurisdiction::OtherState => (Decimal::ZERO, Decimal::ZERO, amount.saturating_mul(IGST_RATE)),
    };

    LineTax {
        amount,
        cgst,
        sgst,
        igst,
        total: amount.saturating_add(cgst).saturating_add(sgst).saturating_add(igst),
    }
}

/// Sum computed lines into invoice totals, in sequence order.
///
/// The amount in words is rendered from the floored grand total.
pub fn aggregate<'a, I>(items: I) -> Totals
where
    I: IntoIterator<Item = &'a LineTax>,
{
    let mut subtotal = Decimal::ZERO;
    let mut cgst_total = Decimal::ZERO;
    let mut sgst_total = Decimal::ZERO;
    let mut igst_total = Decimal::ZERO;

    for line in items {
        subtotal = subtotal.saturating_add(line.amount);
        cgst_total = cgst_total.saturating_add(line.cgst);
        sgst_total = sgst_total.saturating_add(line.sgst);
        igst_total = igst_total.saturating_add(line.igst);
    }

    let grand_total = subtotal
        .saturating_add(cgst_total)
        .saturating_add(sgst_total)
        .saturating_add(igst_total);

    Totals {
        subtotal,
        cgst_total,
        sgst_total,
        igst_total,
        grand_total,
        amount_in_words: amount_in_words(grand_total),
    }
}

/// Parse a quantity or rate typed into a form.
///
/// Unparseable, empty, negative or out-of-range input yields zero.
pub fn parse_or_zero(input: &str) -> Decimal {
    let trimmed = input.trim();
    match trimmed.parse::<Decimal>() {
        Ok(value) if value > MAX_QUANTITY.min(MAX_RATE) => {
            tracing::debug!(input = trimmed, "numeric input out of range, using 0");
            Decimal::ZERO
        }
        Ok(value) => non_negative(value),
        Err(_) => {
            if !trimmed.is_empty() {
                tracing::debug!(input = trimmed, "unparseable numeric input, using 0");
            }
            Decimal::ZERO
        }
    }
}

/// Clamp a negative quantity or rate to zero.
pub fn non_negative(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::ZERO
    } else {
        value
    }
}

/// Reject a quantity above [`MAX_QUANTITY`]; negatives clamp to zero.
pub fn checked_quantity(quantity: Decimal) -> Result<Decimal, GstError> {
    within(quantity, MAX_QUANTITY, "quantity")
}

/// Reject a rate above [`MAX_RATE`]; negatives clamp to zero.
pub fn checked_rate(rate: Decimal) -> Result<Decimal, GstError> {
    within(rate, MAX_RATE, "rate")
}

/// Check that a line's quantity and rate are within the supported range.
pub fn check_line(item: &LineItem) -> Result<(), GstError> {
    if item.quantity > MAX_QUANTITY {
        return Err(out_of_range(&item.description, "quantity", item.quantity, MAX_QUANTITY));
    }
    if item.rate > MAX_RATE {
        return Err(out_of_range(&item.description, "rate", item.rate, MAX_RATE));
    }
    Ok(())
}

fn within(value: Decimal, max: Decimal, what: &str) -> Result<Decimal, GstError> {
    if value > max {
        return Err(GstError::OutOfRange(format!("{what} {value} exceeds {max}")));
    }
    Ok(non_negative(value))
}

fn out_of_range(description: &str, what: &str, value: Decimal, max: Decimal) -> GstError {
    GstError::OutOfRange(format!("{what} {value} of '{description}' exceeds {max}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_prefix() {
        assert_eq!(classify("24AELPV7892J1ZK"), Jurisdiction::SameState);
        assert_eq!(classify("27AAPFU0939F1ZV"), Jurisdiction::OtherState);
        assert_eq!(classify(""), Jurisdiction::OtherState);
        assert_eq!(classify("   "), Jurisdiction::OtherState);
        assert_eq!(classify("  24XYZ"), Jurisdiction::SameState);
        assert_eq!(classify("2"), Jurisdiction::OtherState);
    }

    #[test]
    fn same_state_split() {
        let line = compute_item(dec!(2), dec!(500), Jurisdiction::SameState);
        assert_eq!(line.amount, dec!(1000));
        assert_eq!(line.cgst, dec!(90));
        assert_eq!(line.sgst, dec!(90));
        assert_eq!(line.igst, dec!(0));
        assert_eq!(line.total, dec!(1180));
    }

    #[test]
    fn other_state_split() {
        let line = compute_item(dec!(3), dec!(33.33), Jurisdiction::OtherState);
        assert_eq!(line.amount, dec!(99.99));
        assert_eq!(line.cgst, dec!(0));
        assert_eq!(line.sgst, dec!(0));
        assert_eq!(line.igst, dec!(17.9982));
        assert_eq!(line.total, dec!(117.9882));
    }

    #[test]
    fn no_rounding_per_line() {
        let line = compute_item(dec!(1), dec!(0.01), Jurisdiction::SameState);
        assert_eq!(line.cgst, dec!(0.0009));
        assert_eq!(line.total, dec!(0.0118));
    }

    #[test]
    fn aggregate_empty() {
        let totals = aggregate(&Vec::<LineTax>::new());
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.grand_total, Decimal::ZERO);
        assert_eq!(totals.amount_in_words, "Zero Rupees Only");
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn aggregate_sums_in_order() {
        let lines = [
            compute_item(dec!(2), dec!(500), Jurisdiction::SameState),
            compute_item(dec!(1), dec!(250.50), Jurisdiction::SameState),
        ];
        let totals = aggregate(&lines);
        assert_eq!(totals.subtotal, dec!(1250.50));
        assert_eq!(totals.cgst_total, dec!(112.545));
        assert_eq!(totals.sgst_total, dec!(112.545));
        assert_eq!(totals.igst_total, dec!(0));
        assert_eq!(totals.grand_total, dec!(1475.59));
        assert_eq!(
            totals.amount_in_words,
            "One Thousand Four Hundred and Seventy Five Rupees Only"
        );
    }

    #[test]
    fn parse_or_zero_sanitizes() {
        assert_eq!(parse_or_zero("12.5"), dec!(12.5));
        assert_eq!(parse_or_zero(" 3 "), dec!(3));
        assert_eq!(parse_or_zero(""), dec!(0));
        assert_eq!(parse_or_zero("abc"), dec!(0));
        assert_eq!(parse_or_zero("-4"), dec!(0));
        assert_eq!(parse_or_zero("1000000000000"), MAX_RATE);
        assert_eq!(parse_or_zero("1000000000000.01"), dec!(0));
        assert_eq!(parse_or_zero("1e30"), dec!(0));
    }

    #[test]
    fn largest_line_is_exact() {
        let line = compute_item(MAX_QUANTITY, MAX_RATE, Jurisdiction::SameState);
        let e22 = Decimal::from_i128_with_scale(10_i128.pow(22), 0);
        assert_eq!(line.amount, e22 * dec!(100));
        assert_eq!(line.cgst, e22 * dec!(9));
        assert_eq!(line.total, e22 * dec!(118));
    }

    #[test]
    fn unchecked_inputs_saturate_instead_of_panicking() {
        let line = compute_item(Decimal::MAX, Decimal::MAX, Jurisdiction::OtherState);
        assert_eq!(line.amount, Decimal::MAX);
        assert_eq!(line.total, Decimal::MAX);

        let totals = aggregate(&[line, line]);
        assert_eq!(totals.grand_total, Decimal::MAX);
    }

    #[test]
    fn line_limits() {
        assert_eq!(checked_quantity(dec!(-2)).unwrap(), dec!(0));
        assert_eq!(checked_rate(MAX_RATE).unwrap(), MAX_RATE);
        let err = checked_quantity(MAX_QUANTITY + dec!(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "value out of range: quantity 1000000000001 exceeds 1000000000000"
        );
        let item = LineItem::new("Bolt", dec!(1), Decimal::MAX);
        assert!(matches!(check_line(&item), Err(GstError::OutOfRange(_))));
        assert!(check_line(&LineItem::new("Bolt", MAX_QUANTITY, MAX_RATE)).is_ok());
    }
}
