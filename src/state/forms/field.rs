//! Coupon form fields and their in-place editing rules

use crate::state::CouponData;

const SECONDS_PER_DAY: i64 = 86_400;

/// Editable fields of the coupon form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponField {
    Title,
    Code,
    Percent,
    DueDate,
    Enabled,
    Quantity,
}

/// Text buffer for a decimal field.
///
/// Keeps what the user typed (including a trailing `.`) so the number can be
/// reparsed after every keystroke without losing its fractional part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalInput {
    text: String,
}

impl DecimalInput {
    pub fn from_value(value: f64) -> Self {
        Self {
            text: value.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Append a digit or the first decimal point. Returns false otherwise.
    pub fn push(&mut self, c: char) -> bool {
        match c {
            '0'..='9' => {
                if self.text == "0" {
                    self.text.clear();
                }
                self.text.push(c);
                true
            }
            '.' if !self.text.contains('.') => {
                if self.text.is_empty() {
                    self.text.push('0');
                }
                self.text.push('.');
                true
            }
            _ => false,
        }
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    /// Parsed value; an empty or partial buffer such as `-` reads as zero
    pub fn value(&self) -> f64 {
        self.text.parse().unwrap_or(0.0)
    }
}

impl CouponField {
    pub const ALL: [CouponField; 6] = [
        CouponField::Title,
        CouponField::Code,
        CouponField::Percent,
        CouponField::DueDate,
        CouponField::Enabled,
        CouponField::Quantity,
    ];

    /// Field at a display index
    pub fn at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Code => "Code",
            Self::Percent => "Discount (%)",
            Self::DueDate => "Due Date (unix seconds, +/- day)",
            Self::Enabled => "Enabled (space toggles)",
            Self::Quantity => "Quantity",
        }
    }

    /// Whether the field holds a decimal number edited through [`DecimalInput`]
    pub fn is_decimal(&self) -> bool {
        matches!(self, Self::Percent | Self::Quantity)
    }

    /// Current decimal value of the field, `None` for non-decimal fields
    pub fn decimal_value(&self, coupon: &CouponData) -> Option<f64> {
        match self {
            Self::Percent => Some(coupon.percent),
            Self::Quantity => Some(coupon.num),
            _ => None,
        }
    }

    /// Store a decimal value into the field. Ignored for non-decimal fields.
    pub fn set_decimal(&self, coupon: &mut CouponData, value: f64) {
        match self {
            Self::Percent => coupon.percent = value,
            Self::Quantity => coupon.num = value,
            _ => {}
        }
    }

    /// Raw value for rendering
    pub fn display_value(&self, coupon: &CouponData) -> String {
        match self {
            Self::Title => coupon.title.clone(),
            Self::Code => coupon.code.clone(),
            Self::Percent => coupon.percent.to_string(),
            Self::DueDate => coupon.due_date.to_string(),
            Self::Enabled => {
                let state = if coupon.is_enabled { "enabled" } else { "disabled" };
                format!("{} ({state})", coupon.enabled_flag())
            }
            Self::Quantity => coupon.num.to_string(),
        }
    }

    /// Apply a typed character to the field. Returns false if the key
    /// has no meaning for this field.
    pub fn push_char(&self, coupon: &mut CouponData, c: char) -> bool {
        match self {
            Self::Title => {
                coupon.title.push(c);
                true
            }
            Self::Code => {
                coupon.code.push(c);
                true
            }
            Self::Percent => {
                let mut input = DecimalInput::from_value(coupon.percent);
                let accepted = input.push(c);
                coupon.percent = input.value();
                accepted
            }
            Self::DueDate => match c {
                '+' => {
                    coupon.due_date = coupon.due_date.saturating_add(SECONDS_PER_DAY);
                    true
                }
                '-' => {
                    coupon.due_date = coupon.due_date.saturating_sub(SECONDS_PER_DAY);
                    true
                }
                _ => match c.to_digit(10) {
                    Some(d) => {
                        coupon.due_date = coupon
                            .due_date
                            .saturating_mul(10)
                            .saturating_add(i64::from(d));
                        true
                    }
                    None => false,
                },
            },
            Self::Enabled => match c {
                ' ' => {
                    coupon.is_enabled = !coupon.is_enabled;
                    true
                }
                '0' => {
                    coupon.is_enabled = false;
                    true
                }
                '1' => {
                    coupon.is_enabled = true;
                    true
                }
                _ => false,
            },
            Self::Quantity => {
                let mut input = DecimalInput::from_value(coupon.num);
                let accepted = input.push(c);
                coupon.num = input.value();
                accepted
            }
        }
    }

    /// Remove the last character (or decimal digit) from the field
    pub fn pop_char(&self, coupon: &mut CouponData) {
        match self {
            Self::Title => {
                coupon.title.pop();
            }
            Self::Code => {
                coupon.code.pop();
            }
            Self::Percent => {
                let mut input = DecimalInput::from_value(coupon.percent);
                input.pop();
                coupon.percent = input.value();
            }
            Self::DueDate => coupon.due_date /= 10,
            Self::Enabled => {
                // Flag is a single toggle, nothing to delete
            }
            Self::Quantity => {
                let mut input = DecimalInput::from_value(coupon.num);
                input.pop();
                coupon.num = input.value();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> CouponData {
        CouponData {
            id: String::new(),
            title: String::new(),
            code: String::new(),
            percent: 0.0,
            due_date: 0,
            is_enabled: true,
            num: 0.0,
        }
    }

    #[test]
    fn test_all_fields_in_display_order() {
        assert_eq!(CouponField::at(0), Some(CouponField::Title));
        assert_eq!(CouponField::at(5), Some(CouponField::Quantity));
        assert_eq!(CouponField::at(6), None);
    }

    #[test]
    fn test_text_fields_push_and_pop() {
        let mut coupon = blank();
        for c in "SALE".chars() {
            assert!(CouponField::Code.push_char(&mut coupon, c));
        }
        assert_eq!(coupon.code, "SALE");
        CouponField::Code.pop_char(&mut coupon);
        assert_eq!(coupon.code, "SAL");

        CouponField::Title.push_char(&mut coupon, '優');
        assert_eq!(coupon.title, "優");
        CouponField::Title.pop_char(&mut coupon);
        assert_eq!(coupon.title, "");
    }

    #[test]
    fn test_percent_accepts_digits_only() {
        let mut coupon = blank();
        assert!(CouponField::Percent.push_char(&mut coupon, '1'));
        assert!(CouponField::Percent.push_char(&mut coupon, '5'));
        assert!(!CouponField::Percent.push_char(&mut coupon, 'x'));
        assert_eq!(coupon.percent, 15.0);
        CouponField::Percent.pop_char(&mut coupon);
        assert_eq!(coupon.percent, 1.0);
    }

    #[test]
    fn test_percent_keeps_fraction_when_editing() {
        let mut coupon = blank();
        coupon.percent = 12.5;
        CouponField::Percent.push_char(&mut coupon, '5');
        assert_eq!(coupon.percent, 12.55);
        CouponField::Percent.pop_char(&mut coupon);
        assert_eq!(coupon.percent, 12.5);
        CouponField::Percent.pop_char(&mut coupon);
        assert_eq!(coupon.percent, 12.0);
    }

    #[test]
    fn test_percent_is_not_range_checked() {
        let mut coupon = blank();
        for c in "250".chars() {
            CouponField::Percent.push_char(&mut coupon, c);
        }
        assert_eq!(coupon.percent, 250.0);
    }

    #[test]
    fn test_due_date_steps_by_day() {
        let mut coupon = blank();
        coupon.due_date = 1_700_000_000;
        CouponField::DueDate.push_char(&mut coupon, '+');
        assert_eq!(coupon.due_date, 1_700_086_400);
        CouponField::DueDate.push_char(&mut coupon, '-');
        CouponField::DueDate.push_char(&mut coupon, '-');
        assert_eq!(coupon.due_date, 1_699_913_600);
    }

    #[test]
    fn test_due_date_digits_saturate() {
        let mut coupon = blank();
        coupon.due_date = i64::MAX / 2;
        CouponField::DueDate.push_char(&mut coupon, '9');
        assert_eq!(coupon.due_date, i64::MAX);
        CouponField::DueDate.pop_char(&mut coupon);
        assert_eq!(coupon.due_date, i64::MAX / 10);
    }

    #[test]
    fn test_enabled_toggle_and_explicit_values() {
        let mut coupon = blank();
        assert!(CouponField::Enabled.push_char(&mut coupon, ' '));
        assert!(!coupon.is_enabled);
        assert!(CouponField::Enabled.push_char(&mut coupon, '1'));
        assert!(coupon.is_enabled);
        assert!(CouponField::Enabled.push_char(&mut coupon, '0'));
        assert!(!coupon.is_enabled);
        assert!(!CouponField::Enabled.push_char(&mut coupon, 'y'));
        CouponField::Enabled.pop_char(&mut coupon);
        assert!(!coupon.is_enabled);
    }

    #[test]
    fn test_quantity_keeps_negative_and_fractional_values() {
        let mut coupon = blank();
        coupon.num = -1.0;
        CouponField::Quantity.push_char(&mut coupon, '2');
        assert_eq!(coupon.num, -12.0);
        coupon.num = 1.5;
        CouponField::Quantity.pop_char(&mut coupon);
        assert_eq!(coupon.num, 1.0);
    }

    #[test]
    fn test_decimal_accessors() {
        let mut coupon = blank();
        assert!(CouponField::Percent.is_decimal());
        assert!(!CouponField::Code.is_decimal());
        CouponField::Quantity.set_decimal(&mut coupon, 3.5);
        assert_eq!(CouponField::Quantity.decimal_value(&coupon), Some(3.5));
        assert_eq!(CouponField::Title.decimal_value(&coupon), None);
    }

    #[test]
    fn test_display_values() {
        let mut coupon = blank();
        coupon.percent = 12.5;
        coupon.num = 5.0;
        assert_eq!(CouponField::Percent.display_value(&coupon), "12.5");
        assert_eq!(CouponField::Quantity.display_value(&coupon), "5");
        assert_eq!(CouponField::Enabled.display_value(&coupon), "1 (enabled)");
        coupon.is_enabled = false;
        assert_eq!(CouponField::Enabled.display_value(&coupon), "0 (disabled)");
    }

    mod decimal_input {
        use super::*;

        #[test]
        fn test_zero_is_replaced_by_first_digit() {
            let mut input = DecimalInput::from_value(0.0);
            assert!(input.push('7'));
            assert_eq!(input.as_str(), "7");
        }

        #[test]
        fn test_single_decimal_point() {
            let mut input = DecimalInput::from_value(12.0);
            assert!(input.push('.'));
            assert!(!input.push('.'));
            assert!(input.push('5'));
            assert_eq!(input.as_str(), "12.5");
            assert_eq!(input.value(), 12.5);
        }

        #[test]
        fn test_trailing_point_reads_as_integer() {
            let mut input = DecimalInput::from_value(12.5);
            input.pop();
            assert_eq!(input.as_str(), "12.");
            assert_eq!(input.value(), 12.0);
        }

        #[test]
        fn test_leading_point_gets_zero() {
            let mut input = DecimalInput::from_value(0.0);
            input.pop();
            assert!(input.push('.'));
            assert_eq!(input.as_str(), "0.");
        }

        #[test]
        fn test_partial_buffers_read_as_zero() {
            let mut input = DecimalInput::from_value(-3.0);
            input.pop();
            assert_eq!(input.as_str(), "-");
            assert_eq!(input.value(), 0.0);
            input.pop();
            assert_eq!(input.value(), 0.0);
        }
    }
}
