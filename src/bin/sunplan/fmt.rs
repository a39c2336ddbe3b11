use std::fmt::{Debug, Display, Formatter};

use sunplan::quantity::Cost;

/// Naira amount with thousands separators, for reports.
#[derive(Copy, Clone)]
pub struct FormattedCost(pub Cost);

impl Debug for FormattedCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < Cost::ZERO { "-" } else { "" };
        let digits = self.0.whole_naira().unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        write!(f, "{sign}{grouped}.{:02} ₦", self.0.kobo_remainder())
    }
}
