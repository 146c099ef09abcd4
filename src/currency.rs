//! Display formatting for prices.

use rust_decimal::{Decimal, RoundingStrategy};

/// Turns an amount into the string shown on screen.
pub trait CurrencyFormat: Send + Sync {
    fn format(&self, amount: Decimal) -> String;
}

/// Two-decimal formatter with a configurable symbol and separators.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCurrency {
    pub symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: Option<char>,
}

impl LocaleCurrency {
    /// `1234.5` -> `1234.50`
    pub fn plain() -> Self {
        Self {
            symbol: String::new(),
            decimal_separator: '.',
            thousands_separator: None,
        }
    }

    /// `1234.5` -> `R$ 1.234,50`
    pub fn brl() -> Self {
        Self {
            symbol: "R$ ".to_string(),
            decimal_separator: ',',
            thousands_separator: Some('.'),
        }
    }
}

impl Default for LocaleCurrency {
    fn default() -> Self {
        Self::plain()
    }
}

impl CurrencyFormat for LocaleCurrency {
    fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if let Some(sep) = self.thousands_separator {
                if i > 0 && (whole.len() - i) % 3 == 0 {
                    grouped.push(sep);
                }
            }
            grouped.push(ch);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        format!("{sign}{}{grouped}{}{cents}", self.symbol, self.decimal_separator)
    }
}
