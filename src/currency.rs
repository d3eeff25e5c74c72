use crate::error::WalletError;
use std::fmt;
use std::str::FromStr;

/// ISO 4217 currencies a wallet accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CHF,
    CAD,
    AUD,
    NZD,
    SEK,
    NOK,
    DKK,
    PLN,
}

impl Currency {
    /// Every recognized currency, the full validation set
    pub const ALL: [Currency; 12] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CHF,
        Currency::CAD,
        Currency::AUD,
        Currency::NZD,
        Currency::SEK,
        Currency::NOK,
        Currency::DKK,
        Currency::PLN,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::NZD => "NZD",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::DKK => "DKK",
            Currency::PLN => "PLN",
        }
    }
}

impl FromStr for Currency {
    type Err = WalletError;

    /// Codes are matched after trimming and upper casing
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let normalized = code.trim().to_uppercase();
        Currency::ALL
            .iter()
            .find(|currency| currency.code() == normalized)
            .copied()
            .ok_or_else(|| WalletError::InvalidCurrency(code.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
