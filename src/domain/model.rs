use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Foreign currencies offered by the exchange desk, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Jpy,
    Aud,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Jpy, Currency::Aud];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
            Currency::Aud => "AUD",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Jpy => "¥",
            Currency::Aud => "A$",
        }
    }

    /// Label used in tables, e.g. `USD ($)`.
    pub fn label(self) -> String {
        format!("{} ({})", self.code(), self.symbol())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of one PHP conversion. Amounts are in PHP except `conversions`,
/// which holds the net amount expressed in each foreign currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    amount: f64,
    fee: f64,
    net: f64,
    conversions: BTreeMap<Currency, f64>,
}

impl ConversionResult {
    pub(crate) fn new(amount: f64, fee: f64, net: f64, conversions: BTreeMap<Currency, f64>) -> Self {
        Self {
            amount,
            fee,
            net,
            conversions,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn fee(&self) -> f64 {
        self.fee
    }

    pub fn net(&self) -> f64 {
        self.net
    }

    pub fn converted(&self, currency: Currency) -> Option<f64> {
        self.conversions.get(&currency).copied()
    }

    pub fn conversions(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.conversions.iter().map(|(c, v)| (*c, *v))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    pub name: String,
    pub value: f64,
}

impl Grade {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    pub grades: Vec<Grade>,
    pub average: f64,
    pub passed: bool,
}
