use crate::domain::model::{ConversionResult, Currency};
use crate::utils::error::{AppError, Result};
use std::collections::BTreeMap;

/// PHP needed to buy one unit of each foreign currency.
pub const USD_RATE: f64 = 58.2554;
pub const EUR_RATE: f64 = 67.6375;
pub const JPY_RATE: f64 = 0.3818;
pub const AUD_RATE: f64 = 38.3071;

/// 5% transaction fee, deducted before conversion.
pub const TRANSACTION_FEE_RATE: f64 = 0.05;

pub const MIN_TRANSACTION: f64 = 100.0;
pub const MAX_TRANSACTION: f64 = 100_000.0;

/// Immutable rate table and fee injected into the converter.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRateTable {
    rates: BTreeMap<Currency, f64>,
    fee_rate: f64,
}

impl ExchangeRateTable {
    /// Builds a table, rejecting missing currencies, non-positive or non-finite
    /// rates, and a fee rate outside `[0, 1)`.
    pub fn new<I>(rates: I, fee_rate: f64) -> Result<Self>
    where
        I: IntoIterator<Item = (Currency, f64)>,
    {
        let rates: BTreeMap<Currency, f64> = rates.into_iter().collect();

        for currency in Currency::ALL {
            match rates.get(&currency) {
                None => {
                    return Err(AppError::ContractViolation {
                        message: format!("missing exchange rate for {}", currency),
                    })
                }
                Some(rate) if !rate.is_finite() || *rate <= 0.0 => {
                    return Err(AppError::ContractViolation {
                        message: format!("exchange rate for {} must be positive, got {}", currency, rate),
                    })
                }
                Some(_) => {}
            }
        }

        if !(0.0..1.0).contains(&fee_rate) {
            return Err(AppError::ContractViolation {
                message: format!("fee rate must be in [0, 1), got {}", fee_rate),
            });
        }

        Ok(Self { rates, fee_rate })
    }

    /// Today's fixed rates with the 5% fee.
    pub fn standard() -> Self {
        let rates = BTreeMap::from([
            (Currency::Usd, USD_RATE),
            (Currency::Eur, EUR_RATE),
            (Currency::Jpy, JPY_RATE),
            (Currency::Aud, AUD_RATE),
        ]);
        Self {
            rates,
            fee_rate: TRANSACTION_FEE_RATE,
        }
    }

    pub fn rate(&self, currency: Currency) -> f64 {
        self.rates[&currency]
    }

    pub fn fee_rate(&self) -> f64 {
        self.fee_rate
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.rates.iter().map(|(c, r)| (*c, *r))
    }
}

impl Default for ExchangeRateTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CurrencyConverter {
    table: ExchangeRateTable,
}

impl CurrencyConverter {
    pub fn new(table: ExchangeRateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ExchangeRateTable {
        &self.table
    }

    /// Deducts the fee and converts the net amount into every currency.
    ///
    /// Callers validate `amount` against the transaction limits first. A
    /// negative or non-finite amount is a caller bug and is refused.
    pub fn convert(&self, amount: f64) -> Result<ConversionResult> {
        if !amount.is_finite() || amount < 0.0 {
            tracing::error!("convert called with invalid amount {}", amount);
            return Err(AppError::ContractViolation {
                message: format!("amount must be a finite, non-negative PHP value, got {}", amount),
            });
        }

        let fee = amount * self.table.fee_rate();
        let net = amount - fee;

        let conversions = self
            .table
            .iter()
            .map(|(currency, rate)| (currency, net / rate))
            .collect();

        tracing::debug!("Converted {:.2} PHP (fee {:.2}, net {:.2})", amount, fee, net);
        Ok(ConversionResult::new(amount, fee, net, conversions))
    }
}
