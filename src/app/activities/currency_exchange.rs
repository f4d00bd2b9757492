use crate::core::converter::{CurrencyConverter, ExchangeRateTable, MAX_TRANSACTION, MIN_TRANSACTION};
use crate::domain::model::ConversionResult;
use crate::domain::ports::Activity;
use crate::utils::console::{header, separator, Console};
use crate::utils::error::{InputError, Result};
use crate::utils::input::Bounds;
use std::io::{BufRead, Write};

/// Whole-peso amount with comma thousands separators, e.g. `₱100,000`.
pub fn format_pesos_whole(amount: f64) -> String {
    let digits = format!("{:.0}", amount.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}₱{}", sign, grouped)
}

pub fn fee_percent(table: &ExchangeRateTable) -> String {
    format!("{:.0}%", table.fee_rate() * 100.0)
}

pub fn render_rates(table: &ExchangeRateTable, line_width: usize) -> String {
    let mut out = header("Today's Exchange Rates");
    out.push_str(&separator(line_width));

    for (currency, rate) in table.iter() {
        out.push_str(&format!(
            "{:<10}: 1 PHP = {:.4} {}\n",
            currency.label(),
            1.0 / rate,
            currency.code()
        ));
    }

    out.push_str(&separator(line_width));
    out.push_str(&format!("Transaction Fee: {}\n", fee_percent(table)));
    out.push_str(&format!("Minimum Transaction: {}\n", format_pesos_whole(MIN_TRANSACTION)));
    out.push_str(&format!("Maximum Transaction: {}\n", format_pesos_whole(MAX_TRANSACTION)));
    out.push_str(&separator(line_width));
    out
}

pub fn render_conversion(result: &ConversionResult, table: &ExchangeRateTable, line_width: usize) -> String {
    let mut out = header("Conversion Result");
    out.push_str(&separator(line_width));

    out.push_str(&format!("{:<18}: ₱{:.2}\n", "Original Amount", result.amount()));
    out.push_str(&format!("{:<18}: ₱{:.2}\n", "Transaction Fee", result.fee()));
    out.push_str(&format!("{:<18}: ₱{:.2}\n", "Net Amount", result.net()));

    out.push_str(&separator(line_width));
    out.push_str(&format!("{:<12}{:<24}{:>14}\n", "Currency", "Rate (PHP per 1 unit)", "Converted"));
    for (currency, converted) in result.conversions() {
        out.push_str(&format!(
            "{:<12}{:<24.4}{:>14.2} {}\n",
            currency.label(),
            table.rate(currency),
            converted,
            currency.code()
        ));
    }
    out
}

pub struct CurrencyExchange {
    converter: CurrencyConverter,
}

impl CurrencyExchange {
    pub fn new(converter: CurrencyConverter) -> Self {
        Self { converter }
    }

    /// Reads an amount, asks for fee confirmation and converts. Returns `None`
    /// when the user declines; the converter is not called in that case.
    pub fn exchange<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<Option<ConversionResult>> {
        let amount = console
            .input()
            .read_range("Enter amount in PHP (₱): ", MIN_TRANSACTION, MAX_TRANSACTION)?;

        if !self.confirm_fee(console, amount)? {
            return Ok(None);
        }

        let result = self.converter.convert(amount)?;
        let width = console.display().line_width;
        console.say(&render_conversion(&result, self.converter.table(), width))?;
        Ok(Some(result))
    }

    /// One-shot conversion for the `convert` subcommand. The amount is checked
    /// against the transaction limits instead of being re-prompted.
    pub fn convert_once<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        amount: f64,
        confirmed: bool,
        json: bool,
    ) -> Result<Option<ConversionResult>> {
        if !Bounds::new(MIN_TRANSACTION, MAX_TRANSACTION).contains(amount) {
            return Err(InputError::OutOfRange {
                message: format!(
                    "Amount must be between {} and {} PHP, got {}",
                    MIN_TRANSACTION, MAX_TRANSACTION, amount
                ),
            }
            .into());
        }

        if !confirmed && !self.confirm_fee(console, amount)? {
            return Ok(None);
        }

        let result = self.converter.convert(amount)?;
        if json {
            console.say(&format!("{}\n", serde_json::to_string_pretty(&result)?))?;
        } else {
            let width = console.display().line_width;
            console.say(&render_conversion(&result, self.converter.table(), width))?;
        }
        Ok(Some(result))
    }

    pub fn show_rates<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let width = console.display().line_width;
        console.say(&render_rates(self.converter.table(), width))
    }

    fn confirm_fee<R: BufRead, W: Write>(&self, console: &mut Console<R, W>, amount: f64) -> Result<bool> {
        console.say(&format!(
            "A {} transaction fee will be charged for the exchange.\n",
            fee_percent(self.converter.table())
        ))?;
        if console.input().read_yes_no("Would you like to proceed?")? {
            return Ok(true);
        }
        tracing::info!("Exchange of {:.2} PHP declined at fee confirmation", amount);
        console.say("Transaction cancelled.\n")?;
        Ok(false)
    }
}

impl Default for CurrencyExchange {
    fn default() -> Self {
        Self::new(CurrencyConverter::default())
    }
}

impl Activity for CurrencyExchange {
    fn title(&self) -> &str {
        "Currency Exchange Calculator"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            console.header(self.title())?;
            console.say("Currency Exchange Options:\n1. Exchange Currency\n2. View Rates\n3. Exit\n")?;
            console.line()?;

            match console.input().read_choice("Enter choice (1-3): ", 1, 3)? {
                1 => {
                    self.exchange(console)?;
                    console.pause()?;
                }
                2 => {
                    self.show_rates(console)?;
                    console.pause()?;
                }
                _ => {
                    console.say("Exiting Currency Exchange Calculator...\n")?;
                    console.say("Successfully Navigated to Main Menu\n\n")?;
                    return Ok(());
                }
            }
        }
    }
}
