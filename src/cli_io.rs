use crate::operation::{AmountOp, OpenOp, TransferOp, WalletOp};
use crate::wallet::{format_amount, Wallet};
use csv::Writer;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::{self, ErrorKind};
use std::str::FromStr;

/// Options and data to export results
pub enum OutputMethod {
    /// Output to csv file.  Used for integration testing.
    Csv(String),
    /// Output to console
    StdOutput,
}

/// One `wallet,currency,balance` row per currency held, wallets in creation order
fn balance_rows(wallets: &[Wallet]) -> Vec<[String; 3]> {
    let mut rows = vec![];
    for wallet in wallets {
        for (currency, amount) in wallet.balance() {
            rows.push([
                wallet.name().to_string(),
                currency.to_string(),
                format_amount(amount),
            ]);
        }
    }
    rows
}

/// Output the balances of a collection of wallets
pub fn output_balances(wallets: &[Wallet], output: &OutputMethod) -> Result<(), io::Error> {
    match output {
        OutputMethod::Csv(file_path) => output_balances_csv(wallets, file_path),
        OutputMethod::StdOutput => {
            println!("wallet,currency,balance");
            for row in balance_rows(wallets) {
                println!("{}", row.join(","));
            }
            Ok(())
        }
    }
}

fn output_balances_csv(wallets: &[Wallet], file_path: &str) -> Result<(), io::Error> {
    let mut wtr = Writer::from_path(file_path)?;
    wtr.write_record(["wallet", "currency", "balance"])?;
    for row in balance_rows(wallets) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub struct CliOptions {
    pub input_file: String,
    pub output: OutputMethod,
}

pub fn parse_cli() -> Result<CliOptions, io::Error> {
    let input_file = std::env::args()
        .nth(1)
        .ok_or_else(|| io::Error::new(ErrorKind::InvalidInput, "missing input file"))?;
    let output = OutputMethod::StdOutput;

    let cli_options = CliOptions { input_file, output };
    Ok(cli_options)
}

/// A wallet operation as it appears in the input csv
#[derive(Debug, Deserialize)]
pub struct RawInputOp {
    op: String,
    wallet: String,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    destination: Option<String>,
}

// csv hands empty fields over as Some("")
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|val| !val.is_empty())
}

impl RawInputOp {
    fn parse_amount(amount: Option<String>) -> Result<Decimal, InputOpErr> {
        let amount = non_empty(amount).ok_or(InputOpErr::MissingAmount)?;
        let amount = Decimal::from_str(&amount).map_err(|_| InputOpErr::InvalidAmount(amount))?;
        if amount <= Decimal::ZERO {
            return Err(InputOpErr::NonPositiveAmount(amount));
        }
        Ok(amount)
    }

    pub fn convert_to_op(self) -> Result<WalletOp, InputOpErr> {
        match self.op.as_str() {
            "open" => Ok(WalletOp::Open(OpenOp {
                wallet: self.wallet,
            })),
            "top_up" | "withdraw" => {
                let amount = Self::parse_amount(self.amount)?;
                let currency = non_empty(self.currency).ok_or(InputOpErr::MissingCurrency)?;
                let amount_op = AmountOp {
                    wallet: self.wallet,
                    amount,
                    currency,
                };
                if self.op == "top_up" {
                    return Ok(WalletOp::TopUp(amount_op));
                }
                Ok(WalletOp::Withdraw(amount_op))
            }
            "transfer" => {
                let amount = Self::parse_amount(self.amount)?;
                let currency = non_empty(self.currency).ok_or(InputOpErr::MissingCurrency)?;
                let destination =
                    non_empty(self.destination).ok_or(InputOpErr::MissingDestination)?;
                Ok(WalletOp::Transfer(TransferOp {
                    wallet: self.wallet,
                    destination,
                    amount,
                    currency,
                }))
            }
            _ => Err(InputOpErr::UnsupportedOp(self.op)),
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum InputOpErr {
    UnsupportedOp(String),
    MissingAmount,
    InvalidAmount(String),
    NonPositiveAmount(Decimal),
    MissingCurrency,
    MissingDestination,
}

pub fn reader_from_path(
    in_file_path: &str,
    has_header: bool,
) -> Result<csv::Reader<std::fs::File>, io::Error> {
    let rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .has_headers(has_header)
        .from_path(in_file_path)?;
    Ok(rdr)
}
