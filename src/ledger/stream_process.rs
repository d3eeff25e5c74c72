use super::Ledger;
use crate::cli_io::{output_balances, parse_cli, reader_from_path, CliOptions, RawInputOp};
use log::{info, warn};
use std::io;

/// Tallies of one streamed file
#[derive(Debug, Default, PartialEq)]
pub struct StreamSummary {
    pub applied: usize,
    pub rejected: usize,
    pub malformed: usize,
}

impl Ledger {
    /// Returns error in the event that file cannot be read
    /// Else mutates the ledger state
    /// Records with correct data format but fail logically given business logic are ignored
    /// Improper csv format or corrupted records are skipped
    pub fn stream_process_csv(
        &mut self,
        in_file_path: &str,
        has_header: bool,
    ) -> Result<StreamSummary, io::Error> {
        let mut rdr = reader_from_path(in_file_path, has_header)?;
        let mut summary = StreamSummary::default();

        for (line, result) in rdr.deserialize::<RawInputOp>().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("skipping unreadable record {}: {}", line + 1, e);
                    summary.malformed += 1;
                    continue;
                }
            };
            // Assume individual invalid records can be ignored, continue process file
            let op = match record.convert_to_op() {
                Ok(op) => op,
                Err(e) => {
                    warn!("skipping record {}: {:?}", line + 1, e);
                    summary.malformed += 1;
                    continue;
                }
            };
            match self.process_op(&op) {
                Ok(_) => summary.applied += 1,
                Err(e) => {
                    warn!("rejected record {}: {}", line + 1, e);
                    summary.rejected += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Executes the ledger given a cli input
    /// Won't execute if cli fails parsing
    /// Else will output balances if input file is valid
    pub fn streaming_execute_cli(&mut self) -> Result<(), io::Error> {
        let cli_options = parse_cli()?;
        self.streaming_execute(&cli_options)
    }

    /// Executes the ledger given cli options
    /// Rows rejected mid stream are skipped, balances reflect every row that applied
    pub fn streaming_execute(&mut self, cli_input: &CliOptions) -> Result<(), io::Error> {
        let summary = self.stream_process_csv(&cli_input.input_file, true)?;
        info!(
            "{}: {} applied, {} rejected, {} malformed",
            cli_input.input_file, summary.applied, summary.rejected, summary.malformed
        );

        output_balances(&self.wallets, &cli_input.output)
    }
}
