use ewallet::Ledger;
use log::error;

fn main() {
    env_logger::init();

    let mut ledger = Ledger::new();
    if let Err(e) = ledger.streaming_execute_cli() {
        error!("{}", e);
        std::process::exit(1);
    }
}
