use clap::Parser;
use unchop::{run_unchop, Args};

fn main() {
    let args = Args::parse();
    if let Err(e) = run_unchop(args) {
        eprintln!("[unchop] error: {e}");
        std::process::exit(1);
    }
}
