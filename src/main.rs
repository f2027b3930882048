use clap::Parser;
use pbm2frame::cli::{self, Args};

fn main() {
    let args = Args::parse();

    match cli::run(&args) {
        Ok(summary) => {
            log::debug!("Generated {} rows", summary.rows);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
