//! Binary entrypoint for fontscan-cli

fn main() {
    if let Err(err) = fontscan_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
