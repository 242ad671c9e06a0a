use std::process::ExitCode;

fn main() -> ExitCode {
    hunter_cli::run()
}
