use std::process::ExitCode;

fn main() -> ExitCode {
    cartridgemapper::cli::run()
}
