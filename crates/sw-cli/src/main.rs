use clap::Parser;
use sw_cli::{run, Cli, CliError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{err}");
                std::process::exit(0);
            }
            _ => {
                let err = CliError::Usage(err.to_string());
                eprintln!("ednafull_linear_smith_waterman: {err}");
                std::process::exit(err.exit_code());
            }
        },
    };

    if let Err(err) = run(&cli) {
        eprintln!("ednafull_linear_smith_waterman: {err}");
        std::process::exit(err.exit_code());
    }
}
