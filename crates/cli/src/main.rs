use std::{io, process::ExitCode};

use clap::Parser;
use flexi_logger::Logger;

use relax_cli::{Cli, ProblemConfig};

fn try_main(cli: Cli) -> anyhow::Result<ExitCode> {
    let _logger = Logger::try_with_env_or_str("warn")?.log_to_stderr().start()?;

    if cli.print_problem {
        print!("{}", ProblemConfig::default().to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let problem = match cli.problem {
        Some(path) => ProblemConfig::load(&path)?,
        None => ProblemConfig::default(),
    };

    let outcome = relax_cli::run(&problem, &mut io::stdout().lock())?;
    Ok(outcome.exit_code())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
