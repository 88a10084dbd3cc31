use clap::Parser;
use docq::cli::Cli;
use docq::pager::Output;
use docq::paths::StatePaths;
use docq::{Session, SessionConfig, SessionError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    docq::tracing::init(cli.log_level());

    let query = cli.query.clone().unwrap_or_default();
    let output = Output::from_flags(cli.no_pager, cli.pager.clone());
    let config = SessionConfig {
        state: StatePaths::from_env(),
        databases: cli.databases.clone(),
        discovery_dir: if cli.no_discovery {
            None
        } else {
            std::env::current_dir().ok()
        },
    };

    let mut session = Session::open(&config);
    match session.run(&query, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SessionError>() {
                Some(err) if err.is_usage() => println!("{}", err),
                Some(err) => eprintln!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}
