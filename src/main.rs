use cidrl::cli::Args;
use cidrl::config::{init_logging, Settings};
use cidrl::error::EXIT_NOT_MEMBER;
use cidrl::output::write_error;
use cidrl::{is_broken_pipe, run, CidrError, Outcome};
use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            // --help and --version are not usage errors
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let settings = Settings::from_env();
    if let Err(e) = init_logging(&settings, args.verbose) {
        eprintln!("{} {e}", "Warning:".yellow());
    }
    log::info!("#Start main()");

    let request = match args.into_request() {
        Ok(request) => request,
        Err(e) => return report(&e),
    };

    let mut out = io::BufWriter::new(io::stdout().lock());
    match run(&request, &mut out) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::NotMember) => ExitCode::from(EXIT_NOT_MEMBER),
        Err(e) => report_boxed(e.as_ref()),
    }
}

fn report(e: &CidrError) -> ExitCode {
    log::debug!("exit {}: {e:?}", e.exit_code());
    write_error(&mut io::stderr(), e).ok();
    ExitCode::from(e.exit_code())
}

fn report_boxed(e: &(dyn Error + 'static)) -> ExitCode {
    if let Some(cidr_error) = e.downcast_ref::<CidrError>() {
        return report(cidr_error);
    }
    if is_broken_pipe(e) {
        // Reader went away, e.g. `cidrl 10.0.0.0/8 | head`
        return ExitCode::SUCCESS;
    }
    write_error(&mut io::stderr(), e).ok();
    ExitCode::FAILURE
}
