/// love.js web export entry point
use clap::Parser;
use love_web_export::Exporter;
use love_web_export::cli::Args;
use love_web_export::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.quiet, args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.export_config()?;
    let exporter = Exporter::new(args.layout(), args.loading_size(), config);
    let report = exporter.run()?;

    if !args.quiet {
        println!("{}", report.summary());
    }

    Ok(())
}
