use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage errors exit 1; --help and --version exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    cli::init_tracing(args.verbose);
    cli::run(args)
}
