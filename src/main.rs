use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use huegen::*;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the output file (overwritten if it exists).
    #[arg(short, long)]
    output: PathBuf,
    /// Number of colors to generate.
    #[arg(short = 'n', long, default_value_t = 10000)]
    count: usize,
    /// Saturation of every color.
    #[arg(short, long, default_value_t = 0.9)]
    saturation: f64,
    /// Value (brightness) of every color.
    #[arg(short, long, default_value_t = 1.0)]
    value: f64,
}

impl Cli {
    /// Like `Cli::parse`, but every argument error ends with the usage line.
    fn parse_or_exit() -> Cli {
        let err = match Cli::try_parse() {
            Ok(cli) => return cli,
            Err(err) => err,
        };

        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {}
        }

        let msg = err.render().to_string();
        eprint!("{}", msg);
        if !msg.contains("Usage:") {
            eprintln!("\n{}", Cli::command().render_usage());
        }
        std::process::exit(err.exit_code());
    }

    fn palette_config(&self) -> PaletteConfig {
        PaletteConfig {
            count: self.count,
            saturation: self.saturation,
            value: self.value,
        }
    }
}

fn run() -> Result<(), PaletteError> {
    let cli = Cli::parse_or_exit();
    let cfg = cli.palette_config();

    log::debug!("{:?}", cfg);

    let before_run = std::time::Instant::now();

    cfg.write_file(&cli.output)?;

    let dur = before_run.elapsed();

    println!(
        "Completed! Generated {} colors in {}.{:03} seconds. Output written to '{}'",
        cfg.count,
        dur.as_secs(),
        dur.subsec_millis(),
        cli.output.display()
    );

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
