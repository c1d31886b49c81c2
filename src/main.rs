use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tableau_vis::config::{OutputFormat, RenderConfig, ReportDetail};
use tableau_vis::driver::{self, DriverError, Sink};
use tracing_subscriber::EnvFilter;

const DESCRIPTION: &str = "\
Given an encoding in the format:
    +/- S1[p1a...] S2[p1b...] ... +/- S1[p2a...] S2[p2b...] ... +/- ...
where each [pxy...] is a partition, each +/- is either a '+' or '-' and
a leading '+' optionally omitted, a visualization in either plain text
or LaTeX is produced. The input and/or output can be made to be files.";

const EXAMPLES: &str = "\
input files:
    Units are separated by blank lines. In the output, units are separated
    by two blank lines.

examples:
    open an interactive session:
        tableau-vis

    read input from the command line:
        tableau-vis -i \"S1[3] S2[1, 1] S3[2, 2] S4[1] - S1[3] S2[0] S3[1, 1] S4[1]\"

    read input from a file and write to another:
        tableau-vis -f input.txt -o output.txt

    use a different LaTeX package (e.g. ytableau):
        tableau-vis -l -e -c ytableau";

#[derive(Parser, Debug)]
#[command(name = "tableau-vis", version, about = DESCRIPTION, after_help = EXAMPLES)]
struct Cli {
    /// Read input from the command line
    #[arg(short = 'i', value_name = "INPUT")]
    input: Option<String>,

    /// Read input from a file (overrides -i)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output to a file (only used with -f)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Append to the output file rather than overwrite (used with -o)
    #[arg(short, long)]
    append: bool,

    /// Separator within each group (defaults: text ", ", LaTeX ",\, ")
    #[arg(short, long)]
    sep: Option<String>,

    /// When outputting text, print parentheses at full height
    #[arg(short, long)]
    tall: bool,

    /// Output using LaTeX format
    #[arg(short, long)]
    latex: bool,

    /// Format LaTeX as an environment (for different packages)
    #[arg(short, long)]
    environment: bool,

    /// Set the LaTeX command to use (for different packages)
    #[arg(short, long, default_value = "tableau")]
    command: String,

    /// Disable line wrapping (always used with -o)
    #[arg(long)]
    no_wrap: bool,

    /// Include the underlying cause in error reports
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_config(&self, sink: Sink) -> RenderConfig {
        let format = if self.latex {
            OutputFormat::Markup
        } else {
            OutputFormat::Text
        };
        let detail = if self.verbose {
            ReportDetail::Verbose
        } else {
            ReportDetail::Terse
        };

        let mut config = RenderConfig::new()
            .with_format(format)
            .with_tall(self.tall)
            .with_markup_command(&self.command)
            .with_markup_environment(self.environment)
            .with_detail(detail);
        if let Some(sep) = &self.sep {
            config = config.with_separator(sep);
        }
        if format == OutputFormat::Text {
            config = config.with_max_width(sink.wrap_width(self.no_wrap));
        }
        config
    }
}

fn run(cli: &Cli) -> Result<(), DriverError> {
    let stdout = io::stdout();

    if let Some(path) = &cli.file {
        let data = std::fs::read_to_string(path)?;
        match &cli.out {
            Some(out_path) => {
                let mut file = driver::open_output(out_path, cli.append)?;
                driver::render_batch(&mut file, &data, &cli.render_config(Sink::File), Sink::File)?;
            }
            None => {
                let config = cli.render_config(Sink::Terminal);
                driver::render_batch(&mut stdout.lock(), &data, &config, Sink::Terminal)?;
            }
        }
    } else if let Some(input) = &cli.input {
        let config = cli.render_config(Sink::Terminal);
        driver::render_single(&mut stdout.lock(), input, &config)?;
    } else {
        let config = cli.render_config(Sink::Terminal);
        driver::run_interactive(io::stdin().lock(), &mut stdout.lock(), &config)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = io::stdout().flush();
            eprintln!("tableau-vis: {err}");
            ExitCode::FAILURE
        }
    }
}
