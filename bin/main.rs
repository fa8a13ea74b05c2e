#![allow(clippy::needless_return)]

use std::{
    fs,
    io::{ self, Read, Write },
    path::PathBuf,
};
use clap::{ Args, Parser, Subcommand };
use format_multiple_errors::{
    format_multiple_errors,
    table::{ format_table, Column, Table },
    ErrorTerm,
    FormatOptions,
    LengthControl,
};

#[derive(Parser)]
#[command(
    name = "format_multiple_errors",
    version,
    about = "Format numbers with multiple uncertainties consistently",
)]
struct Cli {
    #[command(flatten)]
    style: StyleArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct StyleArgs {
    /// Abbreviate the uncertainty, e.g. 1.23(4) instead of 1.23 ± 0.04
    #[arg(long, global = true)]
    abbreviate: bool,

    /// Use exponential notation
    #[arg(long, global = true)]
    exponential: bool,

    /// Use LaTeX rather than plain text, e.g. 1.23 \pm 0.04 instead of 1.23 ± 0.04
    #[arg(long, global = true)]
    latex: bool,

    /// Number of significant figures to display [default: 2]
    #[arg(long, global = true, visible_alias = "significant_figures")]
    significant_figures: Option<u32>,

    /// Value to control the significant figures of (`smallest` uncertainty or
    /// `central` value) [default: smallest]
    #[arg(long, global = true, visible_alias = "length_control")]
    length_control: Option<LengthControl>,

    /// TOML file of default options; flags given here take priority
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

impl StyleArgs {
    fn options(&self) -> Result<FormatOptions, Box<dyn std::error::Error>> {
        let mut opts: FormatOptions
            = match &self.config {
                Some(path) => FormatOptions::load(path)?,
                None => FormatOptions::default(),
            };
        opts.abbreviate |= self.abbreviate;
        opts.exponential |= self.exponential;
        opts.latex |= self.latex;
        if let Some(sf) = self.significant_figures {
            opts.significant_figures = sf;
        }
        if let Some(lc) = self.length_control {
            opts.length_control = lc;
        }
        log::debug!("options: {:?}", opts);
        return Ok(opts);
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Format a single number
    Format {
        /// The central value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Uncertainties in the value; asymmetric uncertainties are given as
        /// upper,lower
        #[arg(required = true, value_name = "ERROR", allow_negative_numbers = true)]
        errors: Vec<ErrorTerm>,
    },

    /// Format a CSV file into a LaTeX table
    Table {
        /// The CSV file to read, or `-` for standard input
        input_file: String,

        /// Columns to include, as
        /// value_column[,error_column[-lower_error_column]]...
        #[arg(required = true, value_name = "COLUMN_SPEC")]
        column_specs: Vec<Column>,

        /// Where to write the LaTeX (default: standard output)
        #[arg(long, visible_alias = "output_file")]
        output_file: Option<PathBuf>,

        /// Column headings to use instead of the CSV's; the count must match
        /// the number of columns
        #[arg(long, num_args = 1.., value_name = "HEADING")]
        headings: Option<Vec<String>>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let opts: FormatOptions = cli.style.options()?;

    match cli.command {
        Commands::Format { value, errors } => {
            println!("{}", format_multiple_errors(value, &errors, &opts)?);
        },
        Commands::Table { input_file, column_specs, output_file, headings } => {
            if !opts.latex {
                log::warn!(
                    "--latex not specified; for LaTeX table output this will be forced on"
                );
            }
            let opts: FormatOptions = opts.latex(true);
            let table: Table
                = if input_file == "-" {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    Table::from_csv_str(&buf)?
                } else {
                    Table::read_csv(&input_file)?
                };
            let latex: String
                = format_table(&table, &column_specs, &opts)?
                .to_latex(headings.as_deref())?;
            match output_file {
                Some(path) => fs::write(path, latex)?,
                None => io::stdout().write_all(latex.as_bytes())?,
            }
        },
    }
    return Ok(());
}
