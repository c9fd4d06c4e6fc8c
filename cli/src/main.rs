//! An 8-bit binary calculator.  Expressions are entered as on the
//! keypad (for example `0101+1111=`) and the result is shown as a
//! bit pattern, a decimal value and a row of indicator lights.
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing::{Level, event};
use tracing_subscriber::prelude::*;

use alu::prelude::*;

mod expr;
mod lights;
mod report;

use expr::{BadExpression, parse_expression};
use lights::IndicatorPanel;
use report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ZeroDivisorArg {
    /// Report an error (with --checked).
    Fail,
    /// Produce a zero quotient.
    Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RoundingArg {
    TowardZero,
    Floor,
}

/// Perform 8-bit two's-complement arithmetic on binary operands
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// Expression such as 0101+1111= (read from standard input if omitted)
    expression: Option<String>,

    /// Treat overflow and division by zero as errors
    #[clap(long)]
    checked: bool,

    /// Never flag overflow for multiplication or division
    #[clap(long)]
    ignore_multiplicative_overflow: bool,

    /// What dividing by zero does in checked mode
    #[clap(long, value_enum, default_value_t = ZeroDivisorArg::Fail)]
    zero_divisor: ZeroDivisorArg,

    /// How inexact quotients are rounded
    #[clap(long, value_enum, default_value_t = RoundingArg::TowardZero)]
    rounding: RoundingArg,

    /// Print the outcome as a JSON object
    #[clap(long)]
    json: bool,

    /// Don't draw the indicator lights
    #[clap(long)]
    no_lights: bool,
}

impl Cli {
    fn policy(&self) -> Policy {
        Policy {
            multiplicative_overflow: if self.ignore_multiplicative_overflow {
                MultiplicativeOverflow::Ignore
            } else {
                MultiplicativeOverflow::Report
            },
            zero_divisor: match self.zero_divisor {
                ZeroDivisorArg::Fail => ZeroDivisor::Fail,
                ZeroDivisorArg::Zero => ZeroDivisor::YieldZero,
            },
            rounding: match self.rounding {
                RoundingArg::TowardZero => Rounding::TowardZero,
                RoundingArg::Floor => Rounding::TowardNegativeInfinity,
            },
        }
    }
}

#[derive(Debug)]
enum Fail {
    Setup(String),
    Io(io::Error),
    Parse(BadExpression),
    Arithmetic(ArithmeticError),
}

impl Fail {
    fn exit_status(&self) -> i32 {
        match self {
            Fail::Arithmetic(_) => 2,
            _ => 1,
        }
    }
}

impl Display for Fail {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Fail::Setup(msg) => f.write_str(msg),
            Fail::Io(e) => write!(f, "I/O error: {e}"),
            Fail::Parse(e) => write!(f, "bad expression: {e}"),
            Fail::Arithmetic(e) => Display::fmt(e, f),
        }
    }
}

impl Error for Fail {}

impl From<io::Error> for Fail {
    fn from(e: io::Error) -> Fail {
        Fail::Io(e)
    }
}

fn init_logging() -> Result<(), Fail> {
    // RUST_LOG selects which trace messages get printed; see the
    // tracing-subscriber documentation for EnvFilter.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
        .map_err(|e| Fail::Setup(format!("failed to configure logging: {e}")))?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn prompt_for_expression() -> Result<String, Fail> {
    let mut stdout = io::stdout();
    write!(stdout, "Please enter calculation: ")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn emit(cli: &Cli, report: &Report, value: Signed8Bit) -> Result<(), Fail> {
    if cli.json {
        let json = serde_json::to_string(report)
            .map_err(|e| Fail::Setup(format!("failed to encode report as JSON: {e}")))?;
        println!("{json}");
        return Ok(());
    }
    println!("{report}");
    if !cli.no_lights {
        IndicatorPanel::stdout().show(value, report.overflow)?;
    }
    Ok(())
}

fn run_calculator() -> Result<(), Fail> {
    let cli = Cli::parse();
    init_logging()?;

    let text = match cli.expression.as_deref() {
        Some(text) => text.to_string(),
        None => prompt_for_expression()?,
    };
    let expr = parse_expression(&text).map_err(Fail::Parse)?;
    let unit = ArithmeticUnit::new(cli.policy());
    event!(Level::INFO, "calculating {} with {:?}", expr, unit.policy());

    if cli.checked {
        match unit.calculate(expr.operator, expr.left, expr.right) {
            Ok(value) => emit(&cli, &Report::new(&expr, value, false), value),
            Err(e) => {
                if cli.json {
                    let report = Report::failed(&expr, &e);
                    emit(&cli, &report, Signed8Bit::ZERO)?;
                }
                Err(Fail::Arithmetic(e))
            }
        }
    } else {
        let (value, overflow) = unit.evaluate(expr.operator, expr.left, expr.right);
        emit(&cli, &Report::new(&expr, value, overflow), value)
    }
}

fn main() {
    match run_calculator() {
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_status());
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
