//! CLI entry point for the `c1expr` tool.
//!
//! Evaluates one expression, taken from the command line or, when none is
//! given, from the first line of standard input, and reports the source text
//! alongside its value.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use c1expr::{DEFAULT_FILE, DivisionMode, Engine, EvalOptions, Grammar, Number};
use clap::Parser;

/// c1expr evaluates a single arithmetic expression over integers and
/// floating-point numbers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Divide two integers exactly, producing a float, instead of truncating.
    #[arg(long)]
    exact_division: bool,

    /// Name reported in error locations.
    #[arg(long, default_value = DEFAULT_FILE)]
    file: String,

    /// Expression to evaluate; words are joined with spaces. Read from
    /// standard input when omitted.
    #[arg(trailing_var_arg = true)]
    expression: Vec<String>,
}

impl Cli {
    fn options(&self) -> EvalOptions {
        EvalOptions {
            division: if self.exact_division {
                DivisionMode::Exact
            } else {
                DivisionMode::Truncating
            },
        }
    }

    fn source(&self) -> Option<String> {
        (!self.expression.is_empty()).then(|| self.expression.join(" "))
    }
}

fn read_expression(mut input: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn report(src: &str, value: Number) -> String {
    format!("Code: {src}\nInterprets to {value}")
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let src = match cli.source() {
        Some(src) => src,
        None => match read_expression(io::stdin().lock()) {
            Ok(src) => src,
            Err(err) => {
                let _ = writeln!(io::stderr(), "error: failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        },
    };
    let engine = Engine::new(Grammar::standard(), cli.options());
    match engine.evaluate(cli.file.as_str(), &src) {
        Ok(value) => {
            let _ = writeln!(io::stdout(), "{}", report(&src, value));
            ExitCode::SUCCESS
        }
        Err(err) => {
            let _ = writeln!(io::stderr(), "error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("c1expr").chain(args.iter().copied()))
    }

    #[rstest]
    fn expression_words_are_joined() {
        let cli = parse(&["1", "+", "2"]).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cli.source().as_deref(), Some("1 + 2"));
        assert_eq!(cli.file, DEFAULT_FILE);
        assert_eq!(cli.options().division, DivisionMode::Truncating);
    }

    #[rstest]
    fn options_precede_the_expression() {
        let cli = parse(&["--exact-division", "--file", "calc", "7/2"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cli.options().division, DivisionMode::Exact);
        assert_eq!(cli.file, "calc");
        assert_eq!(cli.source().as_deref(), Some("7/2"));
    }

    #[rstest]
    fn words_after_the_first_are_not_options() {
        let cli = parse(&["8", "--file", "x"]).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cli.source().as_deref(), Some("8 --file x"));
        assert_eq!(cli.file, DEFAULT_FILE);
    }

    #[rstest]
    fn double_dash_ends_options() {
        let cli = parse(&["--", "--file"]).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cli.source().as_deref(), Some("--file"));
    }

    #[rstest]
    fn no_words_means_stdin() {
        let cli = parse(&[]).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cli.source(), None);
    }

    #[rstest]
    #[case(&["--file"])]
    #[case(&["--verbose", "1"])]
    fn bad_arguments_are_usage_errors(#[case] args: &[&str]) {
        let err = parse(args).err().unwrap_or_else(|| panic!("{args:?} parsed"));
        assert_eq!(err.exit_code(), 2);
    }

    #[rstest]
    fn help_is_not_an_error_exit() {
        let err = parse(&["--help"]).err().unwrap_or_else(|| panic!("--help parsed"));
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[rstest]
    fn stdin_line_is_trimmed() {
        let src = read_expression("1 + 2\r\nignored\n".as_bytes())
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(src, "1 + 2");
    }

    #[rstest]
    fn report_shows_code_and_value() {
        assert_eq!(
            report("8-3-2", Number::Int(3)),
            "Code: 8-3-2\nInterprets to 3"
        );
    }
}
