use crate::estimator::estimate_cascade;
use crate::input::parse_investment;
use crate::io::{prompt_line, result_line};
use anyhow::Result;
use std::io::{BufRead, Write};

pub const BANNER: &str = "---------- Calculadora de Anúncios ----------";
pub const PROMPT: &str = "Informe o valor a ser investido no anúncio: R$ ";

/// Prompt for the investment on `input` and print the estimate to `output`.
///
/// A value that does not parse is returned as an error; there is no retry.
pub fn run_interactive<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", BANNER)?;
    writeln!(output)?;

    let line = prompt_line(input, output, PROMPT)?;
    let investment = parse_investment(&line)?;
    tracing::info!(investment, "estimating views");

    let report = estimate_cascade(investment);
    writeln!(output, "{}", result_line(&report))?;
    Ok(())
}
