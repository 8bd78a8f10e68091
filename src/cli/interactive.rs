use super::calc;
use crate::core::calculator::{CalculatorState, Frequency, RATE_MAX, RATE_MIN};
use crate::core::currency::Currency;
use anyhow::{Context, Result};
use console::Term;
use dialoguer::{Input, Select};
use tracing::debug;

/// Runs the interactive session: the panel is redrawn with a freshly
/// evaluated result after every input change. State lives only for the
/// duration of the session; nothing is persisted.
pub fn run(initial: CalculatorState) -> Result<()> {
    let term = Term::stdout();
    let mut state = initial;

    loop {
        term.clear_screen().context("Failed to clear terminal")?;
        println!("{}\n", calc::render(&state));

        let items = [
            "Set income",
            "Set currency",
            "Set frequency",
            "Set return rate",
            "Quit",
        ];
        let selection = Select::new()
            .with_prompt("What would you like to change?")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => state.income = prompt_income(&state.income)?,
            1 => state.currency = prompt_currency(state.currency)?,
            2 => state.frequency = prompt_frequency(state.frequency)?,
            3 => state.return_rate = prompt_rate(state.return_rate)?,
            _ => break,
        }
        debug!("Input changed: {state:?}");
    }

    Ok(())
}

fn prompt_income(current: &str) -> Result<String> {
    // Free-form text by design; invalid input renders as the neutral
    // placeholder instead of being rejected here.
    let income: String = Input::new()
        .with_prompt("Desired income")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(income)
}

fn prompt_currency(current: Currency) -> Result<Currency> {
    let codes: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
    let default = Currency::ALL.iter().position(|c| *c == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Currency")
        .items(&codes)
        .default(default)
        .interact()?;
    Ok(Currency::ALL[selection])
}

fn prompt_frequency(current: Frequency) -> Result<Frequency> {
    let labels: Vec<String> = Frequency::ALL.iter().map(|f| f.to_string()).collect();
    let default = Frequency::ALL
        .iter()
        .position(|f| *f == current)
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Income frequency")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(Frequency::ALL[selection])
}

/// The return-rate control offers integer steps between `RATE_MIN` and
/// `RATE_MAX` only. The engine itself accepts any positive rate; the
/// restriction is a property of this control.
fn prompt_rate(current: f64) -> Result<f64> {
    let steps: Vec<u8> = (RATE_MIN..=RATE_MAX).collect();
    let labels: Vec<String> = steps.iter().map(|r| format!("{r}%")).collect();
    let default = steps
        .iter()
        .position(|r| f64::from(*r) == current)
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Expected annual return")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(f64::from(steps[selection]))
}
