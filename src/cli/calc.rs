use super::ui;
use crate::core::calculator::{CalculatorState, Frequency};
use crate::core::config::AppConfig;
use crate::core::currency::Currency;
use crate::core::risk::RiskProfile;
use anyhow::Result;
use tracing::debug;

/// Shown in place of a result while the inputs are incomplete or invalid.
pub const EMPTY_RESULT_PLACEHOLDER: &str = "Enter values to see result";

/// Inputs of a one-shot calculation. Unset fields take their value from
/// the loaded configuration; income has no configured default and stays
/// empty when absent.
#[derive(Debug, Default, Clone)]
pub struct CalcOptions {
    pub income: Option<String>,
    pub currency: Option<String>,
    pub frequency: Option<String>,
    pub rate: Option<f64>,
}

/// Merges CLI flags over configured defaults into a full input tuple.
pub fn build_state(config: &AppConfig, options: &CalcOptions) -> CalculatorState {
    let mut state = config.initial_state();
    if let Some(income) = &options.income {
        state.income = income.clone();
    }
    if let Some(currency) = &options.currency {
        state.currency = Currency::parse_lenient(currency);
    }
    if let Some(frequency) = &options.frequency {
        state.frequency = Frequency::parse_lenient(frequency);
    }
    if let Some(rate) = options.rate {
        // Flags bypass the interactive control, so the rate is passed to
        // the engine unclamped.
        state.return_rate = rate;
    }
    debug!("Resolved calculator inputs: {state:?}");
    state
}

pub fn run(config: &AppConfig, options: &CalcOptions) -> Result<()> {
    let state = build_state(config, options);
    println!("{}", render(&state));
    Ok(())
}

/// Renders the calculator panel: inputs, result (or placeholder) and the
/// derived breakdown lines.
pub fn render(state: &CalculatorState) -> String {
    let projection = state.evaluate();

    let mut table = ui::new_styled_table();

    let income_display = if state.income.trim().is_empty() {
        "N/A".to_string()
    } else {
        state.income.trim().to_string()
    };
    table.add_row(vec![
        ui::label_cell("Desired Income"),
        ui::value_cell(&format!(
            "{} {} ({})",
            income_display, state.currency, state.frequency
        )),
    ]);

    let risk = RiskProfile::classify(state.return_rate);
    table.add_row(vec![
        ui::label_cell("Expected Annual Return"),
        ui::value_cell(&format!("{}% ({})", state.return_rate, risk)),
    ]);

    match &projection {
        Some(p) => {
            table.add_row(vec![
                ui::label_cell("Required Net Worth"),
                ui::result_cell(&state.currency.format(p.required_net_worth)),
            ]);
        }
        None => {
            table.add_row(vec![
                ui::label_cell("Required Net Worth"),
                ui::value_cell(EMPTY_RESULT_PLACEHOLDER),
            ]);
        }
    }

    let mut output = format!(
        "{}\n\n",
        ui::style_text("Passive Income Calculator", ui::StyleType::Title)
    );
    output.push_str(&table.to_string());

    if let Some(p) = projection {
        output.push_str(&format!(
            "\n\n{}",
            ui::style_text(&p.badge(), ui::StyleType::ResultLabel)
        ));
        output.push_str(&format!(
            "\n{}",
            ui::style_text(&p.breakdown(state.currency), ui::StyleType::Subtle)
        ));
        output.push_str(&format!(
            "\n{}",
            ui::style_text(&p.assumption(), ui::StyleType::Subtle)
        ));
    }

    output
}
