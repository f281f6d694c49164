use serde::{Deserialize, Serialize};

/// How tick labels pick their decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickLabelPolicy {
    /// Precision follows the tick spacing; trailing zeros are trimmed.
    #[default]
    Adaptive,
    FixedDecimals { precision: u8 },
}

pub(super) fn format_tick_label(value: f64, step_abs: f64, policy: TickLabelPolicy) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    match policy {
        TickLabelPolicy::FixedDecimals { precision } => {
            let precision = usize::from(precision.min(12));
            format!("{value:.precision$}")
        }
        TickLabelPolicy::Adaptive => {
            let precision = precision_from_step(normalize_step(step_abs));
            trim_decimal(format!("{value:.precision$}"))
        }
    }
}

/// Rounds a step to the nearest 1/2/5 multiple of its decade.
fn normalize_step(step_abs: f64) -> f64 {
    if !step_abs.is_finite() || step_abs <= 0.0 {
        return 0.01;
    }

    let magnitude = 10.0_f64.powf(step_abs.log10().floor());
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return step_abs;
    }

    let normalized = step_abs / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn precision_from_step(step: f64) -> usize {
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len()
}

fn trim_decimal(mut text: String) -> String {
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    if text == "-0" { "0".to_owned() } else { text }
}
