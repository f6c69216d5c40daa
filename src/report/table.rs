//! Plain-text rendering of a decay series
//!
//! Column widths follow the fixed-width layout of the results pane:
//! activities to 3 decimals, percentages to 2, decay factors to 4.

use super::ReportContext;
use crate::decay::{DecayConstants, DecaySeries};

const NOT_AVAILABLE: &str = "n/a";

fn fmt_opt(value: Option<f64>, width: usize, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:>width$.decimals$}", v),
        None => format!("{:>width$}", NOT_AVAILABLE),
    }
}

/// Fixed-width results table, one row per timepoint in series order
pub fn format_table(series: &DecaySeries, ctx: &ReportContext) -> String {
    let m_col = format!("{} ({})", ctx.labels.parent, ctx.unit);
    let g_col = format!("{} ({})", ctx.labels.daughter, ctx.unit);
    let m_pct_col = format!("% {}", ctx.labels.parent);
    let g_pct_col = format!("% {}", ctx.labels.daughter);

    let header = format!(
        "{:<20} {:>12} {:>15} {:>15} {:>12} {:>12} {:>10} {:>10}",
        "Time Point", "Elapsed (h)", m_col, g_col, m_pct_col, g_pct_col, "DF m", "DF g"
    );

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));

    for r in series {
        out.push_str(&format!(
            "\n{:<20} {:>12.3} {:>15.3} {:>15.3} {} {} {} {}",
            r.raw_label,
            r.elapsed_hours,
            r.parent_activity,
            r.daughter_activity,
            fmt_opt(r.parent_percent, 12, 2),
            fmt_opt(r.daughter_percent, 12, 2),
            fmt_opt(r.decay_factor_parent, 10, 4),
            fmt_opt(r.decay_factor_daughter, 10, 4),
        ));
    }
    out
}

/// Decay-constant table with 8-decimal values in h⁻¹
pub fn format_constants(constants: &DecayConstants, ctx: &ReportContext) -> String {
    let (m, g) = (&ctx.labels.parent, &ctx.labels.daughter);
    let names = [
        format!("λm ({m})"),
        format!("λ_ITm ({m} → {g})"),
        format!("λg ({g})"),
    ];

    let width = names
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max("Decay Constant".len());

    let mut out = format!("{:<width$}  {}", "Decay Constant", "Value (h⁻¹)");
    for (name, (_, value)) in names.iter().zip(constants.named()) {
        let pad = width - name.chars().count();
        out.push_str(&format!(
            "\n{name}{}  {}",
            " ".repeat(pad),
            DecayConstants::format_value(value)
        ));
    }
    out
}

/// The Bateman equations used by the model, as plain text
pub fn equations_text(ctx: &ReportContext) -> String {
    format!(
        "{m}:\n  A_m(t) = A_m0 · e^(−λm·t)\n\n\
         {g}:\n  A_g(t) = A_g0 · e^(−λg·t) + (λ_ITm / (λg − λ_ITm)) · (λg / λm) · A_m0 · (e^(−λ_ITm·t) − e^(−λg·t))",
        m = ctx.labels.parent,
        g = ctx.labels.daughter
    )
}

/// Constants, equations and table as one report
pub fn format_report(series: &DecaySeries, ctx: &ReportContext) -> String {
    let mut out = format!(
        "Bateman Decay Calculator {} → {}\n\n{}\n\n{}\n\n",
        ctx.labels.parent,
        ctx.labels.daughter,
        format_constants(&series.constants, ctx),
        equations_text(ctx)
    );
    out.push_str(&format_table(series, ctx));
    for w in &series.warnings {
        out.push_str(&format!("\nwarning: {w}"));
    }
    out
}
