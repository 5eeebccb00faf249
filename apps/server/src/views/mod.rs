//! Server-rendered HTML.
//!
//! Every string that originates from the data service goes through `escape`.

mod pages;
mod report;

use std::fmt::Write as _;

use rust_decimal::{Decimal, RoundingStrategy};

pub use pages::{render_finances, render_goals, render_history, render_home};
pub use report::render_report;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// pt-BR currency, e.g. `R$ 1.234,56` and `-R$ 50,00`.
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{}R$ {},{}", sign, grouped, frac_part)
}

/// Percentage with two decimals and a comma separator, e.g. `42,50%`.
pub fn format_percentage(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded).replace('.', ",")
}

const BASE_STYLE: &str = "body{font-family:sans-serif;margin:0;color:#222}\
nav{background:#1f7a4d;padding:12px 24px}nav a{color:#fff;margin-right:16px;text-decoration:none}\
main{padding:24px}table{border-collapse:collapse;width:100%}\
td,th{border-bottom:1px solid #ddd;padding:6px;text-align:left}\
.negative{color:#b00020}.progress{background:#eee;height:12px;border-radius:6px}\
.progress>div{background:#1f7a4d;height:12px;border-radius:6px}";

/// Wraps a page body in the navigation shell.
pub fn layout(title: &str, username: Option<&str>, body: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"utf-8\">\
<title>{title} - PatoCash</title><style>{BASE_STYLE}</style></head><body>\
<nav><a href=\"/inicio\">Início</a><a href=\"/financas\">Finanças</a>\
<a href=\"/metas\">Metas</a><a href=\"/historico\">Histórico</a></nav><main>",
        title = escape(title),
    );
    if let Some(name) = username {
        let _ = write!(html, "<p>Olá, {}!</p>", escape(name));
    }
    html.push_str(body);
    html.push_str("</main></body></html>");
    html
}

/// Rows of `establishment | category | amount | date`.
pub(crate) fn transactions_table(transactions: &[patocash_core::backend::Transaction]) -> String {
    let mut html = String::from(
        "<table><thead><tr><th>Estabelecimento</th><th>Categoria</th>\
<th>Valor</th><th>Data</th></tr></thead><tbody>",
    );
    for tx in transactions {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&tx.establishment),
            escape(&tx.category),
            format_money(tx.amount),
            escape(&tx.date),
        );
    }
    html.push_str("</tbody></table>");
    html
}
