use std::fmt::Write as _;

use patocash_core::reports::Report;

use super::{escape, format_money, transactions_table};

/// `min-height` keeps short reports above the exporter's layout threshold.
const REPORT_STYLE: &str = "body{font-family:sans-serif;margin:32px;color:#222;min-height:1100px}\
h1{color:#1f7a4d}table{border-collapse:collapse;width:100%;margin-bottom:24px}\
td,th{border-bottom:1px solid #ddd;padding:6px;text-align:left}\
.total{font-size:1.4em}";

/// The printable report. No navigation chrome.
pub fn render_report(report: &Report) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"utf-8\">\
<title>Relatório PatoCash</title><style>{REPORT_STYLE}</style></head><body>\
<h1>Relatório de gastos</h1>\
<p>{} {}</p><p>Período: {} a {}</p>\
<p class=\"total\">Gasto total: <strong>{}</strong></p>",
        escape(&report.first_name),
        escape(&report.last_name),
        report.period.start_label(),
        report.period.end_label(),
        format_money(report.total_spend),
    );

    html.push_str("<h2>Maiores gastos</h2><ol>");
    for tx in &report.top_expenses {
        let _ = write!(
            html,
            "<li>{} &middot; {} &middot; {} &middot; {}</li>",
            escape(&tx.establishment),
            escape(&tx.category),
            format_money(tx.amount),
            escape(&tx.date),
        );
    }
    html.push_str("</ol><h2>Todas as transações</h2>");
    html.push_str(&transactions_table(&report.transactions));
    html.push_str("</body></html>");
    html
}
