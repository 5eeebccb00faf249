use std::fmt::Write as _;

use patocash_core::backend::{Transaction, UserId};
use patocash_core::budget::BudgetSummary;
use patocash_core::goals::GoalSource;
use patocash_core::overview::{FinancesOverview, GoalsOverview, HomeOverview};

use super::{escape, format_money, format_percentage, layout, transactions_table};

fn budget_panel(budget: &BudgetSummary, goal: &GoalSource) -> String {
    let mut html = String::from("<section class=\"budget\">");
    if goal.is_degraded() {
        html.push_str("<p>Nenhuma meta definida.</p>");
    } else {
        let _ = write!(html, "<p>Meta: <strong>{}</strong></p>", format_money(budget.goal));
    }
    let remaining_class = if budget.over_budget { " class=\"negative\"" } else { "" };
    let _ = write!(
        html,
        "<p>Gasto total: <strong>{}</strong></p>\
<p>Restante: <strong{}>{}</strong></p>\
<div class=\"progress\"><div style=\"width:{}%\"></div></div><p>{} da meta</p></section>",
        format_money(budget.total_spend),
        remaining_class,
        format_money(budget.remaining_budget),
        budget.spend_percentage.normalize(),
        format_percentage(budget.spend_percentage),
    );
    html
}

pub fn render_home(overview: &HomeOverview, username: Option<&str>) -> String {
    let mut body = String::from("<h1>Início</h1>");
    body.push_str(&budget_panel(&overview.budget, &overview.goal));

    let _ = write!(body, "<h2>Cartões ({})</h2><ul>", overview.card_count);
    for card in &overview.featured_cards {
        let _ = write!(
            body,
            "<li>{} {} &middot; {} &middot; meta {}</li>",
            escape(&card.name),
            escape(&card.number),
            escape(&card.kind),
            format_money(card.goal),
        );
    }
    body.push_str("</ul><h2>Transações</h2>");
    body.push_str(&transactions_table(&overview.transactions));
    layout("Início", username, &body)
}

pub fn render_goals(overview: &GoalsOverview, username: Option<&str>) -> String {
    let mut body = String::from("<h1>Metas</h1>");
    body.push_str(&budget_panel(&overview.budget, &overview.goal));

    body.push_str("<h2>Gastos por categoria</h2><table><tbody>");
    for entry in &overview.categories {
        let _ = write!(
            body,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(&entry.category),
            format_money(entry.total),
        );
    }
    let _ = write!(
        body,
        "</tbody></table><h2>Alterar meta</h2>\
<form method=\"post\" action=\"/metas\">\
<input name=\"meta\" type=\"number\" min=\"0\" step=\"0.01\" value=\"{}\">\
<button type=\"submit\">Salvar</button></form>",
        overview.goal.value(),
    );
    layout("Metas", username, &body)
}

pub fn render_finances(
    overview: &FinancesOverview,
    user: &UserId,
    username: Option<&str>,
) -> String {
    let mut body = String::from("<h1>Finanças</h1>");
    let _ = write!(
        body,
        "<p>Gasto total: <strong>{}</strong></p><p>Pendente: <strong>{}</strong></p>",
        format_money(overview.total_spend),
        format_money(overview.pending),
    );

    let _ = write!(
        body,
        "<form method=\"get\" action=\"/exportar-pdf\">\
<input type=\"hidden\" name=\"id\" value=\"{}\">\
<select name=\"mes\"><option value=\"\">Todos os meses</option>",
        escape(user.as_str()),
    );
    for month in &overview.months {
        let m = escape(month);
        let _ = write!(body, "<option value=\"{m}\">{m}</option>");
    }
    body.push_str("</select><select name=\"categoria\"><option value=\"\">Todas as categorias</option>");
    for category in &overview.categories {
        let c = escape(category);
        let _ = write!(body, "<option value=\"{c}\">{c}</option>");
    }
    body.push_str("</select><button type=\"submit\">Exportar PDF</button></form>");

    body.push_str(&transactions_table(&overview.transactions));
    layout("Finanças", username, &body)
}

pub fn render_history(transactions: &[Transaction], username: Option<&str>) -> String {
    let mut body = String::from("<h1>Histórico</h1>");
    if transactions.is_empty() {
        body.push_str("<p>Nenhuma transação registrada.</p>");
    } else {
        body.push_str(&transactions_table(transactions));
    }
    layout("Histórico", username, &body)
}
