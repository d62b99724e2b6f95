//! Demo data shipped with the dashboard

use chrono::NaiveDate;

use super::charts::{Category, MonthlyPoint};
use super::investments::{Investment, RiskTier};
use super::transactions::{Transaction, TransactionKind};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn categories() -> Vec<Category> {
    [
        ("1", "Alimentação", "#FF6B6B"),
        ("2", "Transporte", "#4ECDC4"),
        ("3", "Lazer", "#45B7D1"),
        ("4", "Trabalho", "#96CEB4"),
        ("5", "Saúde", "#FFEAA7"),
        ("6", "Casa", "#DDA0DD"),
        ("7", "Educação", "#98D8C8"),
        ("8", "Outros", "#F7DC6F"),
    ]
    .into_iter()
    .map(|(id, name, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    })
    .collect()
}

pub fn transactions() -> Vec<Transaction> {
    use TransactionKind::{Expense, Income};

    vec![
        Transaction::new("1", 5000.0, "Salário Mensal", day(2024, 1, 15), "Trabalho", Income),
        Transaction::new("2", -1200.0, "Aluguel", day(2024, 1, 5), "Casa", Expense),
        Transaction::new("3", -350.0, "Supermercado", day(2024, 1, 10), "Alimentação", Expense),
        Transaction::new("4", 2500.0, "Freelance Design", day(2024, 1, 20), "Trabalho", Income),
        Transaction::new("5", -180.0, "Cinema e Jantar", day(2024, 1, 12), "Lazer", Expense),
        Transaction::new("6", -450.0, "Gasolina", day(2024, 1, 8), "Transporte", Expense),
    ]
}

pub fn investments() -> Vec<Investment> {
    let product = |id: &str,
                   name: &str,
                   kind: &str,
                   yield_pct: f64,
                   min_investment: f64,
                   risk: RiskTier,
                   duration: &str,
                   description: &str| Investment {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        yield_pct,
        min_investment,
        risk,
        duration: duration.to_string(),
        description: description.to_string(),
    };

    vec![
        product("1", "CDB Banco Inter", "CDB", 12.5, 1000.0, RiskTier::Low, "1-2 anos",
            "CDB com liquidez diária e rentabilidade de 120% do CDI"),
        product("2", "LCI Santander", "LCI", 11.8, 5000.0, RiskTier::Low, "2 anos",
            "Letra de Crédito Imobiliário isenta de IR"),
        product("3", "Tesouro Selic", "Tesouro", 10.9, 100.0, RiskTier::Low, "Flexível",
            "Título público com liquidez diária"),
        product("4", "FII Hospital", "FII", 8.5, 2000.0, RiskTier::Medium, "Indeterminado",
            "Fundo de Investimento Imobiliário focado em hospitais"),
        product("5", "Ações Petrobras", "Ações", 15.2, 500.0, RiskTier::High, "Indeterminado",
            "Ações ordinárias da Petrobras com bom dividend yield"),
        product("6", "CRA Agro", "CRA", 13.1, 3000.0, RiskTier::Medium, "3 anos",
            "Certificado de Recebíveis do Agronegócio"),
    ]
}

pub fn chart_data() -> Vec<MonthlyPoint> {
    [
        ("Jan", 7500.0, 2180.0, 5320.0),
        ("Fev", 6200.0, 2450.0, 8070.0),
        ("Mar", 8100.0, 2890.0, 13280.0),
        ("Abr", 5800.0, 2100.0, 16980.0),
        ("Mai", 7200.0, 2650.0, 21530.0),
        ("Jun", 6900.0, 2300.0, 26130.0),
    ]
    .into_iter()
    .map(|(month, income, expense, balance)| MonthlyPoint {
        month: month.to_string(),
        income,
        expense,
        balance,
    })
    .collect()
}
