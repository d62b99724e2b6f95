//! Kaizen CLI
//!
//! Command-line front end for the calculator, dashboard aggregates and mock session

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use kaizen::auth::{
    InMemoryUserRepository, JsonFileStore, RegisterRequest, RestoreOutcome, SessionStore,
};
use kaizen::ledger::{
    self, category_expenses, seed, CashFlowTotals, InvestmentQuery, InvestmentSort, MonthlyPoint,
    RiskTier, SeriesSummary, TransactionFilter, TransactionKind,
};
use kaizen::projection::{
    monthly_rate, GoalInput, PerformanceMetrics, ProjectionConfig, ProjectionEngine,
    ProjectionInput, ProjectionResult,
};
use kaizen::KaizenConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kaizen", version, about = "Small-business finance dashboard tools")]
struct Cli {
    /// JSON configuration file; KAIZEN_* environment variables override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project a balance with monthly compounding
    Compound {
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        months: u32,
        /// Print every period instead of the trailing window
        #[arg(long)]
        all: bool,
    },
    /// Monthly contribution needed to reach a goal
    Goal {
        #[arg(long)]
        goal: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        months: u32,
    },
    /// Cash-flow totals, category spend and the monthly series
    Dashboard {
        /// CSV of transactions; the demo data when omitted
        #[arg(long)]
        transactions: Option<PathBuf>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// Browse the investment catalog
    Investments {
        #[arg(long)]
        search: Option<String>,
        /// low, medium or high
        #[arg(long)]
        risk: Option<RiskTier>,
        #[arg(long = "type")]
        kind: Option<String>,
        /// yield, min-investment or name
        #[arg(long, default_value = "yield")]
        sort: InvestmentSort,
        /// Only products whose minimum fits this amount
        #[arg(long)]
        budget: Option<f64>,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        company: String,
        /// Formatted as 00.000.000/0001-00
        #[arg(long)]
        tax_id: String,
    },
    Logout,
    /// Show the persisted session, if still valid
    Whoami,
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config =
        KaizenConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Compound {
            initial,
            monthly,
            rate,
            months,
            all,
        } => {
            let engine = if all {
                ProjectionEngine::detailed()
            } else {
                ProjectionEngine::new(ProjectionConfig::default())
            };
            let input = ProjectionInput::with_annual_percent(initial, monthly, rate, months);
            let result = engine.project(&input)?;
            print_projection(&result);
            print_metrics(&PerformanceMetrics::from_result(&result, input.monthly_rate));
        }
        Command::Goal { goal, rate, months } => {
            let engine = ProjectionEngine::new(ProjectionConfig::default());
            let result = engine.project_goal(&GoalInput::new(goal, monthly_rate(rate), months))?;
            println!("Goal: R$ {:.2} in {} months at {:.2}% a year", result.goal, months, rate);
            println!("Required monthly contribution: R$ {:.2}", result.required_contribution);
            println!();
            print_projection(&result.projection);
        }
        Command::Dashboard {
            transactions,
            search,
            category,
            kind,
        } => {
            let (transactions, demo) = match transactions {
                Some(path) => {
                    let loaded = ledger::load_transactions(&path)
                        .with_context(|| format!("Failed to load transactions from {:?}", path))?;
                    (loaded, false)
                }
                None => (seed::transactions(), true),
            };
            let filter = TransactionFilter {
                search,
                category,
                kind: kind.map(TransactionKind::from),
            };
            let selected = filter.apply(&transactions);

            println!(
                "{:>10} {:<32} {:<16} {:>12}",
                "Date", "Description", "Category", "Amount"
            );
            println!("{}", "-".repeat(73));
            for t in &selected {
                println!(
                    "{:>10} {:<32} {:<16} {:>12.2}",
                    t.date.to_string(),
                    t.description,
                    t.category,
                    t.amount
                );
            }

            let totals = CashFlowTotals::from_transactions(selected.iter().copied());
            println!("\nTotals ({} transactions):", totals.count);
            println!("  Income:  R$ {:.2}", totals.income);
            println!("  Expense: R$ {:.2}", totals.expense);
            println!("  Balance: R$ {:.2}", totals.balance);

            println!("\nSpend by category:");
            for c in category_expenses(&transactions, &seed::categories()) {
                println!("  {:<16} R$ {:>10.2}", c.name, c.total);
            }

            // The demo series covers more months than the demo transactions
            let series = if demo {
                seed::chart_data()
            } else {
                MonthlyPoint::series_from_transactions(&transactions)
            };
            print_series(&series);
        }
        Command::Investments {
            search,
            risk,
            kind,
            sort,
            budget,
        } => {
            let catalog = seed::investments();
            let query = InvestmentQuery {
                search,
                risk,
                kind,
                sort,
            };

            println!(
                "{:<28} {:<8} {:>8} {:>12} {:<8} {:<12}",
                "Name", "Type", "Yield%", "Minimum", "Risk", "Duration"
            );
            println!("{}", "-".repeat(82));
            for i in query.apply(&catalog) {
                if budget.is_some_and(|b| !i.is_affordable(b)) {
                    continue;
                }
                println!(
                    "{:<28} {:<8} {:>8.2} {:>12.2} {:<8} {:<12}",
                    i.name,
                    i.kind,
                    i.yield_pct,
                    i.min_investment,
                    format!("{:?}", i.risk),
                    i.duration
                );
            }
        }
        Command::Login { email, password } => {
            let store = session_store(&config);
            let outcome = store.login(&email, &password).await;
            report(outcome.success, &outcome.message)?;
        }
        Command::Register {
            email,
            password,
            confirm_password,
            company,
            tax_id,
        } => {
            let store = session_store(&config);
            let request = RegisterRequest {
                email,
                password,
                confirm_password,
                company_name: company,
                tax_id,
            };
            let outcome = store.register(&request).await;
            report(outcome.success, &outcome.message)?;
        }
        Command::Logout => {
            session_store(&config).logout().await;
            println!("Logged out");
        }
        Command::Whoami => match session_store(&config).restore().await {
            RestoreOutcome::Restored(user) => {
                println!("{} <{}>", user.company_name, user.email);
                println!("  Id:   {}", user.id);
                println!("  Role: {:?}", user.role);
                if let Some(tax_id) = &user.tax_id {
                    println!("  Tax ID: {}", tax_id);
                }
            }
            RestoreOutcome::NoSession => println!("Not logged in"),
            RestoreOutcome::Expired => println!("Session expired; log in again"),
            RestoreOutcome::Corrupted => {
                println!("Stored session was unreadable and has been cleared")
            }
        },
        Command::ForgotPassword { email } => {
            let outcome = session_store(&config).forgot_password(&email).await;
            report(outcome.success, &outcome.message)?;
        }
    }

    Ok(())
}

/// Seeded user store over the session file named in the configuration
fn session_store(config: &KaizenConfig) -> SessionStore<InMemoryUserRepository, JsonFileStore> {
    SessionStore::new(
        InMemoryUserRepository::seeded(),
        JsonFileStore::new(config.storage_path.clone()),
        config.clone(),
    )
}

fn report(success: bool, message: &str) -> anyhow::Result<()> {
    if !success {
        bail!("{}", message);
    }
    println!("{}", message);
    Ok(())
}

fn print_projection(result: &ProjectionResult) {
    println!("{:>6} {:>14} {:>14} {:>14}", "Month", "Invested", "Interest", "Total");
    println!("{}", "-".repeat(51));
    for s in &result.snapshots {
        println!("{:>6} {:>14.2} {:>14.2} {:>14.2}", s.period, s.invested, s.interest, s.total);
    }

    println!("\nSummary:");
    println!("  Months: {}", result.periods);
    println!("  Final amount: R$ {:.2}", result.final_amount);
    println!("  Total invested: R$ {:.2}", result.total_invested);
    println!("  Total interest: R$ {:.2}", result.total_interest);
}

fn print_metrics(metrics: &PerformanceMetrics) {
    println!("\nPerformance:");
    match metrics.total_return_pct {
        Some(pct) => println!("  Total return: {:.2}%", pct),
        None => println!("  Total return: n/a"),
    }
    match metrics.doubling_time_months {
        Some(months) => println!("  Doubling time: {:.1} months", months),
        None => println!("  Doubling time: n/a"),
    }
    if let Some(rate) = metrics.effective_annual_rate {
        println!("  Effective annual rate: {:.2}%", rate * 100.0);
    }
}

fn print_series(series: &[MonthlyPoint]) {
    println!("\n{:<8} {:>12} {:>12} {:>12}", "Month", "Income", "Expense", "Balance");
    println!("{}", "-".repeat(47));
    for p in series {
        println!("{:<8} {:>12.2} {:>12.2} {:>12.2}", p.month, p.income, p.expense, p.balance);
    }

    let summary = SeriesSummary::from_points(series);
    if let Some(rate) = summary.savings_rate_pct {
        println!("  Savings rate: {:.1}%", rate);
    }
    if let Some(avg) = summary.average_balance {
        println!("  Average balance: R$ {:.2}", avg);
    }
}
