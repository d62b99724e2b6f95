//! Load transactions from CSV (`id,amount,description,date,category,type`)

use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;

use super::transactions::{Transaction, TransactionKind};
use crate::error::{Error, Result};

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    amount: f64,
    description: String,
    date: String,
    category: String,
    #[serde(rename = "type")]
    kind: String,
}

impl CsvRow {
    fn into_transaction(self) -> Result<Transaction> {
        let kind = match self.kind.trim().to_lowercase().as_str() {
            "income" => TransactionKind::Income,
            "expense" => TransactionKind::Expense,
            other => {
                return Err(Error::invalid(
                    "type",
                    format!("unknown transaction type {:?} for id {}", other, self.id),
                ))
            }
        };

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|e| {
            Error::invalid("date", format!("{:?} for id {}: {}", self.date, self.id, e))
        })?;

        if !self.amount.is_finite() {
            return Err(Error::invalid("amount", format!("not finite for id {}", self.id)));
        }

        Ok(Transaction::new(self.id, self.amount, self.description, date, self.category, kind))
    }
}

/// Load all transactions from a CSV file
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let transactions = load_transactions_from_reader(std::fs::File::open(path)?)?;
    log::info!("Loaded {} transactions from {:?}", transactions.len(), path);
    Ok(transactions)
}

/// Load transactions from any reader (e.g., string buffer, stdin)
pub fn load_transactions_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut transactions = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        transactions.push(row.into_transaction()?);
    }

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
id,amount,description,date,category,type
1,5000,Salário Mensal,2024-01-15,Trabalho,income
2,1200,Aluguel,2024-01-05,Casa,expense
3,-350.5,Supermercado,2024-01-10,Alimentação,Expense
";

    #[test]
    fn test_load_from_reader() {
        let transactions = load_transactions_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].amount, 5000.0);
        // Expense sign is normalised whatever the file says
        assert_eq!(transactions[1].amount, -1200.0);
        assert_eq!(transactions[2].amount, -350.5);
        assert_eq!(transactions[2].kind, TransactionKind::Expense);
        assert_eq!(transactions[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let transactions = load_transactions(file.path()).unwrap();
        assert_eq!(transactions.len(), 3);
    }

    #[test]
    fn test_rejects_unknown_type_and_bad_date() {
        let bad_type =
            "id,amount,description,date,category,type\n1,10,X,2024-01-01,Casa,transfer\n";
        assert!(matches!(
            load_transactions_from_reader(bad_type.as_bytes()),
            Err(Error::InvalidInput { field: "type", .. })
        ));

        let bad_date = "id,amount,description,date,category,type\n1,10,X,01/01/2024,Casa,income\n";
        assert!(matches!(
            load_transactions_from_reader(bad_date.as_bytes()),
            Err(Error::InvalidInput { field: "date", .. })
        ));

        let bad_amount =
            "id,amount,description,date,category,type\n1,ten,X,2024-01-01,Casa,income\n";
        assert!(matches!(
            load_transactions_from_reader(bad_amount.as_bytes()),
            Err(Error::Csv(_))
        ));
    }
}
