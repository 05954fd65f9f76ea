/// monthly statement - transactions plus the closing interest line, as json
use bank_ledger_rs::chrono::NaiveDate;
use bank_ledger_rs::{Bank, Money, Rate, TxnKind};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| "bad date".into())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bank = Bank::new();

    bank.process_transaction(date(2023, 5, 5)?, "AC001", TxnKind::Deposit, Money::from_major(100))?;
    bank.process_transaction(date(2023, 6, 1)?, "AC001", TxnKind::Deposit, Money::from_major(150))?;
    bank.process_transaction(date(2023, 6, 26)?, "AC001", TxnKind::Withdrawal, Money::from_major(20))?;
    bank.process_transaction(date(2023, 6, 26)?, "AC001", TxnKind::Withdrawal, Money::from_major(100))?;

    bank.set_rule(date(2023, 1, 1)?, "RULE01", Rate::from_percentage(dec!(1.95)))?;
    bank.set_rule(date(2023, 5, 20)?, "RULE02", Rate::from_percentage(dec!(1.90)))?;
    bank.set_rule(date(2023, 6, 15)?, "RULE03", Rate::from_percentage(dec!(2.20)))?;

    let statement = bank.monthly_statement("AC001", 2023, 6)?;
    println!("{}", statement.json());

    Ok(())
}
