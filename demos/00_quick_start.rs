/// quick start - minimal example to get started
use bank_ledger_rs::chrono::NaiveDate;
use bank_ledger_rs::{Bank, Money, Rate, TxnKind};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bank = Bank::new();

    let june_1 = NaiveDate::from_ymd_opt(2023, 6, 1).ok_or("bad date")?;
    let june_26 = NaiveDate::from_ymd_opt(2023, 6, 26).ok_or("bad date")?;

    // open an account with a deposit, then withdraw later in the month
    bank.process_transaction(june_1, "AC001", TxnKind::Deposit, Money::from_major(100))?;
    bank.process_transaction(june_26, "AC001", TxnKind::Withdrawal, Money::from_major(20))?;

    // 1.95% p.a. effective from the start of june
    bank.set_rule(june_1, "RULE01", Rate::from_percentage(dec!(1.95)))?;

    let june_30 = NaiveDate::from_ymd_opt(2023, 6, 30).ok_or("bad date")?;
    let accrual = bank.accrue("AC001", june_1, june_30)?;

    println!("balance:  {}", bank.balance("AC001")?);
    println!("interest: {}", accrual.interest);
    for period in &accrual.periods {
        println!(
            "  {} .. {} ({} days) at {} on {}",
            period.start, period.end, period.days, period.rate, period.balance
        );
    }

    Ok(())
}
