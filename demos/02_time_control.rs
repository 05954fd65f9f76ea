/// time control - drive an "as of today" statement with a test clock
use bank_ledger_rs::chrono::{Duration, NaiveDate, TimeZone, Utc};
use bank_ledger_rs::{Bank, Money, Rate, SafeTimeProvider, TimeSource, TxnKind};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bank = Bank::new();

    let june_1 = NaiveDate::from_ymd_opt(2023, 6, 1).ok_or("bad date")?;
    bank.process_transaction(june_1, "AC001", TxnKind::Deposit, Money::from_major(100))?;
    bank.set_rule(june_1, "RULE01", Rate::from_percentage(dec!(1.95)))?;

    // start the clock at the end of june
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2023, 6, 30, 9, 0, 0)
            .single()
            .ok_or("bad clock start")?,
    ));

    let statement = bank.account_statement("AC001", &time)?;
    println!("as of {}: interest {}, final balance {}",
        statement.as_of, statement.interest_earned, statement.final_balance);

    // three months later the same query accrues a longer window
    let control = time.test_control().ok_or("test clock expected")?;
    control.advance(Duration::days(92));

    let statement = bank.account_statement("AC001", &time)?;
    println!("as of {}: interest {}, final balance {}",
        statement.as_of, statement.interest_earned, statement.final_balance);

    Ok(())
}
