use super::{align_columns, connect};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use inter_banking::{Balance, BankingOperations, CancellationToken};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BalanceFormat {
    /// Available amount only
    #[default]
    Short,
    /// Every balance component
    Full,
}

#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// Balance date (YYYY-MM-DD), today when omitted
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    #[arg(short = 'f', long, value_enum, default_value_t = BalanceFormat::Short)]
    pub format: BalanceFormat,

    /// Previously issued access token; the configured credentials are used otherwise
    #[arg(short, long)]
    pub token: Option<String>,
}

impl BalanceArgs {
    pub async fn execute(&self, cancel: &CancellationToken) -> Result<()> {
        let banking = connect(self.token.as_deref(), cancel).await?;
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());

        println!("{}", show_balance(&banking, date, self.format, cancel).await?);

        Ok(())
    }
}

async fn show_balance<B>(
    banking: &B,
    date: NaiveDate,
    format: BalanceFormat,
    cancel: &CancellationToken,
) -> Result<String>
where
    B: BankingOperations + Sync,
{
    let balance = banking.balance(date, cancel).await?;

    Ok(match format {
        BalanceFormat::Short => format!("{:.2}", balance.available),
        BalanceFormat::Full => render_full(&balance, date),
    })
}

fn render_full(balance: &Balance, date: NaiveDate) -> String {
    let rows: Vec<Vec<String>> = [
        ("Available", balance.available),
        ("Limit", balance.limit),
        ("On hold", balance.check_on_hold),
        ("Judicially blocked", balance.judicially_blocked),
        ("Administratively blocked", balance.administratively_blocked),
    ]
    .into_iter()
    .map(|(label, amount)| vec![label.to_string(), format!("{:.2}", amount)])
    .collect();

    format!(
        "Balances at {}\n\n{}",
        date.format("%Y-%m-%d"),
        align_columns(&rows, &[1])
    )
}
