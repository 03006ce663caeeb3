use super::{align_columns, connect};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use inter_banking::{BankingOperations, CancellationToken, Transaction};

const CSV_HEADERS: [&str; 6] = ["Date", "Type", "Operation", "Value", "Title", "Description"];

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatementFormat {
    #[default]
    Table,
    Csv,
}

#[derive(Args, Debug)]
pub struct StatementArgs {
    /// First day of the statement (YYYY-MM-DD)
    #[arg(short, long = "start-date")]
    pub start: NaiveDate,

    /// Last day of the statement (YYYY-MM-DD), today when omitted
    #[arg(short, long = "end-date")]
    pub end: Option<NaiveDate>,

    #[arg(short = 'f', long, value_enum, default_value_t = StatementFormat::Table)]
    pub format: StatementFormat,

    /// Previously issued access token; the configured credentials are used otherwise
    #[arg(short, long)]
    pub token: Option<String>,
}

impl StatementArgs {
    pub async fn execute(&self, cancel: &CancellationToken) -> Result<()> {
        let banking = connect(self.token.as_deref(), cancel).await?;
        let end = self.end.unwrap_or_else(|| Local::now().date_naive());

        let output = show_statement(&banking, self.start, end, self.format, cancel).await?;
        println!("{}", output);

        Ok(())
    }
}

async fn show_statement<B>(
    banking: &B,
    start: NaiveDate,
    end: NaiveDate,
    format: StatementFormat,
    cancel: &CancellationToken,
) -> Result<String>
where
    B: BankingOperations + Sync,
{
    let transactions = banking.transactions(start, end, cancel).await?;

    match format {
        StatementFormat::Table => Ok(render_table(&transactions, start, end)),
        StatementFormat::Csv => render_csv(&transactions),
    }
}

fn render_table(transactions: &[Transaction], start: NaiveDate, end: NaiveDate) -> String {
    let mut rows = vec![
        ["Date", "Value", "Operation", "Type", "Title", "Description"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>(),
    ];

    rows.extend(transactions.iter().map(|t| {
        vec![
            t.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", t.value),
            t.operation.to_string(),
            t.type_.to_string(),
            t.title.clone(),
            t.description.clone(),
        ]
    }));

    format!(
        "Statements from {} to {}\n\n{}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
        align_columns(&rows, &[1])
    )
}

fn render_csv(transactions: &[Transaction]) -> Result<String> {
    // Headers are written by hand so that an empty statement still gets them.
    // https://github.com/BurntSushi/rust-csv/issues/161
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);

    writer.write_record(CSV_HEADERS)?;
    for t in transactions {
        writer.serialize(t)?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to get CSV data: {}", e))?;
    let data = String::from_utf8(buffer)?;

    Ok(data.trim_end().to_string())
}
