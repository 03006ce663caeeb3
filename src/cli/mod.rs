mod balance;
mod show;
mod statement;
mod token;

use crate::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use inter_banking::{
    BankingService, CancellationToken, SecureTransport, Token, TokenAuthenticator,
};
use tracing::debug;

pub use balance::BalanceArgs;
pub use show::ShowResource;
pub use statement::StatementArgs;
pub use token::TokenArgs;

#[derive(Parser, Debug)]
#[command(name = "inter")]
#[command(about = "Query balances and statements from the Banco Inter banking API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self, cancel: &CancellationToken) -> Result<()> {
        match &self.command {
            Commands::Token(args) => args.execute(cancel).await,
            Commands::Balance(args) => args.execute(cancel).await,
            Commands::Statement(args) => args.execute(cancel).await,
            Commands::Show { resource } => resource.execute(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Obtain an access token with the client-credentials flow
    Token(TokenArgs),
    /// Show the account balance
    Balance(BalanceArgs),
    /// Show the account statement for a date range
    Statement(StatementArgs),
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}

/// Build a banking service from the config file, reusing `token` when one is given.
async fn connect(token: Option<&str>, cancel: &CancellationToken) -> Result<BankingService> {
    let config = Config::load()?;
    let certificate = config.certificate.load()?;
    let transport = SecureTransport::new(certificate, &config.client.client_config())?;

    let token = match token {
        Some(data) => Token::from_access_token(data),
        None => {
            debug!("No token given, authorizing with configured credentials");
            TokenAuthenticator::new(transport.clone())
                .authorize(
                    &config.client.client_id(),
                    &config.client.client_secret(),
                    &config.client.scopes(&[]),
                    cancel,
                )
                .await?
        }
    };

    Ok(BankingService::new(transport, token))
}

/// Lay out rows in columns separated by two spaces, like a tab writer.
///
/// Columns listed in `right_aligned` are padded on the left.
fn align_columns(rows: &[Vec<String>], right_aligned: &[usize]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, cell)| match right_aligned.contains(&i) {
                    true => format!("{:>width$}", cell, width = widths[i]),
                    false => format!("{:<width$}", cell, width = widths[i]),
                })
                .collect::<Vec<_>>()
                .join("  ");
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
