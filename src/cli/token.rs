use crate::config::Config;
use anyhow::Result;
use chrono::SecondsFormat;
use clap::{Args, ValueEnum};
use inter_banking::{CancellationToken, SecureTransport, Token, TokenAuthenticator};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenFormat {
    /// Only the bearer string
    #[default]
    Token,
    /// Token, type, expiry and scopes
    Info,
    Json,
}

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Scope to request; repeat for several. Defaults to the configured scopes
    #[arg(short, long = "scope")]
    pub scopes: Vec<String>,

    #[arg(short = 'f', long, value_enum, default_value_t = TokenFormat::Token)]
    pub format: TokenFormat,
}

impl TokenArgs {
    pub async fn execute(&self, cancel: &CancellationToken) -> Result<()> {
        let config = Config::load()?;
        let certificate = config.certificate.load()?;
        let transport = SecureTransport::new(certificate, &config.client.client_config())?;

        let token = TokenAuthenticator::new(transport)
            .authorize(
                &config.client.client_id(),
                &config.client.client_secret(),
                &config.client.scopes(&self.scopes),
                cancel,
            )
            .await?;

        println!("{}", render_token(&token, self.format)?);

        Ok(())
    }
}

fn render_token(token: &Token, format: TokenFormat) -> Result<String> {
    let output = match format {
        TokenFormat::Token => token.data.clone(),
        TokenFormat::Info => format!(
            "token     {}\ntype      {}\nexpires   {}\nscopes    {}",
            token.data,
            token.token_type,
            token.expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            token.scopes.join(" ")
        ),
        TokenFormat::Json => serde_json::to_string_pretty(token)?,
    };

    Ok(output)
}
