use crate::{
    conf::settings,
    pkg::{internal::auth::issue_token, server::listen},
    prelude::Result,
};
use clap::{Parser, Subcommand};

mod migrate;

#[derive(Parser)]
#[command(about = "serves the jobly jobs api")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen,
    Migrate,
    /// Prints a bearer token signed with SECRET_KEY
    Token {
        #[arg(long)]
        username: String,
        #[arg(long)]
        admin: bool,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Migrate) => {
            migrate::apply().await?;
        }
        Some(SubCommandType::Token { username, admin }) => {
            println!("{}", issue_token(&username, admin, &settings.secret_key)?);
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
