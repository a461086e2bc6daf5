//! Command-line interface for poking the service by hand.

use clap::{Parser, Subcommand};
use console::style;

use crate::api::ApiClient;
use crate::config::{
    HarnessConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TIMEOUT_ENV,
};
use crate::error::Result;
use crate::models::{Credentials, NewQuestion, NewUser};
use crate::response::ResponseSnapshot;

/// kbase-probe - send single requests to a knowledge-base service.
#[derive(Parser)]
#[command(name = "kbase-probe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the service
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = TIMEOUT_ENV, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with a username and password.
    Login { username: String, password: String },

    /// Sign up a new user.
    Signup {
        username: String,
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
    },

    /// Fetch a user by username.
    User { username: String },

    /// Fetch an organization by name.
    Organization { name: String },

    /// Fetch a question by id.
    Question { id: u64 },

    /// Submit a public question.
    Ask {
        author: i64,
        title: String,
        content: String,
    },
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = HarnessConfig::new(cli.base_url)
        .with_timeout_secs(cli.timeout)
        .validated()?;
    let api = ApiClient::new(config)?;

    match cli.command {
        Commands::Login { username, password } => {
            let response = api.login(&Credentials { username, password }).await?;
            print_response(&response);
        }
        Commands::Signup {
            username,
            password,
            first_name,
            last_name,
        } => {
            let status = api
                .create_user(&NewUser {
                    username,
                    password,
                    first_name,
                    last_name,
                })
                .await?;
            print_status(status);
        }
        Commands::User { username } => print_status(api.fetch_user(&username).await?),
        Commands::Organization { name } => print_status(api.fetch_organization(&name).await?),
        Commands::Question { id } => print_response(&api.fetch_question(id).await?),
        Commands::Ask {
            author,
            title,
            content,
        } => {
            let response = api
                .submit_question(&NewQuestion {
                    author,
                    title,
                    content,
                })
                .await?;
            print_response(&response);
        }
    }

    Ok(())
}

fn print_status(status: u16) {
    let styled = if (200..300).contains(&status) {
        style(status).green().bold()
    } else {
        style(status).red().bold()
    };
    println!("{} {}", style("Status:").bold(), styled);
}

fn print_response(response: &ResponseSnapshot) {
    print_status(response.status());
    for value in response.header_values("set-cookie") {
        println!("{} {}", style("Set-Cookie:").bold(), style(value).cyan());
    }
    let body = response.text();
    if !body.is_empty() {
        println!("{} {}", style("Body:").bold(), body);
    }
}
