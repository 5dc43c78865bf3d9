use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use shelfmark_client::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "shelfmark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (default: $SHELFMARK_API_BASE_URL, then the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// File holding the bearer token issued at login
    #[arg(long, global = true)]
    token_file: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Create a new library account
    ///
    /// All fields except the confirmation are required, and the
    /// confirmation must match the password. Nothing is sent to the
    /// backend until the form validates. On success, log in next.
    Register {
        /// Email address, used as the login ID
        #[arg(long, default_value = "")]
        email: String,
        /// Password
        #[arg(long, env = "SHELFMARK_PASSWORD", hide_env_values = true, default_value = "")]
        password: String,
        /// Password again
        #[arg(long, env = "SHELFMARK_PASSWORD_CONFIRM", hide_env_values = true, default_value = "")]
        password_confirm: String,
        /// Display name
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Work with catalog entries
    Book {
        #[command(subcommand)]
        action: BookAction,
    },
    /// List the genres a book can be filed under
    Genres,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum BookAction {
    /// Submit a new book
    ///
    /// Title, description and genre are required. The request carries the
    /// bearer token from --token, or from the token file when present.
    Create {
        /// Title
        #[arg(long, default_value = "")]
        title: String,
        /// Author
        #[arg(long, default_value = "")]
        author: String,
        /// Short introduction to the book
        #[arg(long, default_value = "")]
        description: String,
        /// Genre label, see `shelfmark genres`
        #[arg(long, default_value = "")]
        genre: String,
        /// Cover image URL
        #[arg(long, default_value = "")]
        cover_url: String,
        /// Bearer token, overriding the token file
        #[arg(long, env = "SHELFMARK_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print one value, or the whole config file
    Get {
        key: Option<String>,
    },
    /// Set a value in the config file
    Set {
        key: String,
        value: String,
    },
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn init_logging(config: &Config) -> Result<()> {
    let level = match config.log_level.to_ascii_lowercase().as_str() {
        "trace" => twyg::LogLevel::Trace,
        "debug" => twyg::LogLevel::Debug,
        "warn" => twyg::LogLevel::Warn,
        "error" => twyg::LogLevel::Error,
        _ => twyg::LogLevel::Info,
    };

    let opts = twyg::OptsBuilder::new()
        .coloured(config.log_coloured)
        .level(level)
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logging options: {:?}", e))?;
    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Could not set up logging: {:?}", e))?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(api_url) = cli.api_url {
        config.api_base_url = Some(api_url);
    }
    if let Some(token_file) = cli.token_file {
        config.token_path = token_file;
    }

    init_logging(&config)?;
    log::debug!("Using backend {}", config.base_url());

    match cli.command {
        Commands::Register {
            email,
            password,
            password_confirm,
            name,
        } => {
            commands::run_register(&config, email, password, password_confirm, name).await?;
        }
        Commands::Book { action } => match action {
            BookAction::Create {
                title,
                author,
                description,
                genre,
                cover_url,
                token,
            } => {
                let book = commands::book::BookInput {
                    title,
                    author,
                    description,
                    genre,
                    cover_url,
                };
                commands::run_create_book(&config, book, token).await?;
            }
        },
        Commands::Genres => commands::list_genres(),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Get { key } => commands::config::get_config(&config, key)?,
            ConfigAction::Set { key, value } => commands::config::set_config(&key, &value)?,
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
