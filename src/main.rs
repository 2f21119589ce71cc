mod api;
mod app;
mod config;
mod constants;
mod filters;
mod input;
mod session;
mod ui;
mod view;

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::ApiClient;
use crate::app::App;
use crate::config::Config;
use crate::session::SessionStore;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ragdash=debug"));

    // Try to create a log file in the config directory
    let log_file = Config::config_dir()
        .ok()
        .map(|dir| dir.join("ragdash.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        // Log to file
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"ragdash - Terminal dashboard for the RAG email backend

Usage: ragdash [command]

Commands:
    (none)              Start the dashboard
    login               Sign in to the backend
    register            Create a backend account
    logout              Sign out and discard stored tokens
    chat <message>      Send a one-off chat message to the assistant
    analyze <image> <prompt>
                        Submit an image plus prompt for analysis
    help                Show this help message

Configuration file: ~/.config/ragdash/config.toml
Backend URL override: RAGDASH_API_URL environment variable
"#
    );
}

fn prompt(label: &str) -> Result<String> {
    use std::io::{self, Write};

    print!("{}: ", label);
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn prompt_password(label: &str) -> Result<String> {
    use std::io::{self, Write};

    print!("{}: ", label);
    io::stdout().flush()?;

    // Disable echo while the password is typed
    let _guard = DisableEcho::new()?;

    let mut password = String::new();
    io::stdin().read_line(&mut password)?;
    println!();
    Ok(password.trim().to_string())
}

struct DisableEcho {
    #[cfg(unix)]
    original: libc::termios,
}

impl DisableEcho {
    #[cfg(unix)]
    fn new() -> Result<Self> {
        use std::mem::MaybeUninit;
        use std::os::unix::io::AsRawFd;

        let fd = std::io::stdin().as_raw_fd();
        let mut termios = MaybeUninit::<libc::termios>::uninit();

        unsafe {
            if libc::tcgetattr(fd, termios.as_mut_ptr()) != 0 {
                anyhow::bail!("Failed to get terminal attributes");
            }
            let original = termios.assume_init();
            let mut new = original;
            new.c_lflag &= !libc::ECHO;
            if libc::tcsetattr(fd, libc::TCSANOW, &new) != 0 {
                anyhow::bail!("Failed to set terminal attributes");
            }
            Ok(Self { original })
        }
    }

    #[cfg(not(unix))]
    fn new() -> Result<Self> {
        Ok(Self {})
    }
}

#[cfg(unix)]
impl Drop for DisableEcho {
    fn drop(&mut self) {
        use std::os::unix::io::AsRawFd;
        let fd = std::io::stdin().as_raw_fd();
        unsafe {
            libc::tcsetattr(fd, libc::TCSANOW, &self.original);
        }
    }
}

fn open_session(config: &Config) -> Result<SessionStore> {
    config.ensure_dirs()?;
    SessionStore::open(Config::data_dir()?)
}

async fn run_login(config: Config) -> Result<()> {
    let client = ApiClient::new(&config);
    let mut session = open_session(&config)?;

    let username = prompt("Username")?;
    let password = prompt_password("Password")?;

    client.sign_in(&mut session, &username, &password).await?;

    match client.current_user(&session) {
        Some(user) => println!("Signed in as {}", user.email),
        None => println!("Signed in."),
    }
    Ok(())
}

async fn run_register(config: Config) -> Result<()> {
    let client = ApiClient::new(&config);
    let mut session = open_session(&config)?;

    let first_name = prompt("First name")?;
    let last_name = prompt("Last name")?;
    let email = prompt("Email address")?;
    let password = prompt_password("Password")?;

    client
        .sign_up(&mut session, &first_name, &last_name, &email, &password)
        .await?;

    if session.is_signed_in() {
        println!("Account created and signed in.");
    } else {
        println!("Account created. Run 'ragdash login' to sign in.");
    }
    Ok(())
}

async fn run_logout(config: Config) -> Result<()> {
    let client = ApiClient::new(&config);
    let mut session = open_session(&config)?;

    if !session.is_signed_in() {
        println!("Not signed in.");
        return Ok(());
    }

    client.sign_out(&mut session).await?;
    println!("Signed out.");
    Ok(())
}

async fn run_chat(config: Config, message: &str) -> Result<()> {
    let client = ApiClient::new(&config);
    let reply = client.chat(message).await?;
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

async fn run_analyze(config: Config, image: PathBuf, prompt: &str) -> Result<()> {
    let client = ApiClient::new(&config);
    let result = client.analyze_image(&image, prompt).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("login") => run_login(Config::load()?).await,
        Some("register") => run_register(Config::load()?).await,
        Some("logout") => run_logout(Config::load()?).await,
        Some("chat") => match args.get(2) {
            Some(message) => run_chat(Config::load()?, message).await,
            None => {
                eprintln!("Usage: ragdash chat <message>");
                std::process::exit(1);
            }
        },
        Some("analyze") => match (args.get(2), args.get(3)) {
            (Some(image), Some(prompt)) => {
                run_analyze(Config::load()?, PathBuf::from(image), prompt).await
            }
            _ => {
                eprintln!("Usage: ragdash analyze <image> <prompt>");
                std::process::exit(1);
            }
        },
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            setup_logging();

            let config = Config::load()?;
            config.ensure_dirs()?;

            let session = SessionStore::open(Config::data_dir()?)?;

            let mut app = App::new(config, session);
            app.run().await
        }
    }
}
