pub mod logging;

pub use self::logging::ARG_VERBOSITY;

use crate::cli::globals::{
    DEFAULT_API_HOST, DEFAULT_API_PORT, DEFAULT_LOGIN_PATH, DEFAULT_PING_PATH,
};
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_API_HOST: &str = "api-host";
pub const ARG_API_PORT: &str = "api-port";
pub const ARG_LOGIN_PATH: &str = "login-path";
pub const ARG_PING_PATH: &str = "ping-path";
pub const ARG_LOGIN_EMAIL: &str = "login-email";
pub const ARG_LOGIN_PASSWORD: &str = "login-password";
pub const ARG_TOKEN: &str = "token";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("keep-token-alive")
        .about("Obtain or refresh an API session token")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(format!(
            "{} ({})",
            env!("CARGO_PKG_VERSION"),
            crate::GIT_COMMIT_HASH
        ))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_API_HOST)
                .long(ARG_API_HOST)
                .alias("apiHost")
                .help("API hostname to connect to")
                .default_value(DEFAULT_API_HOST)
                .env("KEEPALIVE_API_HOST"),
        )
        .arg(
            Arg::new(ARG_API_PORT)
                .long(ARG_API_PORT)
                .alias("apiPort")
                .help("Port the API is listening on")
                .default_value(DEFAULT_API_PORT)
                .env("KEEPALIVE_API_PORT"),
        )
        .arg(
            Arg::new(ARG_LOGIN_PATH)
                .long(ARG_LOGIN_PATH)
                .alias("loginPath")
                .help("API endpoint to login to")
                .default_value(DEFAULT_LOGIN_PATH)
                .env("KEEPALIVE_LOGIN_PATH"),
        )
        .arg(
            Arg::new(ARG_PING_PATH)
                .long(ARG_PING_PATH)
                .alias("pingPath")
                .help("API endpoint to hit when refreshing the session")
                .default_value(DEFAULT_PING_PATH)
                .env("KEEPALIVE_PING_PATH"),
        )
        .arg(
            Arg::new(ARG_LOGIN_EMAIL)
                .long(ARG_LOGIN_EMAIL)
                .alias("loginEmail")
                .help("Email to login with")
                .env("KEEPALIVE_LOGIN_EMAIL"),
        )
        .arg(
            Arg::new(ARG_LOGIN_PASSWORD)
                .long(ARG_LOGIN_PASSWORD)
                .alias("loginPassword")
                .help("Password to login with")
                .env("KEEPALIVE_LOGIN_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_TOKEN)
                .long(ARG_TOKEN)
                .help("Token to keep alive, a new one is requested when omitted")
                .env("KEEPALIVE_TOKEN")
                .hide_env_values(true),
        );

    logging::with_args(command)
}
