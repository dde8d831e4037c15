use clap::{Parser, ValueEnum};
use hashgate_gateway::telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "HASHGATE_LISTEN_ADDR";
pub const POLICY_ENV: &str = "HASHGATE_POLICY";
pub const STATIC_DIR_ENV: &str = "HASHGATE_STATIC_DIR";
pub const LOG_FORMAT_ENV: &str = "HASHGATE_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Random salt per input, memoized for the life of the process.
    #[value(name = "salted")]
    Salted,
    /// Unsalted SHA-256 prefix; identical across restarts.
    #[value(name = "content")]
    Content,
}

impl Display for PolicyArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyArg::Salted => write!(f, "salted"),
            PolicyArg::Content => write!(f, "content"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hashgate-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = POLICY_ENV,
        value_enum,
        default_value_t = PolicyArg::Salted
    )]
    pub policy: PolicyArg,

    /// Directory served for paths that match no API route.
    #[arg(long, env = STATIC_DIR_ENV)]
    pub static_dir: Option<PathBuf>,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}
