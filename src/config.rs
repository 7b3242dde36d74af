use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::fmt;

/// Copy the mapping of today's index into tomorrow's index.
///
/// Not idempotent and not safe to run from more than one host at a time;
/// schedule it once per day on a single node (or use `--only-master`).
#[derive(Debug, Clone, Parser)]
#[command(name = "copy-index-mapping", version)]
pub struct Config {
    /// Elasticsearch hostname
    #[arg(short = 'H', long, default_value = "localhost")]
    pub host: String,

    /// Elasticsearch port
    #[arg(short, long, default_value_t = 9200)]
    pub port: u16,

    /// Scheme to use for connection
    #[arg(short, long, value_enum, default_value_t = Scheme::Http)]
    pub scheme: Scheme,

    /// Index prefix
    #[arg(short, long, default_value = "logstash")]
    pub index_prefix: String,

    /// Mapping type
    #[arg(short = 't', long, default_value = "log")]
    pub mapping_type: String,

    /// Only run on the cluster master
    #[arg(short, long)]
    pub only_master: bool,

    /// Treat this day (YYYY-MM-DD) as today instead of the local date
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    Http,
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => f.write_str("http"),
            Scheme::Https => f.write_str("https"),
        }
    }
}

impl Config {
    /// `scheme://host:port`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}
