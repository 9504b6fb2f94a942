use anyhow::Context;
use clap::Parser;

/// Connection parameters of the hosted backend project.
#[derive(clap::Parser, Debug)]
pub struct Config {
    #[clap(long, env)]
    pub supabase_url: url::Url,

    #[clap(long, env)]
    pub supabase_anon_key: String,

    /// Where the signed-in session is kept between runs.
    #[clap(long, env = "CONNECT_SESSION_FILE", default_value = ".connect-session.json")]
    pub session_file: std::path::PathBuf,
}

impl Config {
    /// Read both parameters from the environment, after loading `.env` if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::try_parse_from([env!("CARGO_PKG_NAME")])
            .context("SUPABASE_URL and SUPABASE_ANON_KEY must be set")
    }
}
