use clap::Parser;

use taskboard::config::Config;

#[derive(Parser)]
#[command(name = "taskboard", about = "Task tracking web service")]
pub struct Cli {
    /// Path to the SQLite database [default: database.db]
    #[arg(long)]
    pub db: Option<String>,

    /// Address to listen on [default: 127.0.0.1:5000]
    #[arg(long)]
    pub bind: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            db_path: self.db.unwrap_or(defaults.db_path),
            bind: self.bind.unwrap_or(defaults.bind),
            debug: self.debug,
        }
    }
}
