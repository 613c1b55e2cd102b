use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "relay-hub",
    version,
    about = "IoT hub that registers relay devices and serves their control dashboard",
    long_about = "Central hub for WiFi relay boards: devices POST their state to \
/device/register and the bundled dashboard shows every known device."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the hub API and dashboard server
    Run {
        /// Port to bind the web server to (80 needs elevated rights)
        #[arg(short, long, default_value = "80")]
        port: u16,
        /// Host to bind the web server to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
}
