use clap::Parser;
use tracing_subscriber::EnvFilter;

pub const APP_TITLE: &str = "PNG Curator";

#[derive(Parser, Debug)]
#[command(
    name = "png-curator",
    about = "Drop PNG files onto the window to list their text metadata"
)]
pub struct StartupArgs {
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_filter: String,
    #[arg(long, default_value_t = 760.0)]
    pub width: f32,
    #[arg(long, default_value_t = 640.0)]
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub log_filter: String,
    pub window_size: [f32; 2],
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            window_size: [760.0, 640.0],
        }
    }
}

impl From<StartupArgs> for StartupConfig {
    fn from(args: StartupArgs) -> Self {
        let defaults = Self::default();
        let log_filter = if args.log_filter.trim().is_empty() {
            defaults.log_filter
        } else {
            args.log_filter
        };
        let window_size = if args.width > 0.0 && args.height > 0.0 {
            [args.width, args.height]
        } else {
            defaults.window_size
        };
        Self {
            log_filter,
            window_size,
        }
    }
}

pub fn init_tracing(fallback_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
