use dioxus::prelude::*;

mod app;
mod components;
mod config;
mod markers;
mod shared;
mod utils;

#[cfg(feature = "cli")]
mod cli;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "cli")]
    {
        use dotenvy::dotenv;
        dotenv().ok();
        cli::init_tracing();

        let mut args = std::env::args();
        let _bin = args.next();
        match cli::Command::parse(args) {
            Ok(Some(cmd)) => {
                let result = config::MapConfig::from_env()
                    .map_err(anyhow::Error::from)
                    .and_then(|cfg| cli::run_command(cmd, cfg, &mut std::io::stdout().lock()));
                if let Err(e) = result {
                    eprintln!("error: {e:#}");
                    std::process::exit(1);
                }
                return;
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("error: {e:#}");
                std::process::exit(2);
            }
        }
    }
    dioxus::launch(app::App);
}
