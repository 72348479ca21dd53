use anyhow::Result;
use cafe_like::{
    ClickEvent, Config, Control, EntityId, HttpLikeApi, LikeToggleController, PageControls,
};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Command {
    /// Only fetch the current status
    Status,
    Like,
    Unlike,
}

#[derive(Parser, Debug)]
struct Args {
    /// Id of the cafe to toggle. Numbers are sent as JSON numbers, anything else as a string.
    #[arg(long)]
    cafe_id: EntityId,

    #[arg(value_enum, default_value = "status")]
    command: Command,
}

fn render(page: &PageControls) {
    for control in Control::ALL {
        let state = page.control(control);
        let label = match control {
            Control::Like => "Like",
            Control::Unlike => "Unlike",
        };
        if state.visible {
            println!("[ {label} ]");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::load_env_config()?;
    let api = HttpLikeApi::new(&config);
    info!("Using like API at {}", api.base_url());

    let controller = LikeToggleController::bind(api, PageControls::new(args.cafe_id));

    // Failures are already logged; the controls just stay as they were.
    let _ = controller.fetch_status().await;

    let mut click = ClickEvent::default();
    let outcome = match args.command {
        Command::Status => None,
        Command::Like => Some(controller.like(&mut click).await),
        Command::Unlike => Some(controller.unlike(&mut click).await),
    };
    if let Some(Err(err)) = &outcome {
        if err.is_request_failure() {
            println!("Request failed, controls left unchanged");
        }
    }

    render(&controller.into_view());
    Ok(())
}
