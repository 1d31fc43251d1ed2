//! podgen CLI binary entry point.

use std::sync::Arc;

use podgen::cli::{prompt, Cli};
use podgen::controller::{FormController, Lifecycle, LifecycleObserver};
use podgen::client::HttpPodcastClient;
use podgen::error::PodgenError;
use podgen::render;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(Lifecycle::Error) => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<Lifecycle, PodgenError> {
    let config = cli.resolve_config()?;

    let mut form = cli.form_state();
    if cli.form_is_blank() || !form.missing_required().is_empty() {
        if cli.no_input {
            return Err(PodgenError::InvalidArgument(format!(
                "missing required field(s): {}",
                form.missing_required().join(", ")
            )));
        }
        let mut input = std::io::stdin().lock();
        let mut output = std::io::stderr();
        prompt::fill_form(&mut form, &mut input, &mut output, cli.form_is_blank())?;
    }

    // Progress goes to stderr so stdout carries only the outcome.
    let observer: LifecycleObserver = Arc::new(|state: Lifecycle| {
        if let Some(progress) = render::render_progress(state) {
            eprintln!("{progress}");
        }
    });

    let client = HttpPodcastClient::new(config.clone())?;
    let mut controller = FormController::new(client)
        .with_form(form)
        .with_observer(observer);

    eprintln!("{}\n", render::render_form(&controller.view()));
    let state = controller.submit().await;

    if cli.json {
        let body = match controller.result() {
            Some(result) => serde_json::to_string_pretty(result)?,
            None => serde_json::to_string_pretty(&serde_json::json!({
                "error": controller.error_message(),
            }))?,
        };
        println!("{body}");
    } else if let Some(out) = render::render_outcome(&controller.view(), &config) {
        println!("{out}");
    }

    Ok(state)
}
