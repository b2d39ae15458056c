use std::{fs, net::Ipv6Addr, path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{config::load_settings, AssessmentApi, AssessmentClient, ClientSettings};
use controller::{
    route::{results_location, QUESTIONNAIRE_PAGE},
    FormState, PageFlow, QuestionnaireState, ResultsState, SubmitOutcome,
};
use serde_json::Value;
use shared::domain::AssessmentId;
use tracing::info;
use url::Url;
use views::{HtmlRenderer, Node, RenderBackend, TextRenderer};

#[derive(Parser, Debug)]
#[command(name = "wayfinder", about = "Career assessment questionnaire client")]
struct Args {
    /// Assessment service base URL; takes precedence over every other source.
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Host the pages are served from, used to pick the development service.
    #[arg(long, global = true)]
    page_host: Option<String>,
    #[arg(long, global = true, value_enum, default_value_t = Format::Html)]
    format: Format,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query the service health endpoint.
    Health,
    /// Render the questionnaire page.
    Questionnaire {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Submit answers from a JSON object of field name to value.
    Submit {
        #[arg(long)]
        answers: PathBuf,
    },
    /// Render the results page for an assessment.
    Results {
        #[arg(long)]
        assessment_id: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Text,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings()
        .with_override(args.api_url)
        .with_page_host(args.page_host);
    let client = AssessmentClient::from_settings(&settings)?;
    info!(base_url = %client.base_url(), "using assessment service");
    let api: Arc<dyn AssessmentApi> = Arc::new(client);
    let pages = page_root(&settings)?;

    match args.command {
        Command::Health => {
            let status = api.check_health().await.context("health check failed")?;
            println!("{}", serde_json::to_string_pretty(&status)?);
            if !status.is_healthy() {
                bail!("service reported an unhealthy status");
            }
        }
        Command::Questionnaire { out } => {
            let location = pages.join(QUESTIONNAIRE_PAGE)?;
            let PageFlow::Questionnaire(flow) = controller::init(api, &location).await else {
                bail!("{location} is not the questionnaire page");
            };
            let page = render(args.format, "Questionnaire", flow.document().tree());
            write_output(out.as_ref(), &page)?;
            if *flow.state() == QuestionnaireState::LoadFailed {
                bail!("questionnaire could not be loaded");
            }
        }
        Command::Submit { answers } => {
            let raw = fs::read_to_string(&answers)
                .with_context(|| format!("reading answers from {}", answers.display()))?;
            let form = form_from_json(&raw)
                .with_context(|| format!("parsing answers in {}", answers.display()))?;

            let location = pages.join(QUESTIONNAIRE_PAGE)?;
            let PageFlow::Questionnaire(mut flow) = controller::init(api, &location).await else {
                bail!("{location} is not the questionnaire page");
            };
            if *flow.state() == QuestionnaireState::LoadFailed {
                bail!("questionnaire could not be loaded");
            }
            match flow.submit(&form).await {
                SubmitOutcome::Redirect(target) => println!("{}", pages.join(&target)?),
                SubmitOutcome::Blocked(missing) => {
                    bail!("unanswered required questions: {}", missing.join(", "))
                }
                SubmitOutcome::Failed(detail) => bail!("submission failed: {detail}"),
                SubmitOutcome::NotReady => bail!("questionnaire is not ready for submission"),
            }
        }
        Command::Results { assessment_id, out } => {
            let assessment_id = AssessmentId::parse(&assessment_id)?;
            let location = pages.join(&results_location(&assessment_id))?;
            let PageFlow::Results(flow) = controller::init(api, &location).await else {
                bail!("{location} is not a results page");
            };
            let page = render(args.format, "Your Results", flow.document().tree());
            write_output(out.as_ref(), &page)?;
            if flow.state() == ResultsState::Failed {
                bail!("results for {assessment_id} could not be loaded");
            }
        }
    }

    Ok(())
}

/// Directory the pages are addressed under. Only the host matters to the flows.
fn page_root(settings: &ClientSettings) -> Result<Url> {
    let host = settings.page_host.as_deref().map(str::trim).unwrap_or("localhost");
    let authority = match host.parse::<Ipv6Addr>() {
        Ok(_) => format!("[{host}]"),
        Err(_) => host.to_string(),
    };
    Url::parse(&format!("http://{authority}/"))
        .with_context(|| format!("invalid page host '{host}'"))
}

fn render(format: Format, title: &str, body: Node) -> String {
    match format {
        Format::Html => HtmlRenderer.document(title, &[body]),
        Format::Text => TextRenderer.render_node(&body) + "\n",
    }
}

fn write_output(out: Option<&PathBuf>, page: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, page).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "page written");
        }
        None => print!("{page}"),
    }
    Ok(())
}

/// Answers file: a JSON object of field name to value. Numbers and booleans
/// are taken as their text; null leaves the field unset.
fn form_from_json(raw: &str) -> Result<FormState> {
    let Value::Object(entries) = serde_json::from_str::<Value>(raw)? else {
        bail!("answers must be a JSON object");
    };
    let mut form = FormState::new();
    for (field, value) in entries {
        match value {
            Value::Null => {}
            Value::String(text) => form.set(field, text),
            Value::Number(_) | Value::Bool(_) => form.set(field, value.to_string()),
            other => bail!("answer for '{field}' must be text, got {other}"),
        }
    }
    Ok(form)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
