use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::{config::load_settings, FormState, HttpGenerationClient, Settings};
use shared::{
    domain::{pricing_plans, PricingPlan},
    i18n,
};

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the generation service, e.g. http://127.0.0.1:3000
    #[arg(long, global = true)]
    api_base_url: Option<String>,
    /// Message language: `id` or `en`
    #[arg(long, global = true)]
    language: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send an idea to the generation service and print the JSON result
    Generate {
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },
    /// Print the pricing tiers
    Pricing,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = &args.api_base_url {
        settings.set_api_base_url(url);
    }
    if let Some(language) = &args.language {
        settings.set_language(language);
    }

    match args.command {
        Command::Generate { prompt } => generate(&settings, &prompt.join(" ")).await,
        Command::Pricing => {
            for plan in pricing_plans() {
                print!("{}", format_plan(plan, settings.language));
            }
            Ok(())
        }
    }
}

async fn generate(settings: &Settings, prompt: &str) -> Result<()> {
    let client = HttpGenerationClient::new(&settings.api_base_url);
    let mut form = FormState::new();
    form.edit_input(prompt);
    if !form.submit(&client, i18n::generation_failed(settings.language)).await {
        bail!("nothing to generate: prompt is blank");
    }
    if !form.error.is_empty() {
        bail!("{}", form.error);
    }
    if let Some(text) = form.copy_text() {
        println!("{text}");
    }
    Ok(())
}

fn format_plan(plan: &PricingPlan, language: i18n::Language) -> String {
    let mut out = format!("{}: {}", plan.name, plan.price);
    if plan.popular {
        out.push_str(&format!(" [{}]", i18n::popular_badge(language)));
    }
    out.push('\n');
    out.push_str(&format!("  {}\n", plan.description));
    for feature in plan.features {
        out.push_str(&format!("  - {feature}\n"));
    }
    out.push('\n');
    out
}
