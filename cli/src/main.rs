//! CLI entrypoint for the follow-up dashboard tools
//!
//! Thin I/O wrapper: parses arguments, loads pricing, and hands plain values
//! to the core library.

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use followup_core_rs::costs::{estimate_usage, format_usd, meter_call, metered_total};
use followup_core_rs::models::Conversation;
use followup_core_rs::questions;
use followup_core_rs::{
    aggregate, CallCost, CallDuration, PhoneNumber, PricingRates, QuestionList,
};
use serde::Serialize;
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::{Cli, Command, OutputFormat};
use config::ConfigLoader;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let pricing = load_pricing(&cli)?;

    match cli.command {
        Command::Encode { questions } => encode(&questions, cli.output),
        Command::Decode { text } => decode(text, cli.output),
        Command::Cost {
            stt,
            llm,
            tts,
            duration,
        } => cost(CallCost::new(stt, llm, tts, duration), &pricing, cli.output),
        Command::Usage { file, duration } => usage(file, duration, &pricing, cli.output),
        Command::Phone { number } => phone(&number, cli.output),
        Command::Pricing => print(&pricing, cli.output, || format_pricing(&pricing)),
    }
}

fn load_pricing(cli: &Cli) -> Result<PricingRates> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| *e)
            .context("Failed to load configuration")?
    };

    config
        .pricing
        .validate()
        .context("Invalid pricing configuration")?;

    debug!(pricing = ?config.pricing, "Loaded pricing");
    Ok(config.pricing)
}

fn encode(raw: &[String], output: OutputFormat) -> Result<()> {
    let list = QuestionList::non_empty(raw).context("Cannot encode questions")?;
    let encoded = list.encode();
    info!(count = list.len(), "Encoded questions");

    print(&json!({ "custom_questions": encoded }), output, || encoded.clone())
}

fn decode(text: Option<String>, output: OutputFormat) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_input(None)?,
    };
    let decoded = questions::decode(&text);
    info!(count = decoded.len(), "Decoded questions");

    print(&decoded, output, || {
        decoded
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{:>2}. {}", i + 1, q))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn cost(call: CallCost, pricing: &PricingRates, output: OutputFormat) -> Result<()> {
    let breakdown = aggregate(&call, pricing.telephony_per_minute);

    print(&breakdown, output, || {
        format!(
            "{}\nDuration: {} ({}s)",
            breakdown,
            call.duration(),
            call.duration_seconds
        )
    })
}

fn usage(
    file: Option<PathBuf>,
    duration: Option<u64>,
    pricing: &PricingRates,
    output: OutputFormat,
) -> Result<()> {
    let raw = read_input(file.as_deref())?;
    let conversation: Conversation =
        serde_json::from_str(&raw).context("Transcript is not valid conversation JSON")?;

    let duration = match duration {
        Some(seconds) => CallDuration::from_seconds(seconds),
        None => CallDuration::estimate_from_turns(conversation.conversation.len()),
    };

    let usage = estimate_usage(&conversation.conversation);
    let call = meter_call(&usage, duration, pricing);
    let total = metered_total(&usage, duration, pricing);
    let breakdown = aggregate(&call, pricing.telephony_per_minute);

    let report = json!({
        "duration_seconds": duration.seconds(),
        "usage": usage,
        "costs": call,
        "metered_total": total,
        "breakdown": breakdown,
    });

    print(&report, output, || {
        format!(
            "Turns: {}  Duration: {}\n\
             LLM input tokens: {}  LLM output tokens: {}  TTS characters: {}\n\n\
             {}\n\nStored call cost: {}",
            conversation.conversation.len(),
            duration,
            usage.llm_input_tokens,
            usage.llm_output_tokens,
            usage.tts_characters,
            breakdown,
            format_usd(total)
        )
    })
}

fn phone(number: &str, output: OutputFormat) -> Result<()> {
    let phone = PhoneNumber::parse(number)?;
    print(
        &json!({ "phone": phone, "national_number": phone.national_number() }),
        output,
        || format!("{} is valid", phone),
    )
}

fn format_pricing(pricing: &PricingRates) -> String {
    format!(
        "Speech-to-Text   {} per minute\n\
         AI Model         {} per 1M input tokens, {} per 1M output tokens\n\
         Text-to-Speech   {} per 1K characters\n\
         Telephony        {} per minute",
        format_usd(pricing.stt_per_minute),
        format_usd(pricing.llm_input_per_million_tokens),
        format_usd(pricing.llm_output_per_million_tokens),
        format_usd(pricing.tts_per_thousand_chars),
        format_usd(pricing.telephony_per_minute),
    )
}

/// Read a file, or stdin when no path is given
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print<T, F>(value: &T, output: OutputFormat, text: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{}", text()),
    }
    Ok(())
}
