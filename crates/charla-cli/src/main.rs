use anyhow::{Context, Result};
use charla_config::Config;
use charla_engine::{Message, render_page};
use std::io::Read;
use std::{env, fs, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <transcript.json|-> [output.html]", args[0]);
        eprintln!("Reads a JSON transcript (array of messages) and writes an HTML page.");
        eprintln!("Use '-' to read the transcript from stdin; omit the output to write to stdout.");
        process::exit(1);
    }

    let input = &args[1];
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read transcript from stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read transcript '{input}'"))?
    };

    let messages: Vec<Message> = serde_json::from_str(&raw)
        .with_context(|| format!("Transcript '{input}' is not a valid message array"))?;

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let title = config.title.as_deref().unwrap_or("charla");
    let page = render_page(title, config.stylesheet.as_deref(), &messages);

    match args.get(2) {
        Some(output) => fs::write(output, page)
            .with_context(|| format!("Failed to write output '{output}'"))?,
        None => print!("{page}"),
    }

    Ok(())
}
