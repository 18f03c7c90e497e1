//! Interactive field-matching CLI.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use semalign::config::Config;
use semalign::embedding::{EmbedderConfig, SentenceEmbedder};
use semalign::field::{Field, FieldType};
use semalign::matcher::{FieldMatcher, MatchResult};
use semalign::targets::load_target_fields;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("\nsemalign — semantic field matcher");
    println!("{}", "=".repeat(40));

    println!("\nDefault target fields: {}", config.targets_path.display());
    let path_input = prompt(
        &mut lines,
        "Target fields JSON path (press Enter for default): ",
    )?;
    let targets_path = if path_input.is_empty() {
        config.targets_path.clone()
    } else {
        PathBuf::from(path_input)
    };

    if !targets_path.exists() {
        anyhow::bail!("target fields file not found: {}", targets_path.display());
    }

    let targets = load_target_fields(&targets_path)?;
    println!("Loaded {} target fields.", targets.len());

    let input_field = prompt_for_field(&mut lines)?;

    let embedder_config = match &config.model_dir {
        Some(dir) => EmbedderConfig::new(dir.clone()),
        None => {
            tracing::warn!("No SEMALIGN_MODEL_DIR configured, running embedder in stub mode");
            EmbedderConfig::stub()
        }
    };

    println!("\nLoading model...");
    let matcher = FieldMatcher::new(SentenceEmbedder::load(embedder_config)?);

    println!("Matching...");
    let results = matcher.find_matches(&input_field, &targets, config.top_k)?;

    print_results(&results);
    Ok(())
}

fn prompt_for_field(lines: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<Field> {
    println!("\nEnter input field details:");

    let handle = prompt_required(lines, "  Handle: ")?;
    let label = prompt_required(lines, "  Label: ")?;

    let field_type = loop {
        let raw = prompt_required(lines, "  Type (string/int/number/date/boolean): ")?;
        match raw.parse::<FieldType>() {
            Ok(field_type) => break field_type,
            Err(err) => println!("    {err}"),
        }
    };

    let description = prompt(lines, "  Description (optional, press Enter to skip): ")?;
    let description = if description.is_empty() {
        None
    } else {
        Some(description)
    };

    // Required values are already non-empty and the type is parsed, so
    // construction cannot fail here.
    Ok(Field::new(
        &handle,
        &label,
        field_type.as_str(),
        description.as_deref(),
    )?)
}

/// Prompts once and returns the trimmed input (may be empty).
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt_text: &str,
) -> anyhow::Result<String> {
    print!("{prompt_text}");
    io::stdout().flush()?;
    let line = lines
        .next()
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("input stream closed"))?;
    Ok(line.trim().to_string())
}

/// Prompts until the user enters a non-empty value.
fn prompt_required(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt_text: &str,
) -> anyhow::Result<String> {
    loop {
        let value = prompt(lines, prompt_text)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("    This field is required.");
    }
}

fn print_results(results: &[MatchResult<'_>]) {
    println!("\n{}", "=".repeat(40));
    println!("Results:");
    println!("{}", "-".repeat(40));

    for (rank, result) in results.iter().enumerate() {
        let field = result.field();
        println!(
            "  {}. {:20} (score: {:.3})",
            rank + 1,
            field.handle(),
            result.score()
        );
        println!("     Label: {}", field.label());
        println!("     Type: {}", field.field_type());
        if let Some(description) = field.description() {
            println!("     Description: {description}");
        }
        println!();
    }
}
