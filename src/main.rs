//! SkillGuard terminal wizard.
//!
//! Walks the questionnaire in a terminal: role, skills, experience, risk
//! analysis, recommendations, then an open chat with the advisor. Runs fully
//! offline with the mock advisor when no Gemini credential is configured.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use skillguard::adapters::advisor::{FallbackAdvisor, GeminiAdvisor, GeminiConfig, MockAdvisor};
use skillguard::application::WizardSession;
use skillguard::config::AppConfig;
use skillguard::domain::profile::{ExperienceBand, Role};
use skillguard::ports::Advisor;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let advisor = build_advisor(&config)?;
    tracing::info!(advisor = advisor.name(), "starting wizard session");

    let mut session = WizardSession::new(advisor);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("SkillGuard - how future-proof are your skills?\n");

    // Role screen.
    println!("Select your role:");
    for (i, role) in Role::ALL.iter().enumerate() {
        println!("  {}. {role}", i + 1);
    }
    let role = loop {
        let input = prompt(&mut lines, "> ")?;
        match input
            .parse::<usize>()
            .ok()
            .and_then(|n| Role::ALL.get(n.wrapping_sub(1)))
        {
            Some(role) => break *role,
            None => println!("Enter a number between 1 and {}.", Role::ALL.len()),
        }
    };
    session.select_role(role);

    // Skill screen.
    println!("\nSelect your skills (comma-separated numbers, empty for none):");
    let catalog = role.skill_catalog();
    for (i, skill) in catalog.iter().enumerate() {
        println!("  {}. {skill}", i + 1);
    }
    let input = prompt(&mut lines, "> ")?;
    for token in input.split(',') {
        if let Some(skill) = token
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| catalog.get(n.wrapping_sub(1)))
        {
            session.toggle_skill(skill);
        }
    }

    println!("\nYears of experience (0-2, 3-5, 6+) [3-5]:");
    let input = prompt(&mut lines, "> ")?;
    if let Some(band) = ExperienceBand::parse(&input) {
        session.set_experience(band);
    }

    // Analyzing transition.
    println!("\nAnalyzing your profile...");
    match session.analyze().await {
        Ok(analysis) => {
            for insight in &analysis.insights {
                println!("  * {insight}");
            }
        }
        Err(err) => tracing::warn!(error = %err, "analysis unavailable"),
    }

    // Results screen.
    let summary = session.risk_summary();
    println!(
        "\nYour automation risk: {} ({})",
        summary.score,
        summary.level.label()
    );
    println!("Estimated impact window: {}", summary.level.time_horizon());
    println!("{}\n", summary.level.message());

    let recommendations = session.recommendations();
    if recommendations.is_empty() {
        println!("No recommendations available for your current skill set.");
    } else {
        println!("These skills will keep you competitive and in-demand:");
        for rec in &recommendations {
            println!(
                "  - {} [{} priority, {}% demand, {}, {}]",
                rec.title, rec.priority, rec.demand_percent, rec.duration, rec.difficulty
            );
            println!("    {}", rec.description);
        }
    }

    // Chat widget.
    println!("\nChat with your career advisor (type 'quit' to exit).");
    if let Some(welcome) = session.conversation().turns().first() {
        print_assistant_turn(&welcome.text, &welcome.suggestions);
    }

    loop {
        let input = prompt(&mut lines, "you> ")?;
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }
        if let Some(turn) = session.send_chat(&input).await {
            print_assistant_turn(&turn.text, &turn.suggestions);
        }
    }

    println!("Good luck out there!");
    Ok(())
}

/// Builds the advisor strategy once from configuration: mock when no
/// credential is present (or forced), otherwise live with a mock fallback.
fn build_advisor(config: &AppConfig) -> Result<Arc<dyn Advisor>, Box<dyn std::error::Error>> {
    let api_key = match config.ai.gemini_api_key.clone() {
        Some(key) if !config.ai.mock_mode() => key,
        _ => {
            // A little latency keeps the demo honest about round-trips.
            return Ok(Arc::new(
                MockAdvisor::new().with_delay(Duration::from_millis(400)),
            ));
        }
    };

    let gemini = GeminiAdvisor::new(
        GeminiConfig::new(api_key)
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    )?;

    Ok(Arc::new(FallbackAdvisor::new(gemini, MockAdvisor::new())))
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Ok("quit".to_string()),
    }
}

fn print_assistant_turn(text: &str, suggestions: &[String]) {
    println!("advisor> {text}");
    if !suggestions.is_empty() {
        println!("         (try: {})", suggestions.join(" | "));
    }
}
