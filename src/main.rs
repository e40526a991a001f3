//! Resume radar: keyword coverage checker for resumes and job descriptions

use clap::Parser;
use log::{error, info, warn};
use resume_radar::cli::{self, Cli, Commands, ConfigAction, TaxonomyAction};
use resume_radar::config::Config;
use resume_radar::error::{Result, ResumeRadarError};
use resume_radar::input::InputManager;
use resume_radar::output::formatter::ReportWriter;
use resume_radar::output::report::{CoverageReport, ReportContext};
use resume_radar::scoring::CoverageScorer;
use resume_radar::suggest::SuggestionGenerator;
use resume_radar::taxonomy::builtin;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            field,
            framework,
            detailed,
            output,
            save,
        } => {
            info!("Starting resume coverage analysis");

            cli::validate_file_extension(&resume, cli::INPUT_EXTENSIONS)
                .map_err(|e| ResumeRadarError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, cli::INPUT_EXTENSIONS).map_err(|e| {
                    ResumeRadarError::InvalidInput(format!("Job description file: {}", e))
                })?;
            }

            let format = cli::parse_output_format(&output).map_err(ResumeRadarError::InvalidInput)?;

            let field_name = field.unwrap_or_else(|| config.analysis.default_field.clone());
            let taxonomy = config.resolve_taxonomy(&field_name)?;
            let field_display = taxonomy.field.clone();

            let framework = framework.or_else(|| config.analysis.default_framework.clone());
            if let Some(name) = &framework {
                if taxonomy.framework(name).is_none() {
                    warn!(
                        "Framework '{}' is not defined for {}; scoring all domains",
                        name, field_display
                    );
                }
            }

            println!("🔍 Resume coverage analysis");
            println!("📄 Resume: {}", resume.display());
            if let Some(job_path) = &job {
                println!("💼 Job Description: {}", job_path.display());
            }
            println!("🗂️  Field: {}", field_display);
            if let Some(name) = &framework {
                println!("🛡️  Framework filter: {}", name);
            }

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            info!("Resume text: {} characters", resume_text.len());

            let scorer = CoverageScorer::new(taxonomy)?;
            let mut generator = generator_for_field(&field_display);
            let context = ReportContext {
                field: field_display,
                framework: framework.clone(),
                resume_file: resume.to_string_lossy().to_string(),
                job_file: job.as_ref().map(|p| p.to_string_lossy().to_string()),
            };

            let report = if let Some(job_path) = &job {
                let job_text = input_manager.extract_text(job_path).await?;
                info!("Job description text: {} characters", job_text.len());
                let comparison = scorer.compare(&resume_text, &job_text, framework.as_deref());
                CoverageReport::from_comparison(comparison, &mut generator, context)
            } else {
                let result = scorer.score(&resume_text, framework.as_deref());
                CoverageReport::from_result(result, &mut generator, context)
            };

            let detailed = detailed || config.output.detailed;
            let writer = ReportWriter::new(config.output.color_output, detailed);
            println!("{}", writer.render(&report, format)?);

            if let Some(path) = &save {
                writer.save(&report, format, path)?;
                println!("💾 Report saved to {}", path.display());
            }
        }

        Commands::Taxonomy { action } => match action {
            TaxonomyAction::List => {
                println!("🗂️  Available Fields\n");
                for taxonomy in config.taxonomies()? {
                    println!(
                        "  • {} — {} domains, {} keywords{}",
                        taxonomy.field,
                        taxonomy.domains.len(),
                        taxonomy.keyword_count(),
                        if taxonomy.frameworks.is_empty() {
                            String::new()
                        } else {
                            format!(", {} framework filters", taxonomy.frameworks.len())
                        }
                    );
                }
            }

            TaxonomyAction::Show { field } => {
                let taxonomy = config.resolve_taxonomy(&field)?;
                println!("🗂️  {}\n", taxonomy.field);
                for domain in &taxonomy.domains {
                    println!("  {}:", domain.name);
                    for keyword in &domain.keywords {
                        println!("    • {}", keyword);
                    }
                }
            }

            TaxonomyAction::Frameworks { field } => {
                let taxonomy = config.resolve_taxonomy(&field)?;
                if taxonomy.frameworks.is_empty() {
                    println!("Field '{}' defines no framework filters", taxonomy.field);
                } else {
                    println!("🛡️  Framework filters for {}\n", taxonomy.field);
                    for framework in &taxonomy.frameworks {
                        println!("  {}:", framework.name);
                        for domain in &framework.domains {
                            println!("    • {}", domain);
                        }
                    }
                }
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Default field: {}", config.analysis.default_field);
                println!(
                    "Default framework: {}",
                    config.analysis.default_framework.as_deref().unwrap_or("(none)")
                );
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
                if !config.taxonomy.custom_paths.is_empty() {
                    println!("Custom taxonomies:");
                    for path in &config.taxonomy.custom_paths {
                        println!("  • {}", path.display());
                    }
                }
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Suggestion generator with a field-appropriate fallback template. The
/// security field keeps the domain template bank's generic fallback.
fn generator_for_field(field: &str) -> SuggestionGenerator {
    if field == builtin::CYBER_SECURITY {
        SuggestionGenerator::new()
    } else {
        SuggestionGenerator::new()
            .with_fallback("Applied {keyword} within {domain} to strengthen your profile.")
    }
}
