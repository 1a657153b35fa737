use anyhow::Context;
use clap::{Parser, ValueEnum};
use skillmatch::render;
use skillmatch::{
    export_to_path, write_results, CatalogLoader, Error, Matcher, RecommendResponse,
    ResultLimits, SkillQuery, SkillVocabulary,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Recommend job postings that match your skills
#[derive(Parser, Debug)]
#[command(name = "skillmatch")]
#[command(about = "Find your best-matching jobs based on your skills", long_about = None)]
struct Args {
    /// Path to the job catalog CSV
    #[arg(short, long, env = "SKILLMATCH_CATALOG", default_value = "final_data.csv")]
    catalog: PathBuf,

    /// Comma-separated skills, e.g. "Python, SQL, ML, Excel"
    #[arg(short, long)]
    skills: String,

    /// Number of job results (5 to 20, in steps of 5)
    #[arg(short = 'n', long, default_value_t = ResultLimits::default().default)]
    top_n: usize,

    /// Comma-separated skill vocabulary replacing the built-in list
    #[arg(long)]
    vocabulary: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the results as CSV to this path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let limits = ResultLimits::default();
    let top_n = limits.validate(args.top_n)?;

    let vocabulary = match &args.vocabulary {
        Some(list) => SkillVocabulary::from_csv_list(list).context("invalid --vocabulary")?,
        None => SkillVocabulary::job_skills(),
    };

    let catalog = CatalogLoader::new(Arc::new(vocabulary))
        .load_path(&args.catalog)
        .with_context(|| format!("failed to load catalog {}", args.catalog.display()))?;

    let query = match SkillQuery::parse(&args.skills) {
        Ok(query) => query,
        Err(Error::EmptySkillInput) => {
            warn!("empty skill input, nothing to match");
            eprintln!("Please enter at least one skill.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let encoded = query.encode(catalog.vocabulary());
    if !encoded.ignored.is_empty() {
        debug!(ignored = ?encoded.ignored, "skills not in vocabulary");
    }
    info!(matched = ?encoded.matched, top_n, "matching skills");

    let results = Matcher::new(&catalog).recommend_query(&encoded, top_n)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => render::write_text(&mut out, query.terms(), top_n, &results)?,
        OutputFormat::Json => {
            let response = RecommendResponse::new(query.terms(), &encoded, &results, catalog.len());
            serde_json::to_writer_pretty(&mut out, &response)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_results(&mut out, &results)?,
    }
    out.flush()?;

    if let Some(path) = &args.export {
        export_to_path(path, &results)
            .with_context(|| format!("failed to export results to {}", path.display()))?;
    }

    Ok(())
}
