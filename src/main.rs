use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use quizquest::{App, JsonFileStore, QuestionProvider, QuizError};

#[derive(Parser, Debug)]
#[command(version, about = "AI-generated trivia quizzes in the terminal", long_about = None)]
struct Args {
    /// JSON file holding the saved nickname and the leaderboard
    #[arg(short, long, default_value = "quizquest-data.json")]
    data_file: PathBuf,

    /// Generation model to request
    #[arg(short, long, default_value = "gemini-2.5-flash")]
    model: String,

    /// Number of questions per quiz
    #[arg(short = 'n', long, default_value_t = 10)]
    questions: usize,

    /// File receiving the application log
    #[arg(long, default_value = "quizquest.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args.log_file);

    if let Err(e) = start(args).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

async fn start(args: Args) -> Result<(), QuizError> {
    let api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|k| !k.is_empty())
        .ok_or(QuizError::MissingApiKey)?;

    let provider = QuestionProvider::new(api_key, args.model, args.questions.max(1));
    let app = App::new(JsonFileStore::open(args.data_file));

    quizquest::run(app, provider).await
}

/// Logs go to a file so the alternate-screen UI stays clean.
fn init_logging(path: &Path) {
    match std::fs::File::create(path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quizquest=info")),
                )
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(err) => {
            eprintln!("warning: could not open log file {}: {}", path.display(), err);
        }
    }
}
