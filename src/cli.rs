use crate::analyze::{HistoryAnalyzer, DEFAULT_FAME_LIMIT};
use crate::git::{GitLog, LogFile, LogSource, DEFAULT_MAX_COUNT};
use crate::model::StreakOutput;
use crate::output;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-shame")]
#[command(about = "Leaderboards of reverts, fixes and streaks from recent git history")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Path to git repository (defaults to the current directory)")]
    pub repo: Option<PathBuf>,

    #[arg(long, global = true, default_value_t = DEFAULT_MAX_COUNT, help = "Number of recent commits to read")]
    pub max_count: usize,

    #[arg(long, global = true, help = "Read `git log --pretty=format:%H|%an|%ae|%s` output from a file instead of running git")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    #[command(about = "Show hall of shame (default)")]
    Shame {
        #[arg(long, help = "Only show the top N authors")]
        limit: Option<usize>,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    #[command(about = "Show CI failure stats")]
    Ci {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    #[command(about = "Show revert statistics")]
    Reverts {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    #[command(about = "Show hall of fame (quality contributors)")]
    Fame {
        #[arg(long, default_value_t = DEFAULT_FAME_LIMIT, help = "Number of authors to show")]
        limit: usize,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    #[command(about = "Show commit streak for author")]
    Streak {
        #[arg(help = "Author name, matched exactly")]
        author: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    #[command(about = "Output shame scores as JSON")]
    Json,
    #[command(about = "Show all stats (shame + CI + reverts + fame)")]
    All,
}

impl Commands {
    fn is_json(&self) -> bool {
        match self {
            Commands::Shame { json, .. }
            | Commands::Ci { json }
            | Commands::Reverts { json }
            | Commands::Fame { json, .. }
            | Commands::Streak { json, .. } => *json,
            Commands::Json => true,
            Commands::All => false,
        }
    }
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Shame { limit: None, json: false }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let command = self.command.unwrap_or_default();

        if let Some(path) = &self.common.log_file {
            return run(&HistoryAnalyzer::new(LogFile::new(path)), command);
        }

        let repo = self.common.repo.unwrap_or_else(|| PathBuf::from("."));
        let progress = !command.is_json() && console::Term::stderr().is_term();
        let source = GitLog::new(repo)
            .with_max_count(self.common.max_count)
            .with_progress(progress);
        run(&HistoryAnalyzer::new(source), command)
    }
}

fn run<S: LogSource>(analyzer: &HistoryAnalyzer<S>, command: Commands) -> Result<()> {
    let mut out = std::io::stdout().lock();

    match command {
        Commands::Shame { limit, json } => {
            let mut scores = analyzer.shame_scores()?;
            if let Some(limit) = limit {
                scores.leaderboard.truncate(limit);
            }
            if json {
                output::write_json(&mut out, &scores)?;
            } else {
                output::write_leaderboard(&mut out, &scores)?;
            }
        }
        Commands::Ci { json } => {
            let stats = analyzer.ci_failure_stats()?;
            if json {
                output::write_json(&mut out, &stats)?;
            } else {
                output::write_ci_stats(&mut out, &stats)?;
            }
        }
        Commands::Reverts { json } => {
            let stats = analyzer.revert_stats()?;
            if json {
                output::write_json(&mut out, &stats)?;
            } else {
                output::write_revert_stats(&mut out, &stats)?;
            }
        }
        Commands::Fame { limit, json } => {
            let fame = analyzer.hall_of_fame(limit)?;
            if json {
                output::write_json(&mut out, &fame)?;
            } else {
                output::write_fame(&mut out, &fame)?;
            }
        }
        Commands::Streak { author, json } => {
            let streak = analyzer.streak(&author)?;
            if json {
                output::write_json(&mut out, &StreakOutput { author, streak })?;
            } else {
                output::write_streak(&mut out, &author, streak)?;
            }
        }
        Commands::Json => {
            output::write_json(&mut out, &analyzer.shame_scores()?)?;
        }
        Commands::All => {
            output::write_leaderboard(&mut out, &analyzer.shame_scores()?)?;
            output::write_ci_stats(&mut out, &analyzer.ci_failure_stats()?)?;
            output::write_revert_stats(&mut out, &analyzer.revert_stats()?)?;
            output::write_fame(&mut out, &analyzer.hall_of_fame(DEFAULT_FAME_LIMIT)?)?;
        }
    }

    Ok(())
}
