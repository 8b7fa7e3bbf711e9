use crate::error::Result;
use crate::model::{CiFailureStats, FameEntry, RevertStats, ShameScores};
use chrono::Local;
use console::style;
use serde::Serialize;
use std::io::Write;

const BANNER_WIDTH: usize = 59;

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn rank_marker(rank: u32) -> &'static str {
    match rank {
        1 => "🏆",
        2 | 3 => "🥇",
        _ => "😅",
    }
}

fn fame_marker(position: usize) -> &'static str {
    match position {
        0 => "👑",
        1 => "⭐",
        _ => "✨",
    }
}

pub fn write_leaderboard<W: Write>(out: &mut W, scores: &ShameScores) -> Result<()> {
    let rule = "═".repeat(BANNER_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", style(&rule).red().bold())?;
    writeln!(out, "{}", style("🔴 GIT SHAME - HALL OF SHAME 🔴").red().bold())?;
    writeln!(out, "{}", style(&rule).red().bold())?;
    writeln!(out)?;

    if scores.leaderboard.is_empty() {
        writeln!(out, "{}", style("✅ Nobody to shame. Clean history!").green())?;
    } else {
        writeln!(
            out,
            "{:<8} {:<28} {:>11} {:>8} {:>6} {:>13}",
            style("RANK").red().bold(),
            style("AUTHOR").red().bold(),
            style("SHAME SCORE").red().bold(),
            style("REVERTS").red().bold(),
            style("FIXES").red().bold(),
            style("TOTAL COMMITS").red().bold()
        )?;
        writeln!(out, "{}", style("─".repeat(79)).cyan())?;
        for e in &scores.leaderboard {
            writeln!(
                out,
                "{:<8} {:<28} {:>11} {:>8} {:>6} {:>13}",
                style(format!("{} #{}", rank_marker(e.rank), e.rank)).red().bold(),
                style(&e.author).yellow(),
                style(e.score).red().bold(),
                style(e.reverts).red(),
                style(e.fixes).red(),
                style(e.changes).dim()
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", style(format!("📊 Total commits analyzed: {}", scores.total_commits)).dim())?;
    let updated = scores.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
    writeln!(out, "{}", style(format!("⏰ Updated: {updated}")).dim())?;
    writeln!(out)?;
    Ok(())
}

pub fn write_ci_stats<W: Write>(out: &mut W, stats: &CiFailureStats) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("🚨 CI FAILURE STATS 🚨").red().bold())?;
    writeln!(out)?;

    if stats.total_breaking == 0 {
        writeln!(out, "{}", style("✅ No CI-breaking commits detected! Great work!").green())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Breaking commits: {}", style(stats.total_breaking).red().bold())?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<32} {:>16}",
        style("AUTHOR").red().bold(),
        style("BREAKING COMMITS").red().bold()
    )?;
    writeln!(out, "{}", style("─".repeat(49)).cyan())?;
    for (author, count) in stats.by_author.ranked() {
        writeln!(out, "{:<32} {:>16}", style(author).yellow(), style(count).red().bold())?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_revert_stats<W: Write>(out: &mut W, stats: &RevertStats) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("↩️  REVERT STATS ↩️").red().bold())?;
    writeln!(out)?;

    if stats.total_reverts == 0 {
        writeln!(out, "{}", style("✅ No reverts detected! Pristine history!").green())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:<32} {:>8}", style("AUTHOR").red().bold(), style("REVERTS").red().bold())?;
    writeln!(out, "{}", style("─".repeat(41)).cyan())?;
    for (author, count) in stats.by_author.ranked() {
        writeln!(out, "{:<32} {:>8}", style(author).yellow(), style(count).red().bold())?;
    }

    if !stats.recent_reverts.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", style("📝 Recent reverts:").dim())?;
        for c in &stats.recent_reverts {
            writeln!(out, "{}", style(format!("   • {}: \"{}\"", c.author, c.message)).dim())?;
        }
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_fame<W: Write>(out: &mut W, fame: &[FameEntry]) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("🌟 HALL OF FAME 🌟").green().bold())?;
    writeln!(out)?;

    if fame.is_empty() {
        writeln!(out, "{}", style("No eligible contributors yet. Keep it up!").dim())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<8} {:<28} {:>10} {:>8} {:>8}",
        style("RANK").green().bold(),
        style("AUTHOR").green().bold(),
        style("QUALITY %").green().bold(),
        style("COMMITS").green().bold(),
        style("REVERTS").green().bold()
    )?;
    writeln!(out, "{}", style("─".repeat(66)).cyan())?;
    for (i, e) in fame.iter().enumerate() {
        writeln!(
            out,
            "{:<8} {:<28} {:>10} {:>8} {:>8}",
            style(format!("{} #{}", fame_marker(i), i + 1)).green().bold(),
            style(&e.author).green(),
            style(format!("{}%", e.quality)).green().bold(),
            style(e.commits).dim(),
            style(e.reverts).dim()
        )?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_streak<W: Write>(out: &mut W, author: &str, streak: usize) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style(format!("🔥 {author} has a {} commit streak!", style(streak).red().bold())).bold()
    )?;
    writeln!(out)?;
    Ok(())
}
