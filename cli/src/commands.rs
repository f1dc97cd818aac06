use fleetlog_core::analysis::DamageAnalysis;
use fleetlog_core::combat_log::listener;
use fleetlog_core::{
    AppConfig, AppConfigExt, Analyzer, DirectoryIndex, LogAnalysis, LogParser, Reader,
};
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// Read and analyze one file, filling in the listener as the character name.
pub fn load_analysis(path: &Path, config: &AppConfig) -> Result<LogAnalysis, String> {
    let timer = Instant::now();
    let text = Reader::from(path.to_path_buf(), config.max_file_bytes)
        .read_log_file()
        .map_err(|e| e.to_string())?;

    let document = LogParser::default().parse_document(&text);
    let mut analysis = Analyzer::default().analyze_document(&document);
    analysis.character_name = listener(&document.events);

    tracing::info!(
        path = %path.display(),
        events = analysis.logged_events,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "analyzed log file"
    );
    Ok(analysis)
}

pub fn analyze_file(path: &Path, config: &AppConfig, json: bool) -> Result<(), String> {
    let analysis = load_analysis(path, config)?;
    if json {
        println!("{}", to_json(&analysis, config.pretty_json)?);
    } else {
        print!("{}", render_summary(&analysis));
    }
    Ok(())
}

pub fn analyze_latest(config: &AppConfig, json: bool) -> Result<(), String> {
    let index = DirectoryIndex::build_index(Path::new(&config.log_directory))
        .map_err(|e| e.to_string())?;
    let newest = index
        .newest()
        .ok_or_else(|| format!("no log files found in {}", config.log_directory))?;
    analyze_file(&newest.path, config, json)
}

pub fn list_files(config: &AppConfig) -> Result<(), String> {
    let index = DirectoryIndex::build_index(Path::new(&config.log_directory))
        .map_err(|e| e.to_string())?;

    if index.is_empty() {
        println!("No log files found in {}", config.log_directory);
        return Ok(());
    }

    println!("{:<40} {:<20} {:>10}", "File", "Started", "Bytes");
    println!("{}", "-".repeat(72));
    for entry in index.entries() {
        let empty_marker = if entry.is_empty { " (empty)" } else { "" };
        println!(
            "{:<40} {:<20} {:>10}{}",
            entry.filename,
            entry.formatted_datetime(),
            entry.file_size,
            empty_marker
        );
    }
    Ok(())
}

pub fn show_settings(config: &AppConfig) -> Result<(), String> {
    println!("{}", to_json(config, true)?);
    Ok(())
}

pub fn set_directory(path: String, config: &mut AppConfig) -> Result<(), String> {
    if !Path::new(&path).is_dir() {
        return Err(format!("{path} is not a directory"));
    }
    config.log_directory = path;
    config.save().map_err(|e| e.to_string())?;
    println!("Log directory set to {}", config.log_directory);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| e.to_string())
}

/// Plain text report of an analysis.
pub fn render_summary(analysis: &LogAnalysis) -> String {
    SummaryReport(analysis).to_string()
}

struct SummaryReport<'a>(&'a LogAnalysis);

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        let who = analysis.character_name.as_deref().unwrap_or("unknown pilot");

        writeln!(f, "Combat log for {who}")?;
        writeln!(
            f,
            "  events: {} ({} skipped)",
            analysis.logged_events, analysis.skipped_lines
        )?;

        match (&analysis.start, &analysis.end) {
            (Some(start), Some(end)) => writeln!(
                f,
                "  combat: {start} -> {end} ({}s)",
                analysis.duration_seconds.unwrap_or_default()
            )?,
            _ => writeln!(f, "  combat: none")?,
        }
        if !analysis.last_system.is_empty() {
            writeln!(f, "  last system: {}", analysis.last_system)?;
        }

        writeln!(
            f,
            "  damage done: {}  damage taken: {}",
            analysis.damage_done, analysis.damage_taken
        )?;
        if let Some(hit) = &analysis.max_to {
            writeln!(f, "  peak hit dealt: {} to {}", hit.damage, hit.entity)?;
        }
        if let Some(hit) = &analysis.max_from {
            writeln!(f, "  peak hit taken: {} from {}", hit.damage, hit.entity)?;
        }
        if let Some(armor) = analysis.armor_repaired {
            writeln!(f, "  armor repaired: {armor}")?;
        }
        if let Some(shield) = analysis.shield_repaired {
            writeln!(f, "  shield boosted: {shield}")?;
        }

        render_table(f, "Enemies", &analysis.enemies)?;
        render_table(f, "Weapons", &analysis.weapons)?;

        if !analysis.repairs.is_empty() {
            writeln!(f, "\nRepairs")?;
            writeln!(
                f,
                "  {:<32} {:<20} {:>7} {:>10} {:>7}",
                "Target", "Ship", "Cycles", "Repaired", "Avg"
            )?;
            for r in &analysis.repairs {
                writeln!(
                    f,
                    "  {:<32} {:<20} {:>7} {:>10} {:>7}",
                    r.name, r.ship, r.cycles_to, r.repairs_to, r.avg_to
                )?;
            }
        }
        Ok(())
    }
}

fn render_table(f: &mut fmt::Formatter<'_>, title: &str, rows: &[DamageAnalysis]) -> fmt::Result {
    if rows.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n{title}")?;
    writeln!(
        f,
        "  {:<36} {:>6} {:>9} {:>6} {:>6} {:>9} {:>6}",
        "Name", "Out", "Dealt", "Avg", "In", "Taken", "Avg"
    )?;
    for row in rows {
        writeln!(
            f,
            "  {:<36} {:>6} {:>9} {:>6} {:>6} {:>9} {:>6}",
            row.name,
            row.volleys_to,
            row.damage_to,
            row.avg_to,
            row.volleys_from,
            row.damage_from,
            row.avg_from
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const LOG: &str = "\
------------------------------------------------------------
  Gamelog
  Listener: Kira Vesh
  Session Started: 2024.03.14 18:59:51
------------------------------------------------------------
[ 2024.03.14 19:10:00 ] (None) Jumping from Jita to Perimeter
[ 2024.03.14 19:22:01 ] (combat) <b>120</b> to <b>Rat</b> - Light Missile - Hits
[ 2024.03.14 19:22:12 ] (combat) <b>125</b> from <b>Rat</b> - Smashes
[ 2024.03.14 19:22:16 ] (combat) <b>350</b> remote armor repaired to <b>Friend</b> - Guardian - Large Remote Armor Repairer II
";

    #[test]
    fn test_load_analysis_fills_character_name() {
        let dir = std::env::temp_dir().join(format!("fleetlog-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("20240314_185951_1.txt");
        fs::write(&path, LOG).unwrap();

        let analysis = load_analysis(&path, &AppConfig::default()).unwrap();

        assert_eq!(analysis.character_name.as_deref(), Some("Kira Vesh"));
        assert_eq!(analysis.damage_done, 120);
        assert_eq!(analysis.damage_taken, 125);
    }

    #[test]
    fn test_load_analysis_missing_file() {
        let err = load_analysis(Path::new("/no/such/log.txt"), &AppConfig::default()).unwrap_err();
        assert!(err.contains("failed to open log file"));
    }

    #[test]
    fn test_render_summary() {
        let mut analysis = fleetlog_core::analyze(LOG);
        analysis.character_name = Some("Kira Vesh".to_string());
        let text = render_summary(&analysis);

        assert!(text.starts_with("Combat log for Kira Vesh"));
        assert!(text.contains("damage done: 120  damage taken: 125"));
        assert!(text.contains("last system: Perimeter"));
        assert!(text.contains("armor repaired: 350"));
        assert!(!text.contains("shield boosted"));
        assert!(text.contains("Light Missile"));
        assert!(text.contains("Friend"));
        assert!(text.contains("\nEnemies\n"));
        assert!(text.contains("\nRepairs\n"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_summary_empty_log() {
        let text = render_summary(&LogAnalysis::default());
        assert!(text.contains("combat: none"));
        assert!(!text.contains("Enemies"));
    }

    #[test]
    fn test_json_output_uses_lowercase_directions() {
        let analysis = fleetlog_core::analyze(LOG);
        let json = to_json(&analysis, false).unwrap();
        assert!(json.contains("\"direction\":\"to\""));
        assert!(json.contains("\"category\":\"Enemy\""));
    }
}
