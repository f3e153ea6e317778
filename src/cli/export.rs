#![cfg(feature = "cli")]
use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use dioxus::logger::tracing::info;
use serde::Serialize;
use std::io::Write;

use crate::config::MapConfig;
use crate::markers::{GeoPoint, LatLng, MarkerStatus, StatusSummary};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print a JSON snapshot of generated markers.
    GenMarkers { count: Option<usize> },
    /// Print per-status counts for one generated snapshot.
    Summary { count: Option<usize> },
}

impl Command {
    /// `None` means no subcommand was given and the dashboard should launch.
    pub fn parse<I>(mut args: I) -> anyhow::Result<Option<Self>>
    where
        I: Iterator<Item = String>,
    {
        let Some(cmd) = args.next() else {
            return Ok(None);
        };
        let count = match args.next() {
            Some(raw) => Some(
                raw.parse::<usize>()
                    .with_context(|| format!("invalid marker count {raw:?}"))?,
            ),
            None => None,
        };
        match cmd.as_str() {
            "gen-markers" => Ok(Some(Command::GenMarkers { count })),
            "summary" => Ok(Some(Command::Summary { count })),
            other => bail!("unknown command {other:?}, expected gen-markers or summary"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub generated_at: DateTime<Utc>,
    pub center: LatLng,
    pub radius: f64,
    pub seed: Option<u64>,
    pub summary: StatusSummary,
    pub points: Vec<GeoPoint>,
}

impl Snapshot {
    pub fn generate(config: &MapConfig) -> Self {
        let points = config.generator().generate(&mut config.rng());
        Self {
            generated_at: Utc::now(),
            center: config.center,
            radius: config.radius,
            seed: config.seed,
            summary: StatusSummary::from_points(&points),
            points,
        }
    }
}

pub fn run_command<W: Write>(cmd: Command, config: MapConfig, out: &mut W) -> anyhow::Result<()> {
    match cmd {
        Command::GenMarkers { count } => {
            let snapshot = Snapshot::generate(&config.with_count(count));
            info!(
                "[gen-markers] {} markers, seed {:?}",
                snapshot.points.len(),
                snapshot.seed
            );
            serde_json::to_writer_pretty(&mut *out, &snapshot).context("writing snapshot")?;
            writeln!(out)?;
        }
        Command::Summary { count } => {
            let snapshot = Snapshot::generate(&config.with_count(count));
            let summary = snapshot.summary;
            for status in MarkerStatus::ALL {
                writeln!(out, "{:<16}{:>8}", status.label(), summary.count(status))?;
            }
            writeln!(out, "{:<16}{:>8}", "Total", summary.total())?;
            writeln!(
                out,
                "{:<16}{:>7.1}%",
                "Operational",
                summary.operational_share() * 100.0
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn seeded(seed: u64) -> MapConfig {
        MapConfig {
            seed: Some(seed),
            ..MapConfig::default()
        }
    }

    #[test]
    fn parses_subcommands() {
        assert_eq!(Command::parse(args(&[])).unwrap(), None);
        assert_eq!(
            Command::parse(args(&["gen-markers"])).unwrap(),
            Some(Command::GenMarkers { count: None })
        );
        assert_eq!(
            Command::parse(args(&["summary", "500"])).unwrap(),
            Some(Command::Summary { count: Some(500) })
        );
    }

    #[test]
    fn rejects_unknown_command_and_bad_count() {
        assert!(Command::parse(args(&["serve"])).is_err());
        assert!(Command::parse(args(&["gen-markers", "-3"])).is_err());
    }

    #[test]
    fn gen_markers_writes_json_snapshot() {
        let mut out = Vec::new();
        run_command(Command::GenMarkers { count: Some(10) }, seeded(3), &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let points = v["points"].as_array().unwrap();
        assert_eq!(points.len(), 10);
        assert_eq!(points[9]["name"], "Container 10");
        assert_eq!(v["seed"], 3);
        let tallied: u64 = ["critical", "not_responding", "active", "available"]
            .iter()
            .filter_map(|k| v["summary"][*k].as_u64())
            .sum();
        assert_eq!(tallied, 10);
    }

    #[test]
    fn zero_count_snapshot_is_empty() {
        let mut out = Vec::new();
        run_command(Command::GenMarkers { count: Some(0) }, seeded(1), &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["points"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn summary_lists_every_status() {
        let mut out = Vec::new();
        run_command(Command::Summary { count: Some(196) }, seeded(8), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for status in MarkerStatus::ALL {
            assert!(text.contains(status.label()), "{text}");
        }
        assert!(text.contains("Total"));
        assert!(text.lines().any(|l| l.starts_with("Total") && l.trim_end().ends_with("196")));
    }
}
