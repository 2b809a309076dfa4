//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use giftmatch_domain::constraint::resolve_level;
use giftmatch_domain::{Exchange, Participant, ParticipantId};
use giftmatch_gatekeeper::RejectionReason;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the drawn matching of an exchange.
    pub fn format_matching(&self, exchange: &Exchange) -> Result<String> {
        let pairs = named_pairs(exchange);
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = pairs
                    .iter()
                    .map(|(giver, giftee)| {
                        serde_json::json!({
                            "giver": giver.name(),
                            "giver_id": giver.id().to_string(),
                            "giftee": giftee.name(),
                            "giftee_id": giftee.id().to_string(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "exchange": exchange.name,
                    "matches": json,
                }))?)
            }
            OutputFormat::Table => {
                if pairs.is_empty() {
                    return Ok(self.colorize("No matching drawn.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Giver", "Giftee"]);
                for (giver, giftee) in &pairs {
                    builder.push_record([giver.name(), giftee.name()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(pairs
                .iter()
                .map(|(giver, giftee)| format!("{} -> {}", giver.name(), giftee.name()))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a single participant's assignment.
    pub fn format_assignment(&self, giver: &Participant, giftee: &Participant) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "giver": giver.name(),
                "giftee": giftee.name(),
            }))?),
            OutputFormat::Table => Ok(format!(
                "{} gives a gift to {}",
                giver.name(),
                self.colorize(giftee.name(), "green")
            )),
            OutputFormat::Quiet => Ok(giftee.name().to_string()),
        }
    }

    /// Format the constrained pairs of an exchange with their resolved levels.
    ///
    /// One row per directed pair that has a constraint record, which is the set
    /// of pairs the engine samples. A reverse `never` shows up in the level.
    pub fn format_constraints(&self, exchange: &Exchange) -> Result<String> {
        let mut rows: Vec<(&Participant, &Participant)> = Vec::new();
        for c in &exchange.constraints {
            let (Some(giver), Some(giftee)) =
                (exchange.participant(c.giver), exchange.participant(c.giftee))
            else {
                continue;
            };
            if !rows.iter().any(|(g, r)| g.id() == c.giver && r.id() == c.giftee) {
                rows.push((giver, giftee));
            }
        }
        rows.sort_by(|a, b| (a.0.name(), a.1.name()).cmp(&(b.0.name(), b.1.name())));

        let resolved: Vec<_> = rows
            .iter()
            .map(|(g, r)| {
                let level = resolve_level(&exchange.constraints, g.id(), r.id());
                (g.name(), r.name(), level)
            })
            .collect();

        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = resolved
                    .iter()
                    .map(|(giver, giftee, level)| {
                        serde_json::json!({
                            "giver": giver,
                            "giftee": giftee,
                            "level": level.as_str(),
                            "probability": level.probability(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if resolved.is_empty() {
                    return Ok(self.colorize("No constraints.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Giver", "Giftee", "Level", "Probability"]);
                for (giver, giftee, level) in &resolved {
                    builder.push_record([
                        giver.to_string(),
                        giftee.to_string(),
                        level.as_str().to_string(),
                        format!("{:.2}", level.probability()),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(resolved
                .iter()
                .map(|(giver, giftee, level)| format!("{} -> {}: {}", giver, giftee, level))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format validation problems, one per line.
    pub fn format_rejections(&self, reasons: &[RejectionReason]) -> String {
        reasons
            .iter()
            .map(|reason| self.error(&reason.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Matches of an exchange resolved to participants, sorted by giver name.
fn named_pairs(exchange: &Exchange) -> Vec<(&Participant, &Participant)> {
    let Some(matching) = exchange.matching.as_ref() else {
        return Vec::new();
    };

    let lookup = |id: ParticipantId| exchange.participant(id);
    let mut pairs: Vec<_> = matching
        .iter()
        .filter_map(|m| Some((lookup(m.giver())?, lookup(m.giftee())?)))
        .collect();
    pairs.sort_by(|a, b| a.0.name().cmp(b.0.name()));
    pairs
}
