use clap::ValueEnum;
use parcel_rules::classification::router::ProgramSummary;
use parcel_rules::classification::{ClassificationResponse, ClassificationResult};
use parcel_rules::error::AppError;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable summary with a channel table
    #[default]
    Table,
    /// Full response as pretty-printed JSON
    Json,
    /// One CSV row per evaluated channel
    Csv,
}

#[derive(Debug, Serialize)]
struct ChannelRow<'a> {
    channel: &'a str,
    eligible: bool,
    tier: &'a str,
    dimensional_weight: String,
    chargeable_weight: String,
    reason: &'a str,
    recommended: bool,
}

impl<'a> ChannelRow<'a> {
    fn new(result: &'a ClassificationResult, recommended: Option<&str>) -> Self {
        Self {
            channel: &result.channel,
            eligible: result.eligible,
            tier: &result.tier,
            dimensional_weight: format!("{:.2}", result.dimensional_weight),
            chargeable_weight: format!("{:.2}", result.chargeable_weight),
            reason: &result.reason,
            recommended: recommended == Some(result.channel.as_str()),
        }
    }

    /// Row standing in for a response that evaluated no channel.
    fn outcome(tier: &'a str, reason: &'a str) -> Self {
        Self {
            channel: "-",
            eligible: false,
            tier,
            dimensional_weight: "-".to_string(),
            chargeable_weight: "-".to_string(),
            reason,
            recommended: false,
        }
    }
}

fn render_error(err: impl std::fmt::Display) -> AppError {
    AppError::Render(err.to_string())
}

pub(crate) fn render_response<W: Write>(
    response: &ClassificationResponse,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => render_table(response, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, response).map_err(render_error)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => render_csv(response, out),
    }
}

fn render_table<W: Write>(response: &ClassificationResponse, out: &mut W) -> Result<(), AppError> {
    let length_unit = response.units.length_unit();
    let weight_unit = response.units.weight_unit();
    let parcel = &response.measurement;

    writeln!(out, "{} classification", response.program)?;
    write!(
        out,
        "- parcel {:.2} x {:.2} x {:.2} {length_unit} | {:.2} {weight_unit}",
        parcel.length, parcel.width, parcel.height, parcel.weight
    )?;
    writeln!(out, " | girth {:.2} {length_unit}", response.girth)?;

    if let Some(reason) = &response.rejected {
        writeln!(out, "Rejected: {reason}")?;
        return Ok(());
    }

    if let Some(band) = &response.band {
        writeln!(out, "- band: {band}")?;
    }
    if let Some(notice) = &response.notice {
        writeln!(out, "- note: {notice}")?;
    }

    if !response.results.is_empty() {
        writeln!(
            out,
            "\n  {:<24} {:<9} {:<28} {:>10} {:>11}  {}",
            "Channel", "Eligible", "Tier", "Dim wt", "Chargeable", "Reason"
        )?;
        for result in &response.results {
            let marker = if response.recommended.as_deref() == Some(result.channel.as_str()) {
                "*"
            } else {
                " "
            };
            writeln!(
                out,
                "{marker} {:<24} {:<9} {:<28} {:>10.2} {:>11.2}  {}",
                result.channel,
                if result.eligible { "yes" } else { "no" },
                result.tier,
                result.dimensional_weight,
                result.chargeable_weight,
                result.reason,
            )?;
        }
    }

    if !response.advisories.is_empty() {
        writeln!(out, "\nNear a boundary:")?;
        for advisory in &response.advisories {
            writeln!(out, "  - {advisory}")?;
        }
    }

    match &response.recommended {
        Some(channel) => writeln!(out, "\nRecommended: {channel}")?,
        None => writeln!(out, "\nRecommended: none (no eligible channel)")?,
    }
    Ok(())
}

fn render_csv<W: Write>(response: &ClassificationResponse, out: &mut W) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    let recommended = response.recommended.as_deref();
    let outcome = match (&response.rejected, &response.notice) {
        (Some(reason), _) => Some(ChannelRow::outcome("rejected", reason)),
        (None, Some(notice)) if response.results.is_empty() => {
            Some(ChannelRow::outcome("no candidates", notice))
        }
        _ => None,
    };
    if let Some(row) = outcome {
        writer.serialize(row).map_err(render_error)?;
    }
    for result in &response.results {
        writer
            .serialize(ChannelRow::new(result, recommended))
            .map_err(render_error)?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn render_programs<W: Write>(
    default_program: &str,
    programs: &[ProgramSummary],
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "Programs (default {default_program})")?;
    for program in programs {
        writeln!(
            out,
            "- {} [{} / {}] {} candidates: {}",
            program.program,
            program.length_unit,
            program.weight_unit,
            if program.banded { "banded" } else { "fixed" },
            program.channels.join(", ")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_rules::classification::{
        ClassificationEngine, ClassifyOptions, Measurement, ProgramId,
    };

    fn classify(
        program: ProgramId,
        length: f64,
        width: f64,
        height: f64,
        weight: f64,
    ) -> ClassificationResponse {
        let parcel = Measurement::new(length, width, height, weight).expect("valid measurement");
        ClassificationEngine::standard()
            .classify(program, &parcel, &ClassifyOptions::default())
            .expect("program is registered")
    }

    fn render(response: &ClassificationResponse, format: OutputFormat) -> String {
        let mut out = Vec::new();
        render_response(response, format, &mut out).expect("renders");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn table_marks_recommendation() {
        let response = classify(ProgramId::UsFbm, 40.0, 20.0, 10.0, 10.0);
        let output = render(&response, OutputFormat::Table);

        assert!(output.starts_with("US-FBM classification"));
        assert!(output.contains("girth 100.00 in"));
        assert!(output.contains("- band: ground"));
        assert!(output.contains("Recommended: YUN-Ground"));
        assert!(output.lines().any(|line| line.starts_with("* YUN-Ground")));
        assert!(output.lines().any(|line| line.starts_with("  FEDEX-Ground")));
    }

    #[test]
    fn table_stops_after_rejection() {
        let response = classify(ProgramId::UsFbm, 40.0, 20.0, 10.0, 160.0);
        let output = render(&response, OutputFormat::Table);

        assert!(output
            .contains("Rejected: weight 160.00 lb exceeds the program maximum of 150 lb"));
        assert!(!output.contains("Recommended"));
    }

    #[test]
    fn csv_has_one_row_per_channel() {
        let response = classify(ProgramId::UsFbm, 40.0, 20.0, 10.0, 10.0);
        let output = render(&response, OutputFormat::Csv);
        let mut lines = output.lines();

        assert_eq!(
            lines.next(),
            Some("channel,eligible,tier,dimensional_weight,chargeable_weight,reason,recommended")
        );
        assert_eq!(lines.next(), Some("FEDEX-Ground,true,standard,32.00,32.00,-,false"));
        assert_eq!(output.lines().count(), 7);
    }

    #[test]
    fn csv_reports_rejection_as_a_row() {
        let response = classify(ProgramId::UsFbm, 40.0, 20.0, 10.0, 160.0);
        let output = render(&response, OutputFormat::Csv);
        let rows: Vec<&str> = output.lines().skip(1).collect();

        assert_eq!(
            rows,
            ["-,false,rejected,-,-,weight 160.00 lb exceeds the program maximum of 150 lb,false"]
        );
    }

    #[test]
    fn csv_reports_empty_band_notice() {
        let response = classify(ProgramId::DeFbm, 100.0, 80.0, 60.0, 75.0);
        let output = render(&response, OutputFormat::Csv);
        let rows: Vec<&str> = output.lines().skip(1).collect();

        assert_eq!(
            rows,
            [concat!(
                "-,false,no candidates,-,-,",
                "\"actual weight over 60 kg, use DHL Freight (pallet service)\",false"
            )]
        );
    }

    #[test]
    fn json_round_trips_through_serde() {
        let response = classify(ProgramId::JpFba, 40.0, 30.0, 30.0, 26.0);
        let output = render(&response, OutputFormat::Json);
        let payload: serde_json::Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(payload["program"], "JP-FBA");
        assert_eq!(payload["results"][0]["tier"], "surcharge tier J");
        assert_eq!(payload["recommended"], "JP-FBA");
    }

    #[test]
    fn program_listing_names_every_program() {
        let engine = ClassificationEngine::standard();
        let programs: Vec<ProgramSummary> =
            engine.catalog().profiles().map(ProgramSummary::from).collect();

        let mut out = Vec::new();
        render_programs("US-FBM", &programs, &mut out).expect("renders");
        let output = String::from_utf8(out).expect("utf8 output");

        assert!(output.starts_with("Programs (default US-FBM)"));
        assert_eq!(output.lines().count(), 10);
        assert!(output.contains("- DE-FBM [cm / kg] banded"));
    }
}
