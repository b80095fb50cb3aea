use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::input::{IceSummaryResponse, IepmResponse};
use crate::model::levels::TotalLevel;
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage1_competencies::normalize_competencies_with;
use crate::pipeline::stage2_indicators::{IepmReport, assemble_iepm};
use crate::pipeline::stage3_summary::{competency_statistics, level_counts, swot_buckets};
use crate::pipeline::stage4_compare::{
    compare_instruments, ice_average, iepm_average, overall_consistency,
};
use crate::reference::{DimensionMap, ReferenceTables};
use crate::report::json::render_json;
use crate::report::text::render_report_text;
use crate::report::{ComparisonReport, IceReport, ReportBundle, ReportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Json,
    Text,
    All,
}

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub ice: Option<&'a IceSummaryResponse>,
    pub iepm: Option<&'a IepmResponse>,
    pub tables: &'a ReferenceTables,
    pub dimension_map: &'a DimensionMap,
    pub profile: &'a ScoringProfile,
}

pub fn build_ice_report(
    response: &IceSummaryResponse,
    tables: &ReferenceTables,
    profile: &ScoringProfile,
) -> IceReport {
    let competencies =
        normalize_competencies_with(&response.raw_results(), &tables.competencies, profile);
    let ice_total = response.ice_total();
    IceReport {
        statistics: competency_statistics(&competencies),
        levels: level_counts(&competencies),
        swot: swot_buckets(&competencies, &profile.thresholds),
        ice_total,
        ice_total_level: TotalLevel::from_total(ice_total, &profile.thresholds),
        competencies,
    }
}

pub fn build_comparison(
    ice: &IceReport,
    iepm: &IepmReport,
    profile: &ScoringProfile,
) -> Option<ComparisonReport> {
    if ice.competencies.is_empty() || iepm.dimensions.is_empty() {
        return None;
    }
    let action_recommendations = Some(iepm.action.recomendaciones.as_str())
        .filter(|r| *r != "N/A");
    Some(ComparisonReport {
        rows: compare_instruments(&ice.competencies, &iepm.dimensions, profile),
        ice_average: ice_average(&ice.competencies),
        iepm_average: iepm_average(&iepm.dimensions, profile),
        consistency: overall_consistency(ice.ice_total, iepm.total.puntaje, action_recommendations),
    })
}

pub fn build_bundle(input: &ReportInput<'_>) -> ReportBundle {
    let ice = input
        .ice
        .map(|r| build_ice_report(r, input.tables, input.profile));
    let iepm = input
        .iepm
        .map(|r| assemble_iepm(r, input.tables, input.dimension_map, input.profile));
    let comparison = match (&ice, &iepm) {
        (Some(ice), Some(iepm)) => build_comparison(ice, iepm, input.profile),
        _ => None,
    };
    ReportBundle {
        ice,
        iepm,
        comparison,
    }
}

pub fn write_reports(
    bundle: &ReportBundle,
    tables: &ReferenceTables,
    out_dir: &Path,
    format: ReportFormat,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    if matches!(format, ReportFormat::Json | ReportFormat::All) {
        if let Some(ice) = &bundle.ice {
            written.push(write_text(&out_dir.join("ice.json"), &render_json(ice)?)?);
        }
        if let Some(iepm) = &bundle.iepm {
            written.push(write_text(&out_dir.join("iepm.json"), &render_json(iepm)?)?);
        }
        if let Some(cmp) = &bundle.comparison {
            written.push(write_text(
                &out_dir.join("comparison.json"),
                &render_json(cmp)?,
            )?);
        }
    }

    if matches!(format, ReportFormat::Text | ReportFormat::All) {
        let report = render_report_text(bundle, tables);
        written.push(write_text(&out_dir.join("report.txt"), &report)?);
    }

    tracing::info!("wrote {} report files to {}", written.len(), out_dir.display());
    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<PathBuf> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
