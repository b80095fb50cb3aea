use crate::model::palette::focus_color;
use crate::model::results::CanonicalCompetency;
use crate::pipeline::stage2_indicators::IepmReport;
use crate::reference::ReferenceTables;
use crate::report::{
    ComparisonReport, IceReport, ReportBundle, format_f64_2, format_f64_3, format_percent,
};

pub fn render_report_text(bundle: &ReportBundle, tables: &ReferenceTables) -> String {
    let mut out = String::new();

    out.push_str("Informe de Competencias Emprendedoras\n");
    out.push_str("=====================================\n\n");

    out.push_str("1. Índice de Competencias Emprendedoras (ICE)\n");
    match &bundle.ice {
        Some(ice) => push_ice(&mut out, ice, tables),
        None => out.push_str("Sin resultados ICE.\n"),
    }
    out.push('\n');

    out.push_str("2. Índice de Evaluación del Perfil Emprendedor (IEPM)\n");
    match &bundle.iepm {
        Some(iepm) => push_iepm(&mut out, iepm, tables),
        None => out.push_str("Sin resultados IEPM.\n"),
    }
    out.push('\n');

    out.push_str("3. Comparación ICE vs IEPM\n");
    match &bundle.comparison {
        Some(cmp) => push_comparison(&mut out, cmp),
        None => out.push_str("Comparación no disponible.\n"),
    }

    out
}

fn push_ice(out: &mut String, ice: &IceReport, tables: &ReferenceTables) {
    out.push_str(&format!(
        "ICE total: {} ({})\n",
        format_f64_3(ice.ice_total),
        ice.ice_total_level.as_str()
    ));
    out.push_str(&format!(
        "Competencias: {}/{}\n",
        ice.competencies.len(),
        tables.competencies.len()
    ));
    for c in &ice.competencies {
        out.push_str(&format!(
            "  C{}. {}: {} ({})\n",
            c.id,
            c.name,
            format_f64_3(c.score),
            c.level.as_str()
        ));
    }
    if let Some(stats) = &ice.statistics {
        out.push_str(&format!(
            "Estadísticas: promedio={}, máximo={}, mínimo={}\n",
            format_f64_3(stats.promedio),
            format_f64_3(stats.maximo),
            format_f64_3(stats.minimo)
        ));
    }
    out.push_str(&format!(
        "Niveles: Alto={}, Medio={}, Bajo={}\n",
        ice.levels.alto,
        ice.levels.medio,
        ice.levels.bajo
    ));
    out.push_str(&format!("Fortalezas: {}\n", names(&ice.swot.fortalezas)));
    out.push_str(&format!("Oportunidades: {}\n", names(&ice.swot.oportunidades)));
    out.push_str(&format!("Debilidades: {}\n", names(&ice.swot.debilidades)));
}

fn push_iepm(out: &mut String, iepm: &IepmReport, tables: &ReferenceTables) {
    out.push_str(&format!(
        "IEPM total: {} ({}), valoración: {}\n",
        format_f64_2(iepm.total.puntaje),
        iepm.total.nivel.as_str(),
        iepm.total.valoracion
    ));
    out.push_str("Dimensiones:\n");
    for d in &iepm.dimensions {
        out.push_str(&format!(
            "  D{}. {}: {} / 5.00 ({}%)\n",
            d.id,
            d.name,
            format_f64_2(d.score),
            d.percentage
        ));
    }
    out.push_str("Indicadores:\n");
    for i in &iepm.indicators {
        let focus = tables.focus_of(i.id).as_str();
        out.push_str(&format!(
            "  I{}. {} [{}, {} {}]: {} / 5.00 ({}%)\n",
            i.id,
            i.name,
            i.dimension_name,
            focus,
            focus_color(focus),
            format_f64_2(i.score),
            i.percentage
        ));
    }
    out.push_str(&format!(
        "Acción recomendada ({}): {}\n",
        iepm.action.rango,
        iepm.action.descripcion
    ));
    out.push_str(&format!("Recomendaciones: {}\n", iepm.action.recomendaciones));
}

fn push_comparison(out: &mut String, cmp: &ComparisonReport) {
    out.push_str(&format!(
        "Promedio ICE: {}, promedio IEPM: {}\n",
        format_f64_3(cmp.ice_average),
        format_f64_3(cmp.iepm_average)
    ));
    for (idx, row) in cmp.rows.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {}: ICE {} | IEPM {} | Dif {}\n",
            idx + 1,
            row.competency,
            format_percent(row.ice_score),
            format_percent(row.iepm_score),
            format_percent(row.difference)
        ));
        out.push_str(&format!("     {}\n", row.recommendation));
    }
    out.push_str(&format!(
        "Consistencia: {} ({})\n",
        format_f64_3(cmp.consistency.ratio),
        cmp.consistency.analysis
    ));
    out.push_str("Recomendaciones integradas:\n");
    for r in &cmp.consistency.recommendations {
        out.push_str(&format!("  - {r}\n"));
    }
}

fn names(items: &[CanonicalCompetency]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
