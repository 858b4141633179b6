use crate::commands::CatalogEntry;
use sleep_assessment::assessment::{ChartPoint, ProgressView, QuestionView, ResultView, Revision};
use sleep_assessment::content::ContentIssue;
use std::io::{self, Write};

const BAR_CELLS_PER_POINT: usize = 4;

pub(crate) fn title(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count().max(8)))
}

pub(crate) fn progress(out: &mut impl Write, progress: &ProgressView) -> io::Result<()> {
    writeln!(out, "[{}] {:.0}%", progress.label, progress.percent)
}

pub(crate) fn question(
    out: &mut impl Write,
    progress_view: &ProgressView,
    question: &QuestionView,
    back_label: &str,
) -> io::Result<()> {
    writeln!(out)?;
    progress(out, progress_view)?;
    writeln!(out, "{}", question.category_name)?;
    writeln!(out, "{}", question.text)?;
    for option in &question.options {
        let marker = if option.selected { " *" } else { "" };
        writeln!(out, "  {}) {}{}", option.index + 1, option.text, marker)?;
    }
    if question.can_go_back {
        writeln!(out, "  b) {back_label}")?;
    }
    Ok(())
}

/// Horizontal bars stand in for the radar chart.
pub(crate) fn chart(out: &mut impl Write, points: &[ChartPoint]) -> io::Result<()> {
    let width = points
        .iter()
        .map(|point| point.subject.chars().count())
        .max()
        .unwrap_or(0);

    for point in points {
        let filled = usize::from(point.value) * BAR_CELLS_PER_POINT;
        let empty = usize::from(point.max.saturating_sub(point.value)) * BAR_CELLS_PER_POINT;
        let padding = width - point.subject.chars().count();
        writeln!(
            out,
            "  {}{} |{}{}| {}/{}",
            point.subject,
            " ".repeat(padding),
            "#".repeat(filled),
            ".".repeat(empty),
            point.value,
            point.max
        )?;
    }
    Ok(())
}

pub(crate) fn result(out: &mut impl Write, result: &ResultView) -> io::Result<()> {
    let diagnosis = &result.diagnosis;

    writeln!(out)?;
    title(out, &result.quiz_title)?;
    writeln!(
        out,
        "{}: {}/{}",
        result.score_summary, result.score, result.max_score
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "[{}] {} ({})",
        diagnosis.severity_label, diagnosis.title, diagnosis.color
    )?;
    writeln!(out, "{}", diagnosis.message)?;

    writeln!(out)?;
    writeln!(out, "{}", result.report_title)?;
    chart(out, &result.chart)?;
    writeln!(out, "{}", result.chart_caption)?;

    writeln!(out)?;
    writeln!(out, "{}", result.tips_title)?;
    for tip in &diagnosis.tips {
        writeln!(out, "  - {tip}")?;
    }

    writeln!(out)?;
    writeln!(out, "{}", result.products_title)?;
    for product in &diagnosis.products {
        writeln!(out, "  - {}: {}", product.name, product.description)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", result.disclaimer)
}

pub(crate) fn catalog(out: &mut impl Write, entries: &[CatalogEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(
            out,
            "{:>2}. [{}] {}",
            entry.index + 1,
            entry.category_name,
            entry.text
        )?;
        for option in &entry.options {
            writeln!(out, "      {} = {}", option.value, option.text)?;
        }
    }
    Ok(())
}

pub(crate) fn validation(
    out: &mut impl Write,
    revision: Revision,
    issues: &[ContentIssue],
) -> io::Result<()> {
    let name = revision.label();
    if issues.is_empty() {
        return writeln!(out, "{revision} ({name}): ok");
    }
    writeln!(out, "{revision} ({name}): {} issue(s)", issues.len())?;
    for issue in issues {
        writeln!(out, "  - {issue}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sleep_assessment::assessment::{CategoryId, Language};

    #[test]
    fn chart_bars_scale_with_values() {
        let points = vec![
            ChartPoint {
                category: CategoryId::new("moodState"),
                subject: "Mood".to_string(),
                value: 2,
                max: 3,
            },
            ChartPoint {
                category: CategoryId::new("energyLevel"),
                subject: "Energy Level".to_string(),
                value: 0,
                max: 3,
            },
        ];

        let mut buffer = Vec::new();
        chart(&mut buffer, &points).expect("write to buffer");
        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "  Mood         |########....| 2/3");
        assert_eq!(lines[1], "  Energy Level |............| 0/3");
    }

    #[test]
    fn validation_lists_each_issue() {
        let issues = vec![ContentIssue::MissingLanguage {
            language: Language::Ms,
        }];
        let mut buffer = Vec::new();
        validation(&mut buffer, Revision::SleepHabits, &issues).expect("write");
        let text = String::from_utf8(buffer).expect("utf8");

        assert!(text.starts_with("sleep_habits (Sleep Habits Quick Check): 1 issue(s)"));
        assert!(text.contains("ms: language pack missing"));
    }
}
