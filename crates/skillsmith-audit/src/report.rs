//! Corpus-level audit report

use std::fmt;

use crate::analyze::QualityReport;

/// Score band of a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityBracket {
    Critical,
    Low,
    Medium,
    Good,
    Excellent,
}

impl QualityBracket {
    pub const ALL: [QualityBracket; 5] = [
        QualityBracket::Critical,
        QualityBracket::Low,
        QualityBracket::Medium,
        QualityBracket::Good,
        QualityBracket::Excellent,
    ];

    pub fn from_score(score: i64) -> Self {
        match score {
            i64::MIN..=-1 => QualityBracket::Critical,
            0..=9 => QualityBracket::Low,
            10..=24 => QualityBracket::Medium,
            25..=49 => QualityBracket::Good,
            _ => QualityBracket::Excellent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityBracket::Critical => "CRITICAL (<0)",
            QualityBracket::Low => "LOW (0-9)",
            QualityBracket::Medium => "MEDIUM (10-24)",
            QualityBracket::Good => "GOOD (25-49)",
            QualityBracket::Excellent => "EXCELLENT (50+)",
        }
    }
}

/// Audit results over a whole skills tree, lowest score first
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    reports: Vec<QualityReport>,
    bottom: usize,
}

impl AuditReport {
    /// Sort `reports` by ascending score; ties keep discovery order
    pub fn new(mut reports: Vec<QualityReport>, bottom: usize) -> Self {
        reports.sort_by_key(|r| r.score);
        Self { reports, bottom }
    }

    pub fn reports(&self) -> &[QualityReport] {
        &self.reports
    }

    /// The `bottom` lowest-scoring skills
    pub fn lowest(&self) -> &[QualityReport] {
        &self.reports[..self.bottom.min(self.reports.len())]
    }

    pub fn bracket_count(&self, bracket: QualityBracket) -> usize {
        self.reports
            .iter()
            .filter(|r| QualityBracket::from_score(r.score) == bracket)
            .count()
    }

    pub fn thin(&self) -> impl Iterator<Item = &QualityReport> {
        self.reports.iter().filter(|r| r.is_thin())
    }

    pub fn short(&self) -> impl Iterator<Item = &QualityReport> {
        self.reports.iter().filter(|r| r.is_short())
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total skills analyzed: {}", self.reports.len())?;

        writeln!(f)?;
        writeln!(f, "BOTTOM {} (lowest quality scores):", self.bottom)?;
        writeln!(
            f,
            "{:<60} {:>5} {:>4} {:>4} {:>4} {:>3} {:>3} {:>3} {:>5}",
            "Path", "Len", "Code", "Tbl", "Sec", "BP", "Gen", "TBP", "Score"
        )?;
        writeln!(f, "{}", "-".repeat(100))?;
        for r in self.lowest() {
            writeln!(
                f,
                "{:<60} {:>5} {:>4} {:>4} {:>4} {:>3} {:>3} {:>3} {:>5}",
                r.path,
                r.body_len,
                r.code_blocks,
                r.tables,
                r.sections,
                r.bp_items,
                r.generic,
                r.thin_bp,
                r.score
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Score distribution:")?;
        for bracket in QualityBracket::ALL {
            writeln!(f, "  {}: {}", bracket.label(), self.bracket_count(bracket))?;
        }

        let thin: Vec<&QualityReport> = self.thin().collect();
        if !thin.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "Skills with THIN best practices (>50% one-liners under 40 chars): {}",
                thin.len()
            )?;
            for r in thin {
                writeln!(f, "  {} ({}/{} thin)", r.path, r.thin_bp, r.bp_items)?;
            }
        }

        let short: Vec<&QualityReport> = self.short().collect();
        if !short.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skills with VERY SHORT body (<1000 chars): {}", short.len())?;
            for r in short {
                writeln!(
                    f,
                    "  {} ({} chars, {} code blocks)",
                    r.path, r.body_len, r.code_blocks
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(path: &str, score: i64) -> QualityReport {
        let mut report = QualityReport::analyze(path, &"a".repeat(2000));
        report.score = score;
        report
    }

    #[test]
    fn test_bracket_edges() {
        assert_eq!(QualityBracket::from_score(-1), QualityBracket::Critical);
        assert_eq!(QualityBracket::from_score(0), QualityBracket::Low);
        assert_eq!(QualityBracket::from_score(9), QualityBracket::Low);
        assert_eq!(QualityBracket::from_score(10), QualityBracket::Medium);
        assert_eq!(QualityBracket::from_score(24), QualityBracket::Medium);
        assert_eq!(QualityBracket::from_score(25), QualityBracket::Good);
        assert_eq!(QualityBracket::from_score(50), QualityBracket::Excellent);
    }

    #[test]
    fn test_sorted_stably_and_cut_to_bottom() {
        let report = AuditReport::new(
            vec![scored("b", 30), scored("a", 5), scored("c", 5), scored("d", -3)],
            3,
        );
        let order: Vec<&str> = report.reports().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(order, ["d", "a", "c", "b"]);
        assert_eq!(report.lowest().len(), 3);
        assert_eq!(report.bracket_count(QualityBracket::Low), 2);
        assert_eq!(report.bracket_count(QualityBracket::Excellent), 0);
    }

    #[test]
    fn test_rendered_sections() {
        let mut short = QualityReport::analyze("web/tiny", "## Rules\n- A\n- B\n- C\n");
        short.score = -12;
        let text = AuditReport::new(vec![short, scored("web/big", 60)], 60).to_string();

        assert!(text.starts_with("Total skills analyzed: 2\n\nBOTTOM 60 (lowest quality scores):\n"));
        assert!(text.contains("  CRITICAL (<0): 1\n"));
        assert!(text.contains("  EXCELLENT (50+): 1\n"));
        assert!(text.contains("(>50% one-liners under 40 chars): 1\n  web/tiny (3/3 thin)\n"));
        assert!(text.contains("Skills with VERY SHORT body (<1000 chars): 1\n"));
        assert!(text.ends_with("  web/tiny (21 chars, 0 code blocks)\n"));
    }
}
