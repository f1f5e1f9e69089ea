//! Screens of the console and their presentation metadata

/// One record family / list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScreenKind {
    LessonPlans,
    Admissions,
    Fees,
    LeaveTypes,
    Library,
    Staff,
    Transport,
    ExamResults,
}

impl ScreenKind {
    pub fn all() -> Vec<ScreenKind> {
        vec![
            ScreenKind::LessonPlans,
            ScreenKind::Admissions,
            ScreenKind::Fees,
            ScreenKind::LeaveTypes,
            ScreenKind::Library,
            ScreenKind::Staff,
            ScreenKind::Transport,
            ScreenKind::ExamResults,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScreenKind::LessonPlans => "Lesson Plans",
            ScreenKind::Admissions => "Admissions",
            ScreenKind::Fees => "Fees",
            ScreenKind::LeaveTypes => "Leave Types",
            ScreenKind::Library => "Library",
            ScreenKind::Staff => "Staff",
            ScreenKind::Transport => "Transport",
            ScreenKind::ExamResults => "Exam Results",
        }
    }

    /// File stem used for JSON datasets and in log lines
    pub fn slug(&self) -> &'static str {
        match self {
            ScreenKind::LessonPlans => "lesson_plans",
            ScreenKind::Admissions => "admissions",
            ScreenKind::Fees => "fees",
            ScreenKind::LeaveTypes => "leave_types",
            ScreenKind::Library => "library",
            ScreenKind::Staff => "staff",
            ScreenKind::Transport => "transport",
            ScreenKind::ExamResults => "exam_results",
        }
    }

    /// Prefix of ids generated for new records
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ScreenKind::LessonPlans => "LP",
            ScreenKind::Admissions => "ADM",
            ScreenKind::Fees => "FEE",
            ScreenKind::LeaveTypes => "LV",
            ScreenKind::Library => "LIB",
            ScreenKind::Staff => "STF",
            ScreenKind::Transport => "TRN",
            ScreenKind::ExamResults => "EXM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_and_prefixes_are_unique() {
        let all = ScreenKind::all();
        let slugs: HashSet<_> = all.iter().map(|s| s.slug()).collect();
        let prefixes: HashSet<_> = all.iter().map(|s| s.id_prefix()).collect();
        assert_eq!(slugs.len(), all.len());
        assert_eq!(prefixes.len(), all.len());
    }
}
