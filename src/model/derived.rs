//! Derived fields shared by tables and forms

/// Net salary = salary + bonus - deductions
pub fn net_salary(salary: f64, bonus: f64, deductions: f64) -> f64 {
    salary + bonus - deductions
}

/// Percentage of obtained over total marks; `None` when total is zero
pub fn percentage(obtained: f64, total: f64) -> Option<f64> {
    if total == 0.0 {
        None
    } else {
        Some(obtained / total * 100.0)
    }
}

/// Letter grade for a percentage
pub fn grade(percent: f64) -> &'static str {
    match percent {
        p if p >= 90.0 => "A+",
        p if p >= 80.0 => "A",
        p if p >= 70.0 => "B",
        p if p >= 60.0 => "C",
        p if p >= 50.0 => "D",
        _ => "F",
    }
}
