//! Built-in datasets
//!
//! Deterministic so the console is usable (and testable) without any data
//! directory. Values cycle through small pools by row index.

use super::records::admission::AdmissionStatus;
use super::records::exam_result::ExamKind;
use super::records::fee::{FeeStatus, FeeType};
use super::records::lesson_plan::PlanStatus;
use super::records::leave_type::LeaveStatus;
use super::records::library_asset::AssetStatus;
use super::records::staff::StaffStatus;
use super::records::transport::AllocationStatus;
use super::records::{
    Admission, ExamResult, FeeEntry, LeaveType, LessonPlan, LibraryAsset, StaffMember,
    TransportAllocation,
};
use chrono::{Duration, NaiveDate};

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Bella", "Chen", "Divya", "Elena", "Farhan", "Grace", "Hiro", "Isla", "Jonas",
    "Kavya", "Liam", "Maya", "Noah", "Olivia", "Priya",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Lopez", "Wang", "Okafor", "Rossi", "Khan", "Hopper", "Tanaka", "Murphy", "Berg",
    "Nair",
];

const CLASSES: &[&str] = &["6A", "6B", "7A", "7B", "8A", "8B", "9A", "10A"];
const SUBJECTS: &[&str] = &["Mathematics", "Science", "English", "History", "Geography", "Art"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 8).unwrap_or_default()
}

fn day(offset: i64) -> NaiveDate {
    base_date() + Duration::days(offset)
}

fn pick<'a>(pool: &[&'a str], i: usize) -> &'a str {
    pool[i % pool.len()]
}

/// "First Last", with the surname pool stepping at a different rate
fn person_name(i: usize) -> String {
    format!("{} {}", pick(FIRST_NAMES, i), pick(LAST_NAMES, i * 3 + 1))
}

fn id(prefix: &str, i: usize) -> String {
    format!("{}-{:03}", prefix, i + 1)
}

pub fn lesson_plans() -> Vec<LessonPlan> {
    const TOPICS: &[&str] = &[
        "Fractions and decimals",
        "The water cycle",
        "Persuasive writing",
        "The industrial revolution",
        "Map projections",
        "Colour theory",
        "Linear equations",
        "Photosynthesis",
    ];
    const STATUSES: [PlanStatus; 3] = [
        PlanStatus::Draft,
        PlanStatus::Submitted,
        PlanStatus::Approved,
    ];

    (0..24)
        .map(|i| LessonPlan {
            id: id("LP", i),
            subject: pick(SUBJECTS, i).to_string(),
            class_name: pick(CLASSES, i / 2).to_string(),
            teacher: person_name(i + 5),
            topic: pick(TOPICS, i).to_string(),
            date: day(i as i64 * 2),
            duration_minutes: [40, 45, 60, 90][i % 4],
            status: STATUSES[i % 3],
        })
        .collect()
}

pub fn admissions() -> Vec<Admission> {
    const STATUSES: [AdmissionStatus; 3] = [
        AdmissionStatus::Pending,
        AdmissionStatus::Approved,
        AdmissionStatus::Rejected,
    ];

    (0..30)
        .map(|i| {
            let student = person_name(i);
            let guardian = person_name(i + 7);
            Admission {
                id: id("ADM", i),
                email: format!(
                    "{}@families.example.org",
                    guardian.to_lowercase().replace(' ', ".")
                ),
                phone: format!("+1 555-01{:02}", i),
                student_name: student,
                guardian_name: guardian,
                class_name: pick(CLASSES, i).to_string(),
                admission_date: day(i as i64 * 3),
                status: STATUSES[(i * 2) % 3],
            }
        })
        .collect()
}

pub fn fees() -> Vec<FeeEntry> {
    const TYPES: [FeeType; 5] = [
        FeeType::Tuition,
        FeeType::Transport,
        FeeType::Library,
        FeeType::Exam,
        FeeType::Activity,
    ];
    const AMOUNTS: [f64; 5] = [1200.0, 180.0, 35.5, 75.0, 60.0];
    const STATUSES: [FeeStatus; 3] = [FeeStatus::Paid, FeeStatus::Pending, FeeStatus::Overdue];

    (0..40)
        .map(|i| FeeEntry {
            id: id("FEE", i),
            student_name: person_name(i / 2),
            fee_type: TYPES[i % 5],
            amount: AMOUNTS[i % 5],
            due_date: day(30 + (i as i64 % 6) * 30),
            status: STATUSES[i % 3],
        })
        .collect()
}

pub fn leave_types() -> Vec<LeaveType> {
    let rows: [(&str, i64, bool, &str); 7] = [
        ("Casual Leave", 12, true, "Short personal absences"),
        ("Sick Leave", 10, true, "Requires a note after two days"),
        ("Earned Leave", 15, true, "Accrues monthly"),
        ("Maternity Leave", 180, true, ""),
        ("Paternity Leave", 15, true, ""),
        ("Study Leave", 30, false, "Approved courses only"),
        ("Unpaid Leave", 60, false, ""),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (name, days, paid, description))| LeaveType {
            id: id("LV", i),
            name: name.to_string(),
            days_per_year: *days,
            paid: *paid,
            description: description.to_string(),
            status: if i == 6 { LeaveStatus::Inactive } else { LeaveStatus::Active },
        })
        .collect()
}

pub fn library_assets() -> Vec<LibraryAsset> {
    let books: [(&str, &str, &str); 12] = [
        ("A Brief History of Time", "Stephen Hawking", "Science"),
        ("To Kill a Mockingbird", "Harper Lee", "Fiction"),
        ("The Guns of August", "Barbara Tuchman", "History"),
        ("Oxford English Dictionary", "Oxford Press", "Reference"),
        ("Principia Mathematica", "Bertrand Russell", "Mathematics"),
        ("The Selfish Gene", "Richard Dawkins", "Science"),
        ("Pride and Prejudice", "Jane Austen", "Fiction"),
        ("Guns, Germs, and Steel", "Jared Diamond", "History"),
        ("How to Solve It", "George Polya", "Mathematics"),
        ("The Hobbit", "J. R. R. Tolkien", "Fiction"),
        ("Cosmos", "Carl Sagan", "Science"),
        ("World Atlas", "National Geographic", "Reference"),
    ];
    const STATUSES: [AssetStatus; 4] = [
        AssetStatus::Available,
        AssetStatus::Issued,
        AssetStatus::Available,
        AssetStatus::Lost,
    ];

    books
        .iter()
        .enumerate()
        .map(|(i, (title, author, category))| LibraryAsset {
            id: id("LIB", i),
            title: title.to_string(),
            author: author.to_string(),
            isbn: format!("978-0-{:02}-{:06}-{}", 10 + i, 100_000 + i * 7919, i % 10),
            category: category.to_string(),
            copies: (i as i64 % 5) + 1,
            status: STATUSES[i % 4],
        })
        .collect()
}

pub fn staff() -> Vec<StaffMember> {
    const ROLES: &[&str] = &[
        "Teacher",
        "Senior Teacher",
        "Librarian",
        "Accountant",
        "Counsellor",
        "Lab Assistant",
    ];
    const STATUSES: [StaffStatus; 5] = [
        StaffStatus::Active,
        StaffStatus::Active,
        StaffStatus::OnLeave,
        StaffStatus::Active,
        StaffStatus::Inactive,
    ];

    (0..25)
        .map(|i| {
            let name = person_name(i + 3);
            StaffMember {
                id: id("STF", i),
                email: format!("{}@school.example.org", name.to_lowercase().replace(' ', ".")),
                name,
                role: pick(ROLES, i).to_string(),
                salary: 2574.0 + (i as f64) * 137.5,
                bonus: [200.0, 0.0, 150.0, 75.25][i % 4],
                deductions: [100.0, 50.0, 0.0, 120.0, 80.0][i % 5],
                joined: day(-(i as i64) * 97),
                status: STATUSES[i % 5],
            }
        })
        .collect()
}

pub fn transport() -> Vec<TransportAllocation> {
    const ROUTES: &[&str] = &["North Loop", "East Line", "River Road", "Hill Route"];
    const STOPS: &[&str] = &[
        "Market Square",
        "Library Corner",
        "Station Gate",
        "Park Avenue",
        "Old Mill",
    ];

    (0..18)
        .map(|i| TransportAllocation {
            id: id("TRN", i),
            student_name: person_name(i + 2),
            route: pick(ROUTES, i).to_string(),
            vehicle: format!("BUS-{:02}", (i % 4) + 1),
            pickup_point: pick(STOPS, i).to_string(),
            monthly_fee: [45.0, 55.0, 60.0, 72.5][i % 4],
            status: if i % 7 == 6 {
                AllocationStatus::Suspended
            } else {
                AllocationStatus::Active
            },
        })
        .collect()
}

pub fn exam_results() -> Vec<ExamResult> {
    const EXAMS: [ExamKind; 3] = [ExamKind::UnitTest, ExamKind::MidTerm, ExamKind::Final];
    const TOTALS: [f64; 3] = [25.0, 50.0, 100.0];

    (0..36)
        .map(|i| {
            let total = TOTALS[i % 3];
            // Spread scores over every grade band
            let ratio = 0.35 + ((i * 17) % 65) as f64 / 100.0;
            ExamResult {
                id: id("EXM", i),
                student_name: person_name(i / 3),
                class_name: pick(CLASSES, i / 6).to_string(),
                subject: pick(SUBJECTS, i).to_string(),
                exam: EXAMS[i % 3],
                obtained: (total * ratio).round(),
                total,
            }
        })
        .collect()
}
