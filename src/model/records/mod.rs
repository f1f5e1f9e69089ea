//! Record families shown by the console, one module per screen

/// Enumerated status with display labels usable as form choices
macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pub mod admission;
pub mod exam_result;
pub mod fee;
pub mod leave_type;
pub mod lesson_plan;
pub mod library_asset;
pub mod staff;
pub mod transport;

pub use admission::Admission;
pub use exam_result::ExamResult;
pub use fee::FeeEntry;
pub use leave_type::LeaveType;
pub use lesson_plan::LessonPlan;
pub use library_asset::LibraryAsset;
pub use staff::StaffMember;
pub use transport::TransportAllocation;

use super::form::FieldError;
use super::record::field_error;

/// Map a validated choice label back to its enum
fn parse_choice<T>(
    field: &str,
    label: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, Vec<FieldError>> {
    parse(label).ok_or_else(|| field_error(field, format!("Unknown value '{}'", label)))
}
