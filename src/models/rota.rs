//! Rota models: weekdays, shift types, rota entries and settings.
//!
//! A rota is a `Vec<RotaEntry>`, one entry per staff member, each holding
//! exactly one [`ShiftType`] for every [`DayOfWeek`].

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::StaffMember;

/// A day of the rota week. The week starts on Monday.
///
/// # Example
///
/// ```
/// use staffing_engine::models::DayOfWeek;
/// use chrono::NaiveDate;
///
/// // 2025-03-16 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
/// assert_eq!(DayOfWeek::from_date(sunday), DayOfWeek::Sunday);
/// assert_eq!(DayOfWeek::Sunday.index(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    /// Monday (index 0).
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday (index 6).
    Sunday,
}

impl DayOfWeek {
    /// All days in rota order, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Maps a calendar date onto the Monday-first rota week.
    ///
    /// Sunday-first weekday numbering (Sunday = 0) is rotated with
    /// `(n + 6) % 7`, which is exactly `num_days_from_monday`. Sunday must
    /// land on index 6, never 0.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::ALL[date.weekday().num_days_from_monday() as usize]
    }

    /// Zero-based position in the rota week (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase day name as used in rota settings.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The assignment for one staff member on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    /// Morning shift.
    Morning,
    /// Afternoon shift.
    Afternoon,
    /// Night shift.
    Night,
    /// Rostered day off.
    Off,
    /// Approved leave.
    Leave,
}

impl ShiftType {
    /// The working shifts, in rotation order.
    pub const WORKING: [ShiftType; 3] = [ShiftType::Morning, ShiftType::Afternoon, ShiftType::Night];

    /// Every shift type, in reporting order.
    pub const ALL: [ShiftType; 5] = [
        ShiftType::Morning,
        ShiftType::Afternoon,
        ShiftType::Night,
        ShiftType::Off,
        ShiftType::Leave,
    ];

    /// Returns true for morning, afternoon and night shifts.
    pub fn is_working(self) -> bool {
        matches!(self, ShiftType::Morning | ShiftType::Afternoon | ShiftType::Night)
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Morning => write!(f, "morning"),
            ShiftType::Afternoon => write!(f, "afternoon"),
            ShiftType::Night => write!(f, "night"),
            ShiftType::Off => write!(f, "off"),
            ShiftType::Leave => write!(f, "leave"),
        }
    }
}

/// One staff member's week of shift assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotaEntry {
    /// The staff member this entry belongs to.
    pub staff_id: String,
    /// Denormalized staff name for display.
    pub staff_name: String,
    /// Monday's assignment.
    pub monday: ShiftType,
    /// Tuesday's assignment.
    pub tuesday: ShiftType,
    /// Wednesday's assignment.
    pub wednesday: ShiftType,
    /// Thursday's assignment.
    pub thursday: ShiftType,
    /// Friday's assignment.
    pub friday: ShiftType,
    /// Saturday's assignment.
    pub saturday: ShiftType,
    /// Sunday's assignment.
    pub sunday: ShiftType,
}

impl RotaEntry {
    /// Creates an entry with every day set to `shift`.
    pub fn filled(staff: &StaffMember, shift: ShiftType) -> Self {
        Self {
            staff_id: staff.id.clone(),
            staff_name: staff.name.clone(),
            monday: shift,
            tuesday: shift,
            wednesday: shift,
            thursday: shift,
            friday: shift,
            saturday: shift,
            sunday: shift,
        }
    }

    /// Returns the assignment for `day`.
    pub fn shift(&self, day: DayOfWeek) -> ShiftType {
        match day {
            DayOfWeek::Monday => self.monday,
            DayOfWeek::Tuesday => self.tuesday,
            DayOfWeek::Wednesday => self.wednesday,
            DayOfWeek::Thursday => self.thursday,
            DayOfWeek::Friday => self.friday,
            DayOfWeek::Saturday => self.saturday,
            DayOfWeek::Sunday => self.sunday,
        }
    }

    /// Overwrites the assignment for `day`.
    pub fn set_shift(&mut self, day: DayOfWeek, shift: ShiftType) {
        let cell = match day {
            DayOfWeek::Monday => &mut self.monday,
            DayOfWeek::Tuesday => &mut self.tuesday,
            DayOfWeek::Wednesday => &mut self.wednesday,
            DayOfWeek::Thursday => &mut self.thursday,
            DayOfWeek::Friday => &mut self.friday,
            DayOfWeek::Saturday => &mut self.saturday,
            DayOfWeek::Sunday => &mut self.sunday,
        };
        *cell = shift;
    }

    /// Iterates `(day, shift)` pairs Monday through Sunday.
    pub fn shifts(&self) -> impl Iterator<Item = (DayOfWeek, ShiftType)> + '_ {
        DayOfWeek::ALL.into_iter().map(|day| (day, self.shift(day)))
    }

    /// Counts the days assigned `shift`.
    pub fn count(&self, shift: ShiftType) -> usize {
        self.shifts().filter(|(_, s)| *s == shift).count()
    }
}

fn default_staff_per_shift() -> u32 {
    3
}

fn default_off_days_per_staff() -> u32 {
    2
}

fn default_preferred_off_days() -> Vec<DayOfWeek> {
    vec![DayOfWeek::Saturday, DayOfWeek::Sunday]
}

/// Constraints used when generating a rota.
///
/// # Example
///
/// ```
/// use staffing_engine::models::{DayOfWeek, RotaSettings};
///
/// let settings = RotaSettings::default();
/// assert_eq!(settings.staff_per_shift, 3);
/// assert_eq!(settings.off_days_per_staff, 2);
/// assert_eq!(settings.preferred_off_days, vec![DayOfWeek::Saturday, DayOfWeek::Sunday]);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotaSettings {
    /// Target headcount per shift per day.
    #[serde(default = "default_staff_per_shift")]
    pub staff_per_shift: u32,
    /// Number of days off to give each staff member (0 to 7).
    #[serde(default = "default_off_days_per_staff")]
    pub off_days_per_staff: u32,
    /// Days to use for days off first, in priority order.
    #[serde(default = "default_preferred_off_days")]
    pub preferred_off_days: Vec<DayOfWeek>,
}

impl Default for RotaSettings {
    fn default() -> Self {
        Self {
            staff_per_shift: default_staff_per_shift(),
            off_days_per_staff: default_off_days_per_staff(),
            preferred_off_days: default_preferred_off_days(),
        }
    }
}

impl RotaSettings {
    /// Checks that the settings are within range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSettings`] if `off_days_per_staff` exceeds 7.
    pub fn validate(&self) -> EngineResult<()> {
        if self.off_days_per_staff > 7 {
            return Err(EngineError::InvalidSettings {
                field: "off_days_per_staff".to_string(),
                message: format!("must be between 0 and 7, got {}", self.off_days_per_staff),
            });
        }
        Ok(())
    }
}

/// Percentage of all rota cells held by each shift type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShiftPercentages {
    /// Share of morning cells.
    pub morning: Decimal,
    /// Share of afternoon cells.
    pub afternoon: Decimal,
    /// Share of night cells.
    pub night: Decimal,
    /// Share of off cells.
    pub off: Decimal,
    /// Share of leave cells.
    pub leave: Decimal,
}

/// Cell counts per shift type across a whole rota.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShiftStats {
    /// Morning cells.
    pub morning: u32,
    /// Afternoon cells.
    pub afternoon: u32,
    /// Night cells.
    pub night: u32,
    /// Off cells.
    pub off: u32,
    /// Leave cells.
    pub leave: u32,
    /// All cells.
    pub total: u32,
    /// Share of `total` per shift type, in percent. All zero for an empty rota.
    pub percentages: ShiftPercentages,
}

impl ShiftStats {
    /// Returns the count for `shift`.
    pub fn count(&self, shift: ShiftType) -> u32 {
        match shift {
            ShiftType::Morning => self.morning,
            ShiftType::Afternoon => self.afternoon,
            ShiftType::Night => self.night,
            ShiftType::Off => self.off,
            ShiftType::Leave => self.leave,
        }
    }

    /// Returns the percentage for `shift`.
    pub fn percentage(&self, shift: ShiftType) -> Decimal {
        match shift {
            ShiftType::Morning => self.percentages.morning,
            ShiftType::Afternoon => self.percentages.afternoon,
            ShiftType::Night => self.percentages.night,
            ShiftType::Off => self.percentages.off,
            ShiftType::Leave => self.percentages.leave,
        }
    }
}
