//! Storage for staff, leave, attendance, payroll and rota collections.
//!
//! The engine's operations work on plain slices and vectors; a
//! [`Repository`] is what holds those collections between calls. Callers
//! sharing one repository across tasks are expected to serialize writers
//! (the HTTP layer keeps it behind a `tokio::sync::RwLock`).

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, LeaveApplication, RotaEntry, StaffMember, StaffPayroll};
use crate::payroll::recompute;

/// Access to the staffing collections.
pub trait Repository: Send + Sync {
    /// All staff members, in insertion order.
    fn staff(&self) -> &[StaffMember];

    /// Adds a staff member.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateStaff`] if the id is already taken.
    fn add_staff(&mut self, member: StaffMember) -> EngineResult<()>;

    /// All leave applications.
    fn leave_applications(&self) -> &[LeaveApplication];

    /// Adds a leave application.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLeave`] for an inverted date range and
    /// [`EngineError::StaffNotFound`] for an unknown staff member.
    fn add_leave_application(&mut self, leave: LeaveApplication) -> EngineResult<()>;

    /// All attendance records.
    fn attendance_records(&self) -> &[AttendanceRecord];

    /// Mutable attendance records, for scanning.
    fn attendance_records_mut(&mut self) -> &mut Vec<AttendanceRecord>;

    /// All payroll records.
    fn payroll(&self) -> &[StaffPayroll];

    /// Mutable payroll records, for field updates.
    ///
    /// Writes should go through the `crate::payroll::update_*` operations,
    /// which recompute `calculated_pay`. A field written directly leaves the
    /// cached pay stale until [`recompute`] is called on the record.
    fn payroll_mut(&mut self) -> &mut [StaffPayroll];

    /// Adds a payroll record.
    ///
    /// Implementations store the record with `calculated_pay` recomputed
    /// from its fields, whatever cached value it arrived with.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateStaff`] if the staff member is already
    /// on payroll.
    fn add_payroll(&mut self, record: StaffPayroll) -> EngineResult<()>;

    /// The current rota.
    fn rota(&self) -> &[RotaEntry];

    /// Mutable rota, for manual edits.
    fn rota_mut(&mut self) -> &mut [RotaEntry];

    /// Replaces the current rota wholesale.
    fn replace_rota(&mut self, rota: Vec<RotaEntry>);

    /// Looks up a staff member by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StaffNotFound`] for an unknown id.
    fn find_staff(&self, staff_id: &str) -> EngineResult<&StaffMember> {
        self.staff()
            .iter()
            .find(|member| member.id == staff_id)
            .ok_or_else(|| EngineError::StaffNotFound {
                staff_id: staff_id.to_string(),
            })
    }
}

/// A [`Repository`] held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    staff: Vec<StaffMember>,
    leave: Vec<LeaveApplication>,
    attendance: Vec<AttendanceRecord>,
    payroll: Vec<StaffPayroll>,
    rota: Vec<RotaEntry>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `staff`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateStaff`] if two members share an id.
    pub fn with_staff(staff: Vec<StaffMember>) -> EngineResult<Self> {
        let mut repo = Self::new();
        for member in staff {
            repo.add_staff(member)?;
        }
        Ok(repo)
    }
}

impl Repository for InMemoryRepository {
    fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    fn add_staff(&mut self, member: StaffMember) -> EngineResult<()> {
        if self.staff.iter().any(|m| m.id == member.id) {
            return Err(EngineError::DuplicateStaff { staff_id: member.id });
        }
        self.staff.push(member);
        Ok(())
    }

    fn leave_applications(&self) -> &[LeaveApplication] {
        &self.leave
    }

    fn add_leave_application(&mut self, leave: LeaveApplication) -> EngineResult<()> {
        leave.validate()?;
        self.find_staff(&leave.staff_id)?;
        self.leave.push(leave);
        Ok(())
    }

    fn attendance_records(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    fn attendance_records_mut(&mut self) -> &mut Vec<AttendanceRecord> {
        &mut self.attendance
    }

    fn payroll(&self) -> &[StaffPayroll] {
        &self.payroll
    }

    fn payroll_mut(&mut self) -> &mut [StaffPayroll] {
        &mut self.payroll
    }

    fn add_payroll(&mut self, record: StaffPayroll) -> EngineResult<()> {
        if self.payroll.iter().any(|r| r.id == record.id) {
            return Err(EngineError::DuplicateStaff { staff_id: record.id });
        }
        let mut record = record;
        recompute(&mut record);
        self.payroll.push(record);
        Ok(())
    }

    fn rota(&self) -> &[RotaEntry] {
        &self.rota
    }

    fn rota_mut(&mut self) -> &mut [RotaEntry] {
        &mut self.rota
    }

    fn replace_rota(&mut self, rota: Vec<RotaEntry>) {
        self.rota = rota;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_all_periods;
    use crate::models::{LeaveStatus, LeaveType, RotaSettings};
    use rust_decimal::Decimal;
    use crate::rota::generate_rota;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_repo() -> InMemoryRepository {
        InMemoryRepository::with_staff(vec![
            StaffMember::new("1", "John Smith", "Waiter", "Service"),
            StaffMember::new("2", "Sarah Johnson", "Chef", "Kitchen"),
        ])
        .unwrap()
    }

    fn create_leave(staff_id: &str, start: NaiveDate, end: NaiveDate) -> LeaveApplication {
        LeaveApplication {
            id: "LV001".to_string(),
            staff_id: staff_id.to_string(),
            start_date: start,
            end_date: end,
            leave_type: LeaveType::Annual,
            status: LeaveStatus::Pending,
            days: 1,
            is_paid: true,
        }
    }

    #[test]
    fn test_duplicate_staff_rejected() {
        let mut repo = create_repo();
        let err = repo
            .add_staff(StaffMember::new("1", "Someone Else", "Chef", "Kitchen"))
            .unwrap_err();
        assert!(matches!(err, EngineError::DuplicateStaff { ref staff_id } if staff_id == "1"));
        assert_eq!(repo.staff().len(), 2);
    }

    #[test]
    fn test_find_staff() {
        let repo = create_repo();
        assert_eq!(repo.find_staff("2").unwrap().name, "Sarah Johnson");
        assert!(matches!(
            repo.find_staff("9"),
            Err(EngineError::StaffNotFound { .. })
        ));
    }

    #[test]
    fn test_leave_must_reference_known_staff() {
        let mut repo = create_repo();
        let err = repo
            .add_leave_application(create_leave("9", date(2025, 3, 10), date(2025, 3, 11)))
            .unwrap_err();
        assert!(matches!(err, EngineError::StaffNotFound { .. }));
        assert!(repo.leave_applications().is_empty());
    }

    #[test]
    fn test_inverted_leave_rejected() {
        let mut repo = create_repo();
        let err = repo
            .add_leave_application(create_leave("1", date(2025, 3, 11), date(2025, 3, 10)))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidLeave { .. }));
    }

    #[test]
    fn test_replace_rota_discards_previous() {
        let mut repo = create_repo();
        let rota = generate_rota(repo.staff(), &[], &RotaSettings::default()).unwrap();
        repo.replace_rota(rota);
        assert_eq!(repo.rota().len(), 2);

        repo.replace_rota(Vec::new());
        assert!(repo.rota().is_empty());
    }

    #[test]
    fn test_add_payroll_replaces_stale_cached_pay() {
        let mut repo = create_repo();
        let record: StaffPayroll = serde_json::from_str(
            r#"{
                "id": "1",
                "name": "John Smith",
                "pay_type": "hourly",
                "rate": "15",
                "hours_worked": "160",
                "days_worked": 22,
                "calculated_pay": { "daily": "1", "weekly": "1", "monthly": "1" }
            }"#,
        )
        .unwrap();

        repo.add_payroll(record).unwrap();

        let stored = &repo.payroll()[0];
        assert_eq!(stored.calculated_pay, Some(calculate_all_periods(stored)));
        assert_eq!(stored.calculated_pay.unwrap().monthly, Decimal::from(2400));
    }

    #[test]
    fn test_repository_usable_as_trait_object() {
        let repo: Box<dyn Repository> = Box::new(create_repo());
        assert_eq!(repo.staff().len(), 2);
    }
}
