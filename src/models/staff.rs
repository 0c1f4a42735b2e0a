//! Staff member model.
//!
//! A [`StaffMember`] is the immutable identity that rota entries, attendance
//! records and payroll records refer to by id.

use serde::{Deserialize, Serialize};

/// Represents a member of staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Job role (e.g., "Waiter", "Chef").
    #[serde(default)]
    pub role: String,
    /// Department the staff member belongs to (e.g., "Service", "Kitchen").
    #[serde(default)]
    pub department: String,
}

impl StaffMember {
    /// Creates a staff member with the given identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffing_engine::models::StaffMember;
    ///
    /// let member = StaffMember::new("1", "John Smith", "Waiter", "Service");
    /// assert_eq!(member.id, "1");
    /// assert_eq!(member.department, "Service");
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            department: department.into(),
        }
    }
}
