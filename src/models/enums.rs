//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Loan status of a physical book copy.
/// DB stores the i16 code; the legacy char code is kept for display/export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum LoanStatus {
    Maintenance = 0,
    OnLoan = 1,
    Available = 2,
    Reserved = 3,
}

impl LoanStatus {
    /// Legacy single-char code ('m', 'o', 'a', 'r')
    pub fn as_code(&self) -> char {
        match self {
            LoanStatus::Maintenance => 'm',
            LoanStatus::OnLoan => 'o',
            LoanStatus::Available => 'a',
            LoanStatus::Reserved => 'r',
        }
    }
}

impl From<i16> for LoanStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => LoanStatus::OnLoan,
            2 => LoanStatus::Available,
            3 => LoanStatus::Reserved,
            _ => LoanStatus::Maintenance,
        }
    }
}

impl From<LoanStatus> for i16 {
    fn from(s: LoanStatus) -> Self {
        s as i16
    }
}

impl Default for LoanStatus {
    fn default() -> Self {
        LoanStatus::Maintenance
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoanStatus::Maintenance => "Maintenance",
            LoanStatus::OnLoan => "On loan",
            LoanStatus::Available => "Available",
            LoanStatus::Reserved => "Reserved",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_round_trip() {
        for status in [
            LoanStatus::Maintenance,
            LoanStatus::OnLoan,
            LoanStatus::Available,
            LoanStatus::Reserved,
        ] {
            assert_eq!(LoanStatus::from(i16::from(status)), status);
        }
    }

    #[test]
    fn unknown_code_falls_back_to_maintenance() {
        assert_eq!(LoanStatus::from(42), LoanStatus::Maintenance);
        assert_eq!(LoanStatus::default(), LoanStatus::Maintenance);
    }
}
