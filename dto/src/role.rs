use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The closed set of roles the backend may attach to an identity.
/// A user holds exactly one role at a time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Receptionist,
    Trainer,
    Member,
}

pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Receptionist, Role::Trainer, Role::Member];

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Receptionist => "receptionist",
            Role::Trainer => "trainer",
            Role::Member => "member",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Roles travel as strings over the wire and are matched case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "receptionist" => Ok(Role::Receptionist),
            "trainer" => Ok(Role::Trainer),
            "member" => Ok(Role::Member),
            _ => Err(UnknownRole),
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownRole;

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        value = {"admin", "Admin", "ADMIN", " receptionist ", "Trainer", "member"},
        expected_role = {Role::Admin, Role::Admin, Role::Admin, Role::Receptionist, Role::Trainer, Role::Member},
    )]
    fn should_parse_role_case_insensitively(value: &str, expected_role: Role) {
        assert_eq!(Ok(expected_role), value.parse());
    }

    #[parameterized(
        value = {"", "manager", "adminn"},
    )]
    fn should_reject_unknown_role(value: &str) {
        assert_eq!(Err(UnknownRole), value.parse::<Role>());
    }

    #[test]
    fn should_round_trip_through_as_str() {
        for role in ALL_ROLES {
            assert_eq!(Ok(*role), role.as_str().parse());
        }
    }
}
