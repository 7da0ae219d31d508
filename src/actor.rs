//! Actors and the roles they act under
use super::operation::OperationKind;
use super::utils::new_uuid_to_bech32;
use std::fmt;

#[derive(minicbor::Encode, minicbor::Decode, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    #[n(0)]
    Staff,
    #[n(1)]
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    identity: String,
    role: Role,
}

impl Role {
    /// The single policy table deciding which roles may run which operations.
    pub fn can_perform(&self, kind: OperationKind) -> bool {
        match kind {
            OperationKind::Reprice => *self == Role::Admin,
            OperationKind::AddStock | OperationKind::RemoveStock | OperationKind::Relocate => true,
        }
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Actor {
    pub fn new(identity: impl Into<String>, role: Role) -> Self {
        Self {
            identity: identity.into(),
            role,
        }
    }
    /// Construct an actor with a freshly generated `user_` address as its identity
    pub fn generate(role: Role) -> anyhow::Result<Self> {
        Ok(Self::new(new_uuid_to_bech32("user_")?, role))
    }
    pub fn identity(&self) -> &str {
        &self.identity
    }
    pub fn role(&self) -> Role {
        self.role
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User - {}, role - {}", self.identity, self.role)
    }
}
