//! Viewer role. Client-side only; resets to `User` on reload.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::User, Self::Admin];

    /// Whether status-transition controls are shown for this role.
    #[must_use]
    pub fn can_transition(self) -> bool {
        matches!(self, Self::Admin)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// Role holder shared through context as `RwSignal<RoleState>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleState {
    role: Role,
}

impl RoleState {
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }
}
