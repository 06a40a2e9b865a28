//! Role gating applied after a principal has been resolved.
//!
//! These checks never see an anonymous caller: token resolution rejects with
//! `Unauthenticated` first, so a `Forbidden` or `NotOwner` answer only ever
//! goes to a caller holding a valid identity.

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;

/// Privilege a protected operation demands from its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Any resolved principal.
    Authenticated,
    /// A principal whose admin flag is set.
    Admin,
}

impl Requirement {
    pub fn is_satisfied_by(&self, principal: &User) -> bool {
        match self {
            Requirement::Authenticated => true,
            Requirement::Admin => principal.is_admin,
        }
    }
}

/// Hand the principal back if it meets `requirement`.
///
/// # Errors
/// * `Forbidden` - Requirement not met
pub fn require(principal: User, requirement: Requirement) -> Result<User, AuthError> {
    if requirement.is_satisfied_by(&principal) {
        Ok(principal)
    } else {
        tracing::info!(
            user_id = %principal.id,
            requirement = ?requirement,
            "Access denied"
        );
        Err(AuthError::Forbidden)
    }
}

/// Allow the record's owner or any admin.
///
/// # Errors
/// * `NotOwner` - Principal neither owns the record nor is an admin
pub fn require_owner_or_admin(principal: &User, owner: &UserId) -> Result<(), AuthError> {
    if principal.is_admin || principal.id == *owner {
        Ok(())
    } else {
        tracing::info!(
            user_id = %principal.id,
            owner_id = %owner,
            "Access denied: not the record owner"
        );
        Err(AuthError::NotOwner)
    }
}
