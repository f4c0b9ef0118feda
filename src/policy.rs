//! Access policy engine.
//!
//! A single pure function decides every authorization question in the
//! system: given the acting user, the resource kind, the attempted action,
//! and (where ownership matters) the user reference on the record, it either
//! allows the operation or returns the error the caller should surface.
//! Handlers never compare roles directly.

use crate::error::{AppError, ErrorCode};
use crate::models::Role;

/// Resource kinds subject to authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Dashboard,
    Team,
    Shift,
    Reservation,
    Report,
    TimeEntry,
    Deposit,
    UserAccount,
}

/// Actions a handler can attempt against a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    List,
    Delete,
    Toggle,
}

/// The authenticated user on whose behalf a request runs
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// Decide whether `actor` may perform `action` on `resource`.
///
/// `owner` is the user id referenced by the record in question: the payload
/// `user_id` for creates, the stored row's `user_id` for deletes, and the
/// target account id for user deletion. Pass `None` where the resource has
/// no ownership dimension.
pub fn authorize(
    actor: &Actor,
    resource: Resource,
    action: Action,
    owner: Option<i64>,
) -> Result<(), AppError> {
    use Action::*;
    use Resource::*;

    let allowed = match (resource, action) {
        // Any authenticated user may read the dashboard and the team
        // directory, and may see the shift plan.
        (Dashboard, List) | (Team, List) | (Shift, List) => true,

        (Shift, Create) | (Shift, Delete) => actor.role.is_lead_or_manager(),

        (Reservation, Create) | (Reservation, List) | (Reservation, Delete) => {
            actor.role.is_lead_or_manager()
        }

        (Report, Create) | (Report, List) | (Report, Delete) => actor.role.is_lead_or_manager(),

        // Waiters may file hours only for themselves; leads and managers
        // for anyone.
        (TimeEntry, Create) => match actor.role {
            Role::ShiftLead | Role::Manager => true,
            Role::Waiter => owner == Some(actor.id),
        },
        // Every role may list; the handler scopes a waiter's listing to
        // their own rows.
        (TimeEntry, List) => true,
        (TimeEntry, Delete) => actor.role.is_lead_or_manager() || owner == Some(actor.id),

        (Deposit, Create) | (Deposit, List) | (Deposit, Delete) | (Deposit, Toggle) => {
            actor.role == Role::Manager
        }

        (UserAccount, Create) | (UserAccount, List) => actor.role == Role::Manager,
        (UserAccount, Delete) => {
            // Self-delete is denied for everyone, managers included.
            if owner == Some(actor.id) {
                return Err(AppError::new(ErrorCode::CannotDeleteSelf));
            }
            actor.role == Role::Manager
        }

        // Remaining combinations are not operations the API exposes.
        (Dashboard, _) | (Team, _) | (Shift, Toggle) | (Reservation, Toggle)
        | (Report, Toggle) | (TimeEntry, Toggle) | (UserAccount, Toggle) => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::PermissionDenied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(id: i64, role: Role) -> Actor {
        Actor {
            id,
            username: format!("user{id}"),
            role,
        }
    }

    const ALL_ROLES: [Role; 3] = [Role::Waiter, Role::ShiftLead, Role::Manager];

    #[test]
    fn test_everyone_reads_dashboard_team_and_shifts() {
        for role in ALL_ROLES {
            let a = actor(1, role);
            assert!(authorize(&a, Resource::Dashboard, Action::List, None).is_ok());
            assert!(authorize(&a, Resource::Team, Action::List, None).is_ok());
            assert!(authorize(&a, Resource::Shift, Action::List, None).is_ok());
        }
    }

    #[test]
    fn test_shift_mutation_requires_lead_or_manager() {
        for role in ALL_ROLES {
            let a = actor(1, role);
            let expected = role != Role::Waiter;
            assert_eq!(authorize(&a, Resource::Shift, Action::Create, None).is_ok(), expected);
            assert_eq!(authorize(&a, Resource::Shift, Action::Delete, None).is_ok(), expected);
        }
    }

    #[test]
    fn test_reservations_and_reports_closed_to_waiters() {
        for resource in [Resource::Reservation, Resource::Report] {
            for action in [Action::Create, Action::List, Action::Delete] {
                for role in ALL_ROLES {
                    let a = actor(1, role);
                    let expected = role != Role::Waiter;
                    assert_eq!(
                        authorize(&a, resource, action, None).is_ok(),
                        expected,
                        "{resource:?}/{action:?} as {role:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_waiter_hours_limited_to_self() {
        let waiter = actor(7, Role::Waiter);
        assert!(authorize(&waiter, Resource::TimeEntry, Action::Create, Some(7)).is_ok());
        assert!(authorize(&waiter, Resource::TimeEntry, Action::Create, Some(8)).is_err());
        assert!(authorize(&waiter, Resource::TimeEntry, Action::Delete, Some(7)).is_ok());
        assert!(authorize(&waiter, Resource::TimeEntry, Action::Delete, Some(8)).is_err());
    }

    #[test]
    fn test_lead_and_manager_hours_unrestricted() {
        for role in [Role::ShiftLead, Role::Manager] {
            let a = actor(1, role);
            assert!(authorize(&a, Resource::TimeEntry, Action::Create, Some(99)).is_ok());
            assert!(authorize(&a, Resource::TimeEntry, Action::Delete, Some(99)).is_ok());
        }
    }

    #[test]
    fn test_deposits_are_manager_only() {
        for action in [Action::Create, Action::List, Action::Delete, Action::Toggle] {
            for role in ALL_ROLES {
                let a = actor(1, role);
                assert_eq!(
                    authorize(&a, Resource::Deposit, action, None).is_ok(),
                    role == Role::Manager
                );
            }
        }
    }

    #[test]
    fn test_user_admin_is_manager_only() {
        for role in ALL_ROLES {
            let a = actor(1, role);
            assert_eq!(
                authorize(&a, Resource::UserAccount, Action::Create, None).is_ok(),
                role == Role::Manager
            );
            assert_eq!(
                authorize(&a, Resource::UserAccount, Action::Delete, Some(2)).is_ok(),
                role == Role::Manager
            );
        }
    }

    #[test]
    fn test_self_delete_always_denied() {
        for role in ALL_ROLES {
            let a = actor(5, role);
            let err = authorize(&a, Resource::UserAccount, Action::Delete, Some(5)).unwrap_err();
            assert_eq!(err.code, ErrorCode::CannotDeleteSelf);
        }
    }

    #[test]
    fn test_unexposed_combinations_denied() {
        let manager = actor(1, Role::Manager);
        assert!(authorize(&manager, Resource::Shift, Action::Toggle, None).is_err());
        assert!(authorize(&manager, Resource::Dashboard, Action::Create, None).is_err());
    }
}
