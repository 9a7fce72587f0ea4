//! Domain errors. Returned by services when a business rule is violated.
//!
//! Handlers classify them with the `is_*` predicates (or [`DomainError::kind`])
//! and turn them into responses, see [`crate::domain::error_response`].
//! Unexpected failures never use these variants.

use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ---------------------------------------------------------------- users
    #[error(
        "a user with this username does already exist [user id: {user_id}, username: {username}]"
    )]
    UsernameExists { user_id: i64, username: String },

    #[error("a user with this email does already exist [user id: {user_id}, email: {email}]")]
    UserEmailExists { user_id: i64, email: String },

    #[error("you need to specify a username [user id: {user_id}]")]
    NoUsername { user_id: i64 },

    #[error("you need to specify a username and a password")]
    NoUsernamePassword,

    #[error("this user does not exist [user id: {user_id}]")]
    UserDoesNotExist { user_id: i64 },

    #[error("could not get user ID")]
    CouldNotGetUserId,

    #[error("cannot delete last user")]
    CannotDeleteLastUser,

    // ---------------------------------------------------------- empty things
    /// An id (of anything) is 0 where a stored row is required.
    #[error("ID cannot be 0")]
    IdCannotBeZero,

    // ---------------------------------------------------------------- lists
    #[error("List does not exist [ID: {id}]")]
    ListDoesNotExist { id: i64 },

    /// The user is not the owner of the list (e.g. when deleting it).
    #[error("You need to be list owner to do that [ListID: {list_id}, UserID: {user_id}]")]
    NeedToBeListOwner { list_id: i64, user_id: i64 },

    // ----------------------------------------------------------- list items
    #[error("List item text cannot be empty.")]
    ListItemCannotBeEmpty,

    #[error("List item does not exist. [ID: {id}]")]
    ListItemDoesNotExist { id: i64 },

    #[error("You need to be item owner to do that [ItemID: {item_id}, UserID: {user_id}]")]
    NeedToBeItemOwner { item_id: i64, user_id: i64 },

    // ----------------------------------------------------------- namespaces
    #[error("Namespace does not exist [ID: {id}]")]
    NamespaceDoesNotExist { id: i64 },

    #[error(
        "You need to be namespace owner to do that [NamespaceID: {namespace_id}, UserID: {user_id}]"
    )]
    NeedToBeNamespaceOwner { namespace_id: i64, user_id: i64 },
}

/// Fieldless discriminant of [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UsernameExists,
    UserEmailExists,
    NoUsername,
    NoUsernamePassword,
    UserDoesNotExist,
    CouldNotGetUserId,
    CannotDeleteLastUser,
    IdCannotBeZero,
    ListDoesNotExist,
    NeedToBeListOwner,
    ListItemCannotBeEmpty,
    ListItemDoesNotExist,
    NeedToBeItemOwner,
    NamespaceDoesNotExist,
    NeedToBeNamespaceOwner,
}

impl DomainError {
    pub fn username_exists(user_id: i64, username: impl Into<String>) -> Self {
        Self::UsernameExists {
            user_id,
            username: username.into(),
        }
    }

    pub fn user_email_exists(user_id: i64, email: impl Into<String>) -> Self {
        Self::UserEmailExists {
            user_id,
            email: email.into(),
        }
    }

    pub fn no_username(user_id: i64) -> Self {
        Self::NoUsername { user_id }
    }

    pub fn no_username_password() -> Self {
        Self::NoUsernamePassword
    }

    pub fn user_does_not_exist(user_id: i64) -> Self {
        Self::UserDoesNotExist { user_id }
    }

    pub fn could_not_get_user_id() -> Self {
        Self::CouldNotGetUserId
    }

    pub fn cannot_delete_last_user() -> Self {
        Self::CannotDeleteLastUser
    }

    pub fn id_cannot_be_zero() -> Self {
        Self::IdCannotBeZero
    }

    pub fn list_does_not_exist(id: i64) -> Self {
        Self::ListDoesNotExist { id }
    }

    pub fn need_to_be_list_owner(list_id: i64, user_id: i64) -> Self {
        Self::NeedToBeListOwner { list_id, user_id }
    }

    pub fn list_item_cannot_be_empty() -> Self {
        Self::ListItemCannotBeEmpty
    }

    pub fn list_item_does_not_exist(id: i64) -> Self {
        Self::ListItemDoesNotExist { id }
    }

    pub fn need_to_be_item_owner(item_id: i64, user_id: i64) -> Self {
        Self::NeedToBeItemOwner { item_id, user_id }
    }

    pub fn namespace_does_not_exist(id: i64) -> Self {
        Self::NamespaceDoesNotExist { id }
    }

    pub fn need_to_be_namespace_owner(namespace_id: i64, user_id: i64) -> Self {
        Self::NeedToBeNamespaceOwner {
            namespace_id,
            user_id,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UsernameExists { .. } => ErrorKind::UsernameExists,
            Self::UserEmailExists { .. } => ErrorKind::UserEmailExists,
            Self::NoUsername { .. } => ErrorKind::NoUsername,
            Self::NoUsernamePassword => ErrorKind::NoUsernamePassword,
            Self::UserDoesNotExist { .. } => ErrorKind::UserDoesNotExist,
            Self::CouldNotGetUserId => ErrorKind::CouldNotGetUserId,
            Self::CannotDeleteLastUser => ErrorKind::CannotDeleteLastUser,
            Self::IdCannotBeZero => ErrorKind::IdCannotBeZero,
            Self::ListDoesNotExist { .. } => ErrorKind::ListDoesNotExist,
            Self::NeedToBeListOwner { .. } => ErrorKind::NeedToBeListOwner,
            Self::ListItemCannotBeEmpty => ErrorKind::ListItemCannotBeEmpty,
            Self::ListItemDoesNotExist { .. } => ErrorKind::ListItemDoesNotExist,
            Self::NeedToBeItemOwner { .. } => ErrorKind::NeedToBeItemOwner,
            Self::NamespaceDoesNotExist { .. } => ErrorKind::NamespaceDoesNotExist,
            Self::NeedToBeNamespaceOwner { .. } => ErrorKind::NeedToBeNamespaceOwner,
        }
    }
}

/// Kind of `err` if it is a [`DomainError`]. Does not walk `source()`.
pub fn kind_of(err: &(dyn StdError + 'static)) -> Option<ErrorKind> {
    err.downcast_ref::<DomainError>().map(DomainError::kind)
}

fn is_kind(err: &(dyn StdError + 'static), kind: ErrorKind) -> bool {
    kind_of(err) == Some(kind)
}

/// Checks if an error is a [`DomainError::UsernameExists`].
pub fn is_username_exists(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::UsernameExists)
}

/// Checks if an error is a [`DomainError::UserEmailExists`].
pub fn is_user_email_exists(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::UserEmailExists)
}

/// Checks if an error is a [`DomainError::NoUsername`].
pub fn is_no_username(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::NoUsername)
}

/// Checks if an error is a [`DomainError::NoUsernamePassword`].
pub fn is_no_username_password(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::NoUsernamePassword)
}

/// Checks if an error is a [`DomainError::UserDoesNotExist`].
pub fn is_user_does_not_exist(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::UserDoesNotExist)
}

/// Checks if an error is a [`DomainError::CouldNotGetUserId`].
pub fn is_could_not_get_user_id(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::CouldNotGetUserId)
}

/// Checks if an error is a [`DomainError::CannotDeleteLastUser`].
pub fn is_cannot_delete_last_user(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::CannotDeleteLastUser)
}

/// Checks if an error is a [`DomainError::IdCannotBeZero`].
pub fn is_id_cannot_be_zero(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::IdCannotBeZero)
}

/// Checks if an error is a [`DomainError::ListDoesNotExist`].
pub fn is_list_does_not_exist(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::ListDoesNotExist)
}

/// Checks if an error is a [`DomainError::NeedToBeListOwner`].
pub fn is_need_to_be_list_owner(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::NeedToBeListOwner)
}

/// Checks if an error is a [`DomainError::ListItemCannotBeEmpty`].
pub fn is_list_item_cannot_be_empty(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::ListItemCannotBeEmpty)
}

/// Checks if an error is a [`DomainError::ListItemDoesNotExist`].
pub fn is_list_item_does_not_exist(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::ListItemDoesNotExist)
}

/// Checks if an error is a [`DomainError::NeedToBeItemOwner`].
pub fn is_need_to_be_item_owner(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::NeedToBeItemOwner)
}

/// Checks if an error is a [`DomainError::NamespaceDoesNotExist`].
pub fn is_namespace_does_not_exist(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::NamespaceDoesNotExist)
}

/// Checks if an error is a [`DomainError::NeedToBeNamespaceOwner`].
pub fn is_need_to_be_namespace_owner(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::NeedToBeNamespaceOwner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Predicate = fn(&(dyn StdError + 'static)) -> bool;

    const PREDICATES: [(ErrorKind, Predicate); 15] = [
        (ErrorKind::UsernameExists, is_username_exists),
        (ErrorKind::UserEmailExists, is_user_email_exists),
        (ErrorKind::NoUsername, is_no_username),
        (ErrorKind::NoUsernamePassword, is_no_username_password),
        (ErrorKind::UserDoesNotExist, is_user_does_not_exist),
        (ErrorKind::CouldNotGetUserId, is_could_not_get_user_id),
        (ErrorKind::CannotDeleteLastUser, is_cannot_delete_last_user),
        (ErrorKind::IdCannotBeZero, is_id_cannot_be_zero),
        (ErrorKind::ListDoesNotExist, is_list_does_not_exist),
        (ErrorKind::NeedToBeListOwner, is_need_to_be_list_owner),
        (ErrorKind::ListItemCannotBeEmpty, is_list_item_cannot_be_empty),
        (ErrorKind::ListItemDoesNotExist, is_list_item_does_not_exist),
        (ErrorKind::NeedToBeItemOwner, is_need_to_be_item_owner),
        (ErrorKind::NamespaceDoesNotExist, is_namespace_does_not_exist),
        (ErrorKind::NeedToBeNamespaceOwner, is_need_to_be_namespace_owner),
    ];

    #[rstest]
    #[case::username_exists(
        DomainError::username_exists(1, "alice"),
        ErrorKind::UsernameExists,
        "a user with this username does already exist [user id: 1, username: alice]"
    )]
    #[case::user_email_exists(
        DomainError::user_email_exists(2, "a@example.com"),
        ErrorKind::UserEmailExists,
        "a user with this email does already exist [user id: 2, email: a@example.com]"
    )]
    #[case::no_username(
        DomainError::no_username(3),
        ErrorKind::NoUsername,
        "you need to specify a username [user id: 3]"
    )]
    #[case::no_username_password(
        DomainError::no_username_password(),
        ErrorKind::NoUsernamePassword,
        "you need to specify a username and a password"
    )]
    #[case::user_does_not_exist(
        DomainError::user_does_not_exist(42),
        ErrorKind::UserDoesNotExist,
        "this user does not exist [user id: 42]"
    )]
    #[case::could_not_get_user_id(
        DomainError::could_not_get_user_id(),
        ErrorKind::CouldNotGetUserId,
        "could not get user ID"
    )]
    #[case::cannot_delete_last_user(
        DomainError::cannot_delete_last_user(),
        ErrorKind::CannotDeleteLastUser,
        "cannot delete last user"
    )]
    #[case::id_cannot_be_zero(
        DomainError::id_cannot_be_zero(),
        ErrorKind::IdCannotBeZero,
        "ID cannot be 0"
    )]
    #[case::list_does_not_exist(
        DomainError::list_does_not_exist(5),
        ErrorKind::ListDoesNotExist,
        "List does not exist [ID: 5]"
    )]
    #[case::need_to_be_list_owner(
        DomainError::need_to_be_list_owner(7, 3),
        ErrorKind::NeedToBeListOwner,
        "You need to be list owner to do that [ListID: 7, UserID: 3]"
    )]
    #[case::list_item_cannot_be_empty(
        DomainError::list_item_cannot_be_empty(),
        ErrorKind::ListItemCannotBeEmpty,
        "List item text cannot be empty."
    )]
    #[case::list_item_does_not_exist(
        DomainError::list_item_does_not_exist(9),
        ErrorKind::ListItemDoesNotExist,
        "List item does not exist. [ID: 9]"
    )]
    #[case::need_to_be_item_owner(
        DomainError::need_to_be_item_owner(11, 4),
        ErrorKind::NeedToBeItemOwner,
        "You need to be item owner to do that [ItemID: 11, UserID: 4]"
    )]
    #[case::namespace_does_not_exist(
        DomainError::namespace_does_not_exist(13),
        ErrorKind::NamespaceDoesNotExist,
        "Namespace does not exist [ID: 13]"
    )]
    #[case::need_to_be_namespace_owner(
        DomainError::need_to_be_namespace_owner(17, 6),
        ErrorKind::NeedToBeNamespaceOwner,
        "You need to be namespace owner to do that [NamespaceID: 17, UserID: 6]"
    )]
    fn test_kind_message_and_predicates(
        #[case] err: DomainError,
        #[case] kind: ErrorKind,
        #[case] message: &str,
    ) {
        assert_eq!(err.kind(), kind);
        assert_eq!(err.to_string(), message);
        for (predicate_kind, predicate) in PREDICATES {
            assert_eq!(
                predicate(&err),
                predicate_kind == kind,
                "predicate for {predicate_kind:?} on {kind:?}"
            );
        }
    }

    #[test]
    fn test_message_is_pure_function_of_fields() {
        let a = DomainError::need_to_be_namespace_owner(1, 2);
        let b = DomainError::need_to_be_namespace_owner(1, 2);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(
            a.to_string(),
            DomainError::need_to_be_namespace_owner(2, 1).to_string()
        );
    }

    #[test]
    fn test_predicates_reject_foreign_errors() {
        let io = std::io::Error::other("disk on fire");
        for (kind, predicate) in PREDICATES {
            assert!(!predicate(&io), "{kind:?} matched an io::Error");
        }
        assert_eq!(kind_of(&io), None);
    }

    #[test]
    fn test_predicates_through_boxed_and_anyhow() {
        let boxed: Box<dyn StdError + Send + Sync> =
            Box::new(DomainError::list_does_not_exist(1));
        assert!(is_list_does_not_exist(&*boxed));
        assert!(!is_list_item_does_not_exist(&*boxed));

        let any = anyhow::Error::new(DomainError::cannot_delete_last_user());
        assert!(is_cannot_delete_last_user(&*any));
    }

    #[test]
    fn test_source_chain_not_walked() {
        #[derive(Debug, Error)]
        #[error("wrapped")]
        struct Wrapper(#[source] DomainError);

        let wrapped = Wrapper(DomainError::id_cannot_be_zero());
        assert!(!is_id_cannot_be_zero(&wrapped));
    }
}
