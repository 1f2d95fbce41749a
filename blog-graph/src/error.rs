//! Engine errors.
use async_graphql::ErrorExtensions;
use displaydoc::Display;
use thiserror::Error;

/// Gives each error the machine readable code exposed to clients under
/// `extensions.code`.
pub(crate) trait ErrorExtension {
    fn extension_code(&self) -> &'static str;
}

/// Error types for mutations.
///
/// Every variant is raised before the store is touched: a failed mutation
/// never appends a record.
#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MutationError {
    /// {reason}
    Conflict {
        /// What uniqueness constraint was violated.
        reason: &'static str,
    },

    /// {reason}
    NotFound {
        /// Which reference could not be resolved.
        reason: &'static str,
    },
}

impl MutationError {
    pub(crate) fn email_taken() -> Self {
        MutationError::Conflict {
            reason: "email taken",
        }
    }

    pub(crate) fn author_not_found() -> Self {
        MutationError::NotFound {
            reason: "author does not exist",
        }
    }

    pub(crate) fn author_or_post_invalid() -> Self {
        MutationError::NotFound {
            reason: "author or post invalid",
        }
    }
}

impl ErrorExtension for MutationError {
    fn extension_code(&self) -> &'static str {
        match self {
            MutationError::Conflict { .. } => "CONFLICT",
            MutationError::NotFound { .. } => "NOT_FOUND",
        }
    }
}

/// Raised when a mandatory relation points at a record that is not in the store.
///
/// Write-time validation makes this unreachable for data entering through
/// mutations.
#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntegrityError {
    /// {entity}.{field} references missing {target} '{id}'
    DanglingReference {
        /// Type of the parent record.
        entity: &'static str,
        /// Relation being resolved.
        field: &'static str,
        /// Type of the referenced record.
        target: &'static str,
        /// The foreign key that did not resolve.
        id: String,
    },
}

impl ErrorExtension for IntegrityError {
    fn extension_code(&self) -> &'static str {
        match self {
            IntegrityError::DanglingReference { .. } => "DANGLING_REFERENCE",
        }
    }
}

impl ErrorExtensions for MutationError {
    fn extend(&self) -> async_graphql::Error {
        to_graphql_error(self)
    }
}

impl ErrorExtensions for IntegrityError {
    fn extend(&self) -> async_graphql::Error {
        to_graphql_error(self)
    }
}

fn to_graphql_error<E>(error: &E) -> async_graphql::Error
where
    E: ErrorExtension + std::fmt::Display,
{
    async_graphql::Error::new(error.to_string())
        .extend_with(|_, extensions| extensions.set("code", error.extension_code()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_displays_the_reason() {
        assert_eq!(MutationError::email_taken().to_string(), "email taken");
        assert_eq!(
            MutationError::author_or_post_invalid().to_string(),
            "author or post invalid"
        );
    }

    #[test]
    fn it_displays_dangling_references() {
        let error = IntegrityError::DanglingReference {
            entity: "Post",
            field: "author",
            target: "User",
            id: "42".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Post.author references missing User '42'"
        );
    }

    #[test]
    fn it_sets_the_extension_code() {
        let error = MutationError::author_not_found().extend();
        assert_eq!(error.message, "author does not exist");
        let extensions = error.extensions.expect("extensions are set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("NOT_FOUND"))
        );
    }
}
