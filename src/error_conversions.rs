//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the `From` impls connecting them live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod service {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::categories::CategoryFormError;
    use crate::forms::contacts::ContactFormError;
    use crate::forms::resources::ResourceFormError;
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::TypeConstraint(val.to_string())
        }
    }

    impl From<ResourceFormError> for ServiceError {
        fn from(val: ResourceFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<ContactFormError> for ServiceError {
        fn from(val: ContactFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<CategoryFormError> for ServiceError {
        fn from(val: CategoryFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
