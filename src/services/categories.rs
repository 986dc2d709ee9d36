use crate::domain::category::NewCategory;
use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::CategoryForm;
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_category<R>(category_id: i32, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Ok(category.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// The parent must exist and must not be the category itself. Deeper cycles
/// are not checked.
fn ensure_valid_parent<R>(
    category: &NewCategory,
    own_id: Option<CategoryId>,
    repo: &R,
) -> ServiceResult<()>
where
    R: CategoryReader,
{
    let Some(parent_id) = category.parent_id else {
        return Ok(());
    };

    if own_id == Some(parent_id) {
        return Err(ServiceError::Form(
            "A category cannot be its own parent".to_string(),
        ));
    }

    match repo.get_category_by_id(parent_id) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ServiceError::Form(format!(
            "Parent category {parent_id} does not exist"
        ))),
        Err(e) => {
            log::error!("Failed to get parent category {parent_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_category<R>(form: CategoryForm, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
{
    let category = NewCategory::try_from(form)?;
    ensure_valid_parent(&category, None, repo)?;

    match repo.create_category(&category) {
        Ok(created) => {
            log::info!("Created category {}", created.id);
            Ok(created.into())
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn update_category<R>(
    category_id: i32,
    form: CategoryForm,
    repo: &R,
) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;
    let category = NewCategory::try_from(form)?;
    ensure_valid_parent(&category, Some(category_id), repo)?;

    match repo.update_category(category_id, &category) {
        Ok(Some(updated)) => Ok(updated.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a category. Resources and child categories pointing at it are
/// detached rather than removed.
pub fn delete_category<R>(category_id: i32, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_category(category_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => {
            log::info!("Deleted category {category_id}");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
