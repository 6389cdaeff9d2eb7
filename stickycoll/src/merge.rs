use crate::error::ContainerError;
use crate::storage::{Dynamic, Fixed};

fn first_error<'a, I>(errors: I) -> Result<(), ContainerError>
where
    I: IntoIterator<Item = Option<&'a ContainerError>>,
{
    match errors.into_iter().flatten().next() {
        Some(error) => Err(error.clone()),
        None => Ok(()),
    }
}

impl<T: Clone + Default + PartialEq> Dynamic<T> {
    /// Builds a new container holding the elements of `first` followed by those of `second`.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failed input.
    pub fn merge(first: &Self, second: &Self) -> Result<Self, ContainerError> {
        first_error([first.error(), second.error()])?;

        let mut merged = Self::new();
        merged.grow(first.len() + second.len());
        merged.append(first.iterating().forward());
        merged.append(second.iterating().forward());
        first_error([merged.error()])?;
        Ok(merged)
    }
}

impl<T: Clone + Default + PartialEq> Fixed<T> {
    /// Builds a new fixed container, sized exactly to hold the elements of
    /// `first` followed by those of `second`.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failed input.
    pub fn merge(first: &Self, second: &Self) -> Result<Self, ContainerError> {
        first_error([first.error(), second.error()])?;

        let total = first.len() + second.len();
        let capacity = isize::try_from(total).map_err(|_| ContainerError::CapacityExceeded {
            capacity: first.capacity().saturating_add(second.capacity()),
            requested: total,
        })?;
        let mut merged = Self::try_new(capacity, first.native().to_vec())?;
        merged.append(second.iterating().forward());
        first_error([merged.error()])?;
        Ok(merged)
    }
}
