use crate::domain::AppError;

/// Object storage holding remote state files.
pub trait ObjectStore {
    /// List every key under `prefix`, following pagination to the end.
    fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, AppError>;

    /// Server-side copy of `from_key` to `to_key` within `bucket`.
    fn copy_object(&self, bucket: &str, from_key: &str, to_key: &str) -> Result<(), AppError>;

    /// Delete a single object. Deleting a missing key is not an error.
    fn delete_object(&self, bucket: &str, key: &str) -> Result<(), AppError>;
}
