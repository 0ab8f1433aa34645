use chrono::NaiveDate;

/// Source of the current date, used to stamp new posts.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
