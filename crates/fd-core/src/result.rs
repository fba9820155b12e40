//! # AppResult
//!
//! The success/failure container returned across layer boundaries.

use crate::error::{AppError, ErrorCode};

/// Outcome of a service operation: either a value or an [`AppError`].
///
/// Expected failures (e.g. "not found") travel through this type instead of
/// panics. Reading the value of a failed result is a programmer error and
/// panics.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct AppResult<T> {
    inner: Result<T, AppError>,
}

impl<T> AppResult<T> {
    pub fn ok(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    pub fn err(error: AppError) -> Self {
        Self { inner: Err(error) }
    }

    /// Shorthand for a failed result holding a fresh root-cause error.
    pub fn failure(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::err(AppError::new(code, message))
    }

    pub fn is_error(&self) -> bool {
        self.inner.is_err()
    }

    /// Borrows the success value.
    ///
    /// # Panics
    /// Panics when the result holds an error.
    pub fn value(&self) -> &T {
        match &self.inner {
            Ok(value) => value,
            Err(error) => panic!(
                "Error is set on the object. Value cannot be returned. Error message: {}",
                error.message()
            ),
        }
    }

    /// Takes the success value.
    ///
    /// # Panics
    /// Panics when the result holds an error.
    pub fn into_value(self) -> T {
        match self.inner {
            Ok(value) => value,
            Err(error) => panic!(
                "Error is set on the object. Value cannot be returned. Error message: {}",
                error.message()
            ),
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        self.inner.as_ref().err()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AppResult<U> {
        AppResult {
            inner: self.inner.map(f),
        }
    }

    /// Converts into a std `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<T, AppError> {
        self.inner
    }
}

impl<T> From<Result<T, AppError>> for AppResult<T> {
    fn from(inner: Result<T, AppError>) -> Self {
        Self { inner }
    }
}

impl<T> From<AppResult<T>> for Result<T, AppError> {
    fn from(result: AppResult<T>) -> Self {
        result.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_result_exposes_value_and_no_error() {
        let result = AppResult::ok(7);
        assert!(!result.is_error());
        assert_eq!(*result.value(), 7);
        assert!(result.error().is_none());
    }

    #[test]
    fn failed_result_exposes_error() {
        let result: AppResult<u32> = AppResult::failure(ErrorCode::Error, "Not found");
        assert!(result.is_error());
        assert_eq!(result.error().map(AppError::message), Some("Not found"));
    }

    #[test]
    #[should_panic(expected = "Value cannot be returned. Error message: Not found")]
    fn value_on_failed_result_panics() {
        let result: AppResult<u32> = AppResult::failure(ErrorCode::Error, "Not found");
        let _ = result.value();
    }

    #[test]
    #[should_panic(expected = "Error message: gone")]
    fn into_value_on_failed_result_panics() {
        let result: AppResult<String> = AppResult::err(AppError::from_message("gone"));
        let _ = result.into_value();
    }

    #[test]
    fn map_only_touches_success() {
        let doubled = AppResult::ok(2).map(|v| v * 2);
        assert_eq!(doubled.into_value(), 4);

        let failed: AppResult<i32> = AppResult::err(AppError::from_message("nope"));
        let mapped = failed.map(|v| v * 2);
        assert_eq!(mapped.error().map(AppError::message), Some("nope"));
    }

    #[test]
    fn converts_to_std_result() {
        fn inner() -> Result<u8, AppError> {
            let v = AppResult::ok(1u8).into_result()?;
            let w: Result<u8, AppError> = AppResult::<u8>::failure(ErrorCode::Error, "stop").into();
            Ok(v + w?)
        }
        assert_eq!(inner().unwrap_err().message(), "stop");
    }
}
