use shared_types::AppError;
use shared_ui::{ToastOptions, Toasts};

use super::{NotificationSink, Translator};

/// `NotificationSink` that shows toasts. Build it inside a component under
/// `ToastProvider`, from the handle returned by `use_toast`.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: Toasts,
}

impl ToastNotifier {
    pub fn new(toasts: Toasts) -> Self {
        Self { toasts }
    }
}

impl NotificationSink for ToastNotifier {
    fn error(&self, message: String) {
        self.toasts.error(message, ToastOptions::new());
    }

    fn success(&self, message: String) {
        self.toasts.success(message, ToastOptions::new());
    }
}

/// Text to show for a backend failure.
///
/// A backend error code with a `backendErrors.<code>` translation wins;
/// otherwise the generic message is used so transport noise never reaches
/// the user.
pub fn error_message(err: &AppError, translator: &dyn Translator) -> String {
    err.code
        .as_deref()
        .and_then(|code| translator.lookup(&format!("backendErrors.{code}")))
        .unwrap_or_else(|| translator.t("errors.generic"))
}

/// Log `err` and surface it through `sink`.
pub fn report_error(err: &AppError, sink: &dyn NotificationSink, translator: &dyn Translator) {
    tracing::error!(error = %err, "Request failed");
    sink.error(error_message(err, translator));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::RecordingSink;
    use crate::services::{Catalog, Locale};

    #[test]
    fn known_code_uses_backend_translation() {
        let err = AppError::forbidden("nope").with_code("ERR_NO_PERMISSION");
        assert_eq!(
            error_message(&err, &Catalog::new(Locale::En)),
            "You don't have permission to access this resource."
        );
    }

    #[test]
    fn unknown_code_falls_back_to_generic() {
        let err = AppError::internal("boom").with_code("ERR_WHATEVER");
        assert_eq!(
            error_message(&err, &Catalog::new(Locale::En)),
            "Something went wrong, please try again."
        );
    }

    #[test]
    fn missing_code_falls_back_to_generic() {
        let err = AppError::unavailable("connection refused");
        assert_eq!(
            error_message(&err, &Catalog::new(Locale::PtBr)),
            "Ocorreu um erro, tente novamente."
        );
    }

    #[test]
    fn report_error_pushes_one_toast() {
        let sink = RecordingSink::default();
        report_error(&AppError::unavailable("down"), &sink, &Catalog::default());
        assert_eq!(sink.errors.borrow().len(), 1);
        assert!(sink.successes.borrow().is_empty());
    }
}
