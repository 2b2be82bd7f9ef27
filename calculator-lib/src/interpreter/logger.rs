use std::error::Error;

/// Sink for diagnostic messages produced while evaluating expressions.
///
/// Messages carry a tag naming the part of the engine they come from.
/// Nothing logged here affects the result of an evaluation.
pub trait Logger {
    fn debug(&self, tag: &str, message: &str);
    fn info(&self, tag: &str, message: &str);
    fn warn(&self, tag: &str, message: &str);
    fn error(&self, tag: &str, message: &str, cause: Option<&dyn Error>);
}

/// Forwards to the [`log`] facade, using the tag as the log target.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeLogger;

impl Logger for FacadeLogger {
    fn debug(&self, tag: &str, message: &str) {
        log::debug!(target: tag, "{}", message);
    }

    fn info(&self, tag: &str, message: &str) {
        log::info!(target: tag, "{}", message);
    }

    fn warn(&self, tag: &str, message: &str) {
        log::warn!(target: tag, "{}", message);
    }

    fn error(&self, tag: &str, message: &str, cause: Option<&dyn Error>) {
        match cause {
            Some(cause) => log::error!(target: tag, "{}: {}", message, cause),
            None => log::error!(target: tag, "{}", message),
        }
    }
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _tag: &str, _message: &str) {}
    fn info(&self, _tag: &str, _message: &str) {}
    fn warn(&self, _tag: &str, _message: &str) {}
    fn error(&self, _tag: &str, _message: &str, _cause: Option<&dyn Error>) {}
}

impl<L: Logger + ?Sized> Logger for &L {
    fn debug(&self, tag: &str, message: &str) {
        (**self).debug(tag, message)
    }

    fn info(&self, tag: &str, message: &str) {
        (**self).info(tag, message)
    }

    fn warn(&self, tag: &str, message: &str) {
        (**self).warn(tag, message)
    }

    fn error(&self, tag: &str, message: &str, cause: Option<&dyn Error>) {
        (**self).error(tag, message, cause)
    }
}
