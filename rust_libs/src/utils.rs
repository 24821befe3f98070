use crate::tree_error::TreeError;

pub trait ResultLogExt<T> {
    /// Log the error, discarding the value.
    fn log_error(self);

    /// Log the error prefixed with `msg` and hand the result back unchanged.
    fn log_err(self, msg: &str) -> Result<T, TreeError>;
}

impl<T> ResultLogExt<T> for Result<T, TreeError> {
    fn log_error(self) {
        self.inspect_err(|e| log::error!("{e}")).ok();
    }

    fn log_err(self, msg: &str) -> Result<T, TreeError> {
        self.inspect_err(|e| log::error!("{msg}: {e}"))
    }
}
