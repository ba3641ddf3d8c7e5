use colored::*;
use dialogflow_grpc::TransportError;
use dialogflow_grpc::tonic::Status;
use std::fmt::{Debug, Display};

/// A formatted string ready to be printed.
pub struct FormattedString(pub String);

/// Wraps a response message so it is pretty-printed.
pub struct Message<T: Debug>(pub T);

pub struct GenericError<T: Display>(pub &'static str, pub T);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl<T: Debug> From<Message<T>> for FormattedString {
    fn from(Message(message): Message<T>) -> Self {
        FormattedString(format!("{message:#?}"))
    }
}

impl From<Status> for FormattedString {
    fn from(status: Status) -> Self {
        FormattedString(format!(
            "{} code={:?} message={:?}",
            "gRPC Failed:".red().bold(),
            status.code(),
            status.message()
        ))
    }
}

impl From<TransportError> for FormattedString {
    fn from(err: TransportError) -> Self {
        FormattedString(format!(
            "{}\n\n'{}'",
            "Failed to create transport:".red().bold(),
            err
        ))
    }
}

impl<T: Display> From<GenericError<T>> for FormattedString {
    fn from(GenericError(msg, err): GenericError<T>) -> Self {
        FormattedString(format!("{}\n\n'{}'", msg.red().bold(), err))
    }
}
