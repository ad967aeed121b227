pub mod dispatcher;
pub mod format;
pub mod passthrough;
pub mod session;
pub mod workflows;
