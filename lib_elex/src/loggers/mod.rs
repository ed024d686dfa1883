/// Console and rolling JSON file logging for binaries.
pub mod tracing_setup;
