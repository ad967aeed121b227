pub mod backend_resolver;
pub mod navigator;
pub mod temp_cleaner;
pub mod tool_versions;
