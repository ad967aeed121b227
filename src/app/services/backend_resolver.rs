//! Resolves the remote backend of a module from its rendered configuration.

use std::fs;
use std::io;

use tracing::{debug, warn};

use crate::app::settings::Settings;
use crate::domain::invocation::render_json_argv;
use crate::domain::{BackendConfig, ModulePath};
use crate::ports::CommandRunner;

/// Render `module`'s configuration and extract its backend.
///
/// Never fails: a failed render, an unreadable output file, or output that is
/// not valid JSON all resolve to [`BackendConfig::None`].
pub fn resolve(runner: &impl CommandRunner, settings: &Settings, module: &ModulePath) -> BackendConfig {
    if !settings.remote_backend_enabled() {
        debug!(module = %module, "remote backend disabled by configuration");
        return BackendConfig::None;
    }

    let out = &settings.render_out;
    if let Err(err) = fs::remove_file(out)
        && err.kind() != io::ErrorKind::NotFound
    {
        warn!(path = %out.display(), error = %err, "could not remove stale render output");
    }

    let argv = render_json_argv(&settings.tool, out, &module.absolute());
    let result = runner.run(&argv, true);
    if !result.success() {
        warn!(module = %module, stderr = %result.stderr.trim(), "render-json failed");
        return BackendConfig::None;
    }

    let raw = match fs::read_to_string(out) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %out.display(), error = %err, "render output unreadable");
            return BackendConfig::None;
        }
    };

    match BackendConfig::from_render_json(&raw) {
        Ok(backend) => {
            debug!(module = %module, ready = backend.is_ready(), "backend resolved");
            backend
        }
        Err(err) => {
            warn!(module = %module, error = %err, "render output rejected");
            BackendConfig::None
        }
    }
}
