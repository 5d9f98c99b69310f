use std::env;

use log::debug;

/// Name of the wrapped OCR executable, installed out-of-band via pipx
pub const OCR_TOOL: &str = "dsocr";

/// Interpreter the wrapped tool runs on
pub const PYTHON: &str = "python3";

/// Remediation command shown when the wrapped tool is missing
pub const INSTALL_HINT: &str = "pipx install git+https://github.com/ttieli/DeepSeek-OCR-macOS.git";

/// Environment variables consumed by the wrapped tool. The shim never reads
/// or rewrites them, it only names them in the setup guidance; the child
/// inherits the environment as-is.
pub const CACHE_ENV: &str = "HF_HOME";
pub const MODEL_DIR_ENV: &str = "DSOCR_MODEL_DIR";
pub const OFFLINE_ENV: &str = "DSOCR_OFFLINE";

pub fn debug_trace(message: &str) {
    if env::var("DSOCR_SHIM_DEBUG").is_ok() {
        debug!("{}", message)
    };
}
