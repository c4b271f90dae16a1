use crate::{CliError, Result as CliErrorResult};

use std::io::Read;
use std::path::Path;

/// Path argument meaning "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_source(path: &Path) -> CliErrorResult<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .map_err(|e| CliError::read(path, e))?;
        return Ok(contents);
    }

    std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))
}
