use std::path::Path;
use streamify_runtime::Config;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

pub fn present_config(config: &Config, path: &Path) -> ConfigViewModel {
    ConfigViewModel {
        path: path.display().to_string(),
        from_file: path.exists(),
        page_size_options: config.table.page_size_options.as_slice().to_vec(),
        default_page_size: config.table.default_page_size,
        stream_count: config.mock.stream_count,
        seed: config.mock.seed,
    }
}

pub fn present_config_init(path: &Path, written: bool) -> ConfigInitViewModel {
    ConfigInitViewModel {
        path: path.display().to_string(),
        written,
    }
}
