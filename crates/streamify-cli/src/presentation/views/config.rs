use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel, CreateView};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = if self.data.from_file {
            "file"
        } else {
            "defaults (file not found)"
        };
        writeln!(f, "Config path: {}", self.data.path)?;
        writeln!(f, "Source:      {}", source)?;
        writeln!(f)?;
        writeln!(f, "[table]")?;
        writeln!(f, "page_size_options = {:?}", self.data.page_size_options)?;
        writeln!(f, "default_page_size = {}", self.data.default_page_size)?;
        writeln!(f)?;
        writeln!(f, "[mock]")?;
        writeln!(f, "stream_count = {}", self.data.stream_count)?;
        match self.data.seed {
            Some(seed) => writeln!(f, "seed = {}", seed),
            None => writeln!(f, "# seed unset: mock data changes every run"),
        }
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.written {
            writeln!(f, "Wrote default configuration to {}", self.data.path)
        } else {
            writeln!(f, "Config already exists at {}", self.data.path)?;
            writeln!(f, "Use --force to overwrite it.")
        }
    }
}
