//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;

use lessonkit::config::Config;

/// Default configuration content for lessonkit init
pub const DEFAULT_CONFIG: &str = r#"# lessonkit configuration
# =======================
#
# Every value below is the built-in default. Remove a line to keep the
# default, or change it to suit your classroom.

# ============================================================================
# NOTEBOOK - Defaults for generated lesson notebooks
# ============================================================================
#
#   author - Shown in the header cell as "**Author:**"

[notebook]
author = "Learning System"

# Kernel written into notebook metadata
[notebook.kernel]
display_name = "Python 3"
language = "python"
name = "python3"

[notebook.language]
name = "python"
version = "3.9.0"

# ============================================================================
# CURRICULUM
# ============================================================================

[curriculum]
name = "Kid's Learning Curriculum"

# ============================================================================
# OUTPUT - Where `lessonkit demo` writes files and `lessonkit report` looks
# ============================================================================

[output]
dir = "output"
"#;

/// Write the default config to `config_path`
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if !Config::write_text(config_path, DEFAULT_CONFIG, force)? {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }
    println!("Created: {}", config_path.display());

    Ok(())
}
