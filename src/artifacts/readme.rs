//! `README.md` synthesized from the session answers

use std::path::{Path, PathBuf};

use super::{write_artifact, README_FILE};
use crate::error::ArtifactError;

/// Render the README: title, description, Installation, Usage, License.
pub fn render_readme(project_name: &str, description: &str, license: &str) -> String {
    format!(
        "# {project_name}

{description}

## Installation

```bash
npm install
```

## Usage

```bash
npm start
```

## License

This project is licensed under the {license} License - see the [LICENSE](LICENSE) file for details.
"
    )
}

/// Render and write `dir/README.md`.
pub fn create_readme(
    dir: &Path,
    project_name: &str,
    description: &str,
    license: &str,
) -> Result<PathBuf, ArtifactError> {
    write_artifact(dir, README_FILE, &render_readme(project_name, description, license))
}
