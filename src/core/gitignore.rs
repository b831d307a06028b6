use crate::domain::ports::Filesystem;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub const GITIGNORE_FILE: &str = ".gitignore";

pub const GITIGNORE_TEMPLATE: &str = r#"# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg

# Virtual environments
venv/
env/
ENV/
.venv/
.env

# IDEs
.vscode/
.idea/
*.swp
*.swo
*~

# Jupyter Notebooks
.ipynb_checkpoints

# MLflow
mlruns/
mlartifacts/

# DVC
.dvc/cache
.dvc/tmp
.dvc/plots

# Data files (let DVC handle these)
data/raw/*
data/processed/*
data/features/*
!data/raw/.gitkeep
!data/processed/.gitkeep
!data/features/.gitkeep

# Model artifacts (let DVC handle these)
models/experiments/*
models/production/*
models/staging/*
!models/experiments/.gitkeep
!models/production/.gitkeep
!models/staging/.gitkeep

# Reports (let DVC handle large reports)
reports/*/large_reports/

# Temporary files
temp/
tmp/
*.tmp

# Logs
logs/
*.log

# OS files
.DS_Store
Thumbs.db

# Environment variables
.env
.env.local
.env.production

# Database
*.db
*.sqlite

# Spark
spark-warehouse/
derby.log
metastore_db/
"#;

/// Overwrites `<root>/.gitignore` with [`GITIGNORE_TEMPLATE`]. Prior content,
/// including manual edits, is discarded.
pub fn render_git_ignore<F: Filesystem>(fs: &F, root: &Path) -> Result<PathBuf> {
    let path = root.join(GITIGNORE_FILE);
    fs.write(&path, GITIGNORE_TEMPLATE.as_bytes())?;
    tracing::info!("Updated .gitignore with comprehensive rules");
    Ok(path)
}
