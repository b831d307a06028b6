use crate::config::file_config::ScaffoldConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mlops-scaffold")]
#[command(about = "Create the MLOps project directory structure with empty files")]
pub struct CliConfig {
    /// Name of the project directory (default: mlops-classification)
    #[arg(long)]
    pub project_name: Option<String>,

    #[arg(long, help = "Create comprehensive .gitignore file")]
    pub create_gitignore: bool,

    /// TOML or YAML file with project, gitignore, layout and logging settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the project is created in (default: current directory)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Also append log lines to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// List what would be created without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CliConfig {
    /// Loads the config file (if any) and applies command line overrides.
    pub fn resolve(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                let config = ScaffoldConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => ScaffoldConfig::default(),
        };

        let mut settings = self.apply(Settings::from(file_config));
        settings.config_file = self.config.clone();
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(name) = &self.project_name {
            settings.project_name = name.clone();
        }
        if let Some(base_dir) = &self.base_dir {
            settings.base_dir = base_dir.clone();
        }
        if let Some(log_file) = &self.log_file {
            settings.log_file = Some(log_file.clone());
        }
        settings.create_gitignore |= self.create_gitignore;
        settings.verbose |= self.verbose;
        settings.dry_run |= self.dry_run;
        settings.json |= self.json;
        settings
    }
}
