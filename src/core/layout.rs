use crate::domain::model::LayoutEntry;

const fn entry(directory: &'static str, files: &'static [&'static str]) -> LayoutEntry {
    LayoutEntry { directory, files }
}

/// The MLOps classification project tree, in creation order.
pub const MLOPS_LAYOUT: &[LayoutEntry] = &[
    // Root files
    entry(
        "",
        &[
            "README.md",
            "requirements.txt",
            "setup.py",
            ".env.example",
            ".gitignore",
            ".dvcignore",
            "dvc.yaml",
            "params.yaml",
            "mlproject",
            "docker-compose.yml",
            "Dockerfile",
        ],
    ),
    entry(
        "config",
        &[
            "__init__.py",
            "app_config.yaml",
            "database_config.yaml",
            "spark_config.yaml",
            "mlflow_config.yaml",
            "evidently_config.yaml",
        ],
    ),
    // Source tree
    entry("src", &["__init__.py"]),
    entry(
        "src/entities",
        &[
            "__init__.py",
            "base_entity.py",
            "dataset_entity.py",
            "feature_entity.py",
            "model_entity.py",
            "experiment_entity.py",
            "prediction_entity.py",
            "report_entity.py",
            "pipeline_entity.py",
        ],
    ),
    entry(
        "src/repositories",
        &[
            "__init__.py",
            "base_repository.py",
            "mysql_repository.py",
            "mlflow_repository.py",
            "feature_repository.py",
            "dvc_repository.py",
            "evidently_repository.py",
        ],
    ),
    entry(
        "src/services",
        &[
            "__init__.py",
            "data_service.py",
            "feature_service.py",
            "training_service.py",
            "inference_service.py",
            "evaluation_service.py",
            "monitoring_service.py",
            "pipeline_service.py",
        ],
    ),
    entry(
        "src/factories",
        &[
            "__init__.py",
            "spark_factory.py",
            "model_factory.py",
            "feature_factory.py",
            "repository_factory.py",
            "service_factory.py",
        ],
    ),
    entry(
        "src/processors",
        &[
            "__init__.py",
            "data_processor.py",
            "feature_processor.py",
            "model_processor.py",
            "report_processor.py",
        ],
    ),
    entry(
        "src/utils",
        &[
            "__init__.py",
            "config_manager.py",
            "logger.py",
            "validator.py",
            "exceptions.py",
            "decorators.py",
        ],
    ),
    // Tests
    entry("tests", &["__init__.py", "conftest.py"]),
    entry("tests/unit", &["__init__.py"]),
    entry("tests/unit/entities", &["__init__.py"]),
    entry("tests/unit/repositories", &["__init__.py"]),
    entry("tests/unit/services", &["__init__.py"]),
    entry("tests/unit/processors", &["__init__.py"]),
    entry(
        "tests/integration",
        &[
            "__init__.py",
            "test_database_integration.py",
            "test_mlflow_integration.py",
            "test_pipeline_integration.py",
        ],
    ),
    entry("tests/fixtures", &["__init__.py"]),
    entry("tests/fixtures/sample_datasets", &[]),
    entry("tests/fixtures/mock_configs", &[]),
    entry(
        "notebooks",
        &[
            "01_data_exploration.ipynb",
            "02_feature_analysis.ipynb",
            "03_model_experimentation.ipynb",
            "04_monitoring_analysis.ipynb",
        ],
    ),
    // DVC tracked
    entry("data", &[]),
    entry("data/raw", &[]),
    entry("data/processed", &[]),
    entry("data/features", &[]),
    entry("data/predictions", &[]),
    entry("models", &[]),
    entry("models/experiments", &[]),
    entry("models/production", &[]),
    entry("models/staging", &[]),
    entry("reports", &[]),
    entry("reports/data_validation", &[]),
    entry("reports/model_evaluation", &[]),
    entry("reports/drift_detection", &[]),
    entry("reports/performance_monitoring", &[]),
    entry(
        "pipelines",
        &[
            "__init__.py",
            "training_pipeline.py",
            "inference_pipeline.py",
            "monitoring_pipeline.py",
            "data_pipeline.py",
        ],
    ),
    // API
    entry("api", &["__init__.py", "app.py"]),
    entry(
        "api/routes",
        &[
            "__init__.py",
            "prediction_routes.py",
            "model_routes.py",
            "monitoring_routes.py",
        ],
    ),
    entry(
        "api/middleware",
        &["__init__.py", "auth_middleware.py", "logging_middleware.py"],
    ),
    // Deployment
    entry("deployment", &[]),
    entry(
        "deployment/docker",
        &[
            "training.Dockerfile",
            "serving.Dockerfile",
            "monitoring.Dockerfile",
        ],
    ),
    entry(
        "deployment/kubernetes",
        &[
            "training-job.yaml",
            "serving-deployment.yaml",
            "monitoring-deployment.yaml",
        ],
    ),
    entry(
        "deployment/terraform",
        &["main.tf", "variables.tf", "outputs.tf"],
    ),
    entry(
        "deployment/scripts",
        &[
            "deploy_model.sh",
            "setup_infrastructure.sh",
            "rollback_model.sh",
        ],
    ),
    // Monitoring
    entry("monitoring", &["__init__.py"]),
    entry(
        "monitoring/dashboards",
        &["grafana_dashboard.json", "mlflow_dashboard.py"],
    ),
    entry(
        "monitoring/alerts",
        &["drift_alerts.yaml", "performance_alerts.yaml"],
    ),
    entry(
        "monitoring/schedulers",
        &[
            "__init__.py",
            "monitoring_scheduler.py",
            "retraining_scheduler.py",
        ],
    ),
    entry(
        "scripts",
        &[
            "setup_environment.sh",
            "initialize_project.py",
            "run_training.py",
            "run_inference.py",
            "run_monitoring.py",
            "data_migration.py",
            "model_deployment.py",
        ],
    ),
];

/// Directories created after the layout, with no placeholder files.
pub const ADDITIONAL_DIRECTORIES: &[&str] = &["logs", "temp", ".dvc", "mlruns"];

/// Number of non-root directories in a layout.
pub fn directory_count(layout: &[LayoutEntry]) -> usize {
    layout.iter().filter(|e| !e.directory.is_empty()).count()
}

pub fn file_count(layout: &[LayoutEntry]) -> usize {
    layout.iter().map(|e| e.files.len()).sum()
}
