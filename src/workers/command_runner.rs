use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::DEFAULT_CONFIG_PATH;
use crate::enums::commands::Commands;
use crate::errors::{LogvizError, LogvizResult};
use crate::services::aggregator::Aggregator;
use crate::services::log_sources::build_source;
use crate::services::plotly_renderer::PlotlyRenderer;
use crate::services::report_generator::ReportGenerator;
use crate::structs::aggregates::Aggregates;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub fn run_command(&mut self, command: Commands) -> LogvizResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Generate { open } => self.generate_command(open).map(|_| ()),
            Commands::Summary => self.summary_command(),
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    /// Full run: load, aggregate, render. Returns the written chart paths.
    pub fn generate_command(&self, open: bool) -> LogvizResult<Vec<PathBuf>> {
        let config = self.load_config()?;
        let aggregates = Self::aggregate(&config)?;

        log::info!("🎨 Generating visualizations...");
        let renderer = PlotlyRenderer::new(config.visualization.clone());
        let generator = ReportGenerator::new(renderer, config.output.clone());
        let written = generator.generate(&aggregates)?;

        if !written.is_empty() {
            log::info!("📁 {} charts saved in: {}", written.len(), config.output.output_dir);
        }

        if open || config.output.open_in_browser {
            Self::open_charts(&written);
        }

        Ok(written)
    }

    fn summary_command(&self) -> LogvizResult<()> {
        let config = self.load_config()?;
        let aggregates = Self::aggregate(&config)?;
        aggregates.print_summary();
        Ok(())
    }

    fn init_command(&self) -> LogvizResult<()> {
        log::info!("🚀 Initializing logviz configuration...");
        let config_path = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        ConfigManager::create_sample_config(&config_path)?;
        log::info!("📝 Edit the configuration file to point at your own log data.");
        log::info!("🔧 Run 'logviz validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> LogvizResult<()> {
        let config = ConfigManager::load(self.config_path.as_deref())?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            Err(problems) => {
                for problem in &problems {
                    log::error!("❌ {problem}");
                }
                Err(LogvizError::config_error(
                    &format!("{} problem(s) found in configuration", problems.len()),
                    None,
                    Some("Fix the problems listed above and run 'logviz validate' again"),
                ))
            }
        }
    }

    fn load_config(&self) -> LogvizResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        if let Err(problems) = ConfigManager::validate_config(&config) {
            return Err(LogvizError::config_error(
                &problems.join("; "),
                None,
                Some("Run 'logviz validate' for details"),
            ));
        }
        Ok(config)
    }

    /// Reads the configured source and aggregates it; nothing is rendered yet.
    pub fn aggregate(config: &Config) -> LogvizResult<Aggregates> {
        let source = build_source(&config.input)?;
        log::info!("🔍 Reading log records from {}", source.describe());
        let records = source.read_records()?;
        log::info!("📥 Read {} records", records.len());

        let aggregates = Aggregator::new(config.label_order).aggregate_raw(records)?;
        if aggregates.is_empty() {
            log::warn!("⚠️ No log records found, charts will be empty");
        }
        Ok(aggregates)
    }

    fn open_charts(paths: &[PathBuf]) {
        for path in paths {
            if let Err(e) = Self::open_in_browser(path) {
                log::warn!("⚠️ Could not open {} in a browser: {}", path.display(), e);
            }
        }
    }

    fn open_in_browser(path: &Path) -> std::io::Result<()> {
        let absolute = path.canonicalize()?;
        webbrowser::open(&absolute.display().to_string())
    }
}
