use anyhow::{Context, Result, bail};
use derivative::Derivative;
use log::debug;
use mock_segment::SegmentConfig;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(skip)]
    pub is_first_run: bool,

    #[serde(default)]
    pub segment: SegmentConfig,

    #[serde(default)]
    pub output: Output,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Output {
    #[derivative(Default(value = "\".\".to_string()"))]
    pub dir: String,

    pub side_by_side: bool,

    // pixels between original and result in the comparison image
    #[derivative(Default(value = "16"))]
    pub gap: u32,
}

impl Config {
    /// Loads the configuration from `path`, or from the platform config
    /// directory when no path is given. A missing or unreadable file is
    /// replaced with the defaults.
    pub fn init(path: Option<PathBuf>) -> Result<Self> {
        let mut config = Config {
            config_path: match path {
                Some(path) => path,
                None => default_config_path()?,
            },
            ..Default::default()
        };

        if let Some(dir) = config.config_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("create config dir {} failed", dir.display()))?;
            }
        }

        config.load().with_context(|| "load config file failed")?;
        debug!("{:?}", config);

        Ok(config)
    }

    fn load(&mut self) -> Result<()> {
        match fs::read_to_string(&self.config_path) {
            Ok(text) => match toml::from_str::<Config>(&text) {
                Ok(mut c) => {
                    c.config_path = self.config_path.clone();
                    c.is_first_run = self.is_first_run;
                    *self = c;
                    Ok(())
                }
                Err(e) => {
                    log::warn!(
                        "parse {} failed, falling back to defaults: {e}",
                        self.config_path.display()
                    );

                    let mut bak_file = self.config_path.clone().into_os_string();
                    bak_file.push(".bak");
                    let bak_file = PathBuf::from(bak_file);

                    // Keep the broken file when it cannot be backed up.
                    fs::copy(&self.config_path, &bak_file).with_context(|| {
                        format!("back up config to {} failed", bak_file.display())
                    })?;

                    self.is_first_run = true;
                    self.save()
                }
            },
            Err(_) => {
                self.is_first_run = true;
                self.save()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        match toml::to_string_pretty(self) {
            Ok(text) => Ok(fs::write(&self.config_path, text)
                .with_context(|| "save config failed".to_string())?),
            Err(e) => bail!(format!("convert config to toml format failed. {e:?}")),
        }
    }
}

fn default_config_path() -> Result<PathBuf> {
    let app_dirs =
        AppDirs::new(Some(APP_NAME), true).context("no config directory on this platform")?;
    Ok(app_dirs.config_dir.join(format!("{APP_NAME}.toml")))
}
