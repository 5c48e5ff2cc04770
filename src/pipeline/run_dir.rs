//! Timestamped output directory for one run

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, TimeZone};
use log::debug;

use crate::client::models::ApplicationList;
use crate::error::{Error, Result};

/// Timestamp format shared by the directory and snapshot names
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Suffixes tried when the timestamped name is already taken
const MAX_SUFFIX: u32 = 1000;

/// Output directory `downloads_<stamp>` under a parent directory.
///
/// The name is fixed when the run starts; nothing touches the filesystem
/// until [`RunDirectory::ensure`] (or a method that needs it) is called.
#[derive(Debug)]
pub struct RunDirectory {
    parent: PathBuf,
    stamp: String,
    path: Option<PathBuf>,
}

impl RunDirectory {
    pub fn new<Tz: TimeZone>(parent: impl Into<PathBuf>, started_at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            parent: parent.into(),
            stamp: started_at.format(STAMP_FORMAT).to_string(),
            path: None,
        }
    }

    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    /// Path of the directory, once created
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create the directory if this run has not yet done so.
    ///
    /// Never reuses an existing directory: when `downloads_<stamp>` is taken
    /// the first free `downloads_<stamp>_<n>` is used instead.
    pub fn ensure(&mut self) -> Result<&Path> {
        if self.path.is_none() {
            self.path = Some(self.create_unique()?);
        }
        self.path
            .as_deref()
            .ok_or_else(|| Error::Other("run directory was not created".to_string()))
    }

    fn create_unique(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.parent)?;

        for n in 0..MAX_SUFFIX {
            let name = if n == 0 {
                format!("downloads_{}", self.stamp)
            } else {
                format!("downloads_{}_{}", self.stamp, n)
            };
            let candidate = self.parent.join(name);
            match fs::create_dir(&candidate) {
                Ok(()) => {
                    debug!("Created run directory {}", candidate.display());
                    return Ok(candidate);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(Error::Other(format!(
            "No free run directory name for downloads_{} in {}",
            self.stamp,
            self.parent.display()
        )))
    }

    /// Write the list payload as pretty JSON, returning the snapshot path
    pub fn write_snapshot(&mut self, list: &ApplicationList) -> Result<PathBuf> {
        let file_name = format!("applications_list_{}.json", self.stamp);
        let path = self.ensure()?.join(file_name);
        let contents = serde_json::to_string_pretty(list.raw())?;
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Create `<run_dir>/<app>` and return `<run_dir>/<app>/<filename>`.
    ///
    /// Both names come from the server, so each must be a single plain path
    /// component.
    pub fn artifact_path(&mut self, app: &str, filename: &str) -> Result<PathBuf> {
        let app = plain_component(app, "application name")?;
        let filename = plain_component(filename, "filename")?;

        let app_dir = self.ensure()?.join(app);
        fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join(filename))
    }
}

fn plain_component<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !value.contains(['/', '\\']) => Ok(value),
        _ => Err(Error::Other(format!("Unsafe {}: '{}'", what, value))),
    }
}
