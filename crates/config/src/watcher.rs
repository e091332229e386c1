use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Watches the dashboard config file and sends a notification on every write.
///
/// The parent directory is watched rather than the file itself, so a config
/// created after startup (or replaced by an editor's atomic save) is still
/// picked up. Dropping the handle stops the watch task.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let (_watcher, mut rx) = osshare_config::ConfigWatcher::spawn("/home/user/.config/osshare/osshare.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed, reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    task: JoinHandle<()>,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let task = tokio::spawn(watch_loop(path.as_ref().to_path_buf(), tx));

        (Self { task }, rx)
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Absolute config file path plus the directory to watch.
///
/// A bare file name such as `osshare.toml` has an empty parent, which notify
/// cannot watch; resolving against the working directory fixes both the
/// watched directory and the paths notify reports back.
fn watch_target(path: &Path) -> std::io::Result<(PathBuf, PathBuf)> {
    let file = std::path::absolute(path)?;
    let dir = file
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| std::io::Error::other(format!("'{}' has no parent directory", file.display())))?;
    Ok((file, dir))
}

/// `true` when a filesystem event touched `target`.
fn touches(event: &notify::Event, target: &Path) -> bool {
    use notify::EventKind::*;
    matches!(event.kind, Modify(_) | Create(_)) && event.paths.iter().any(|p| p == target)
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let (path, dir) = match watch_target(&path) {
        Ok(target) => target,
        Err(e) => {
            error!("Cannot resolve config path '{}': {e}", path.display());
            return;
        }
    };
    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!("Cannot create config directory '{}': {e}", dir.display());
    }

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) if touches(&e, &path) => {
                // Editors often emit several events per save; one pending
                // notification is enough.
                if let Err(mpsc::error::TrySendError::Closed(_)) = tx.try_send(()) {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, EventKind, ModifyKind, RemoveKind};
    use notify::Event;

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn write_to_config_file_counts() {
        let target = Path::new("/cfg/osshare/osshare.toml");
        let e = event(EventKind::Modify(ModifyKind::Any), "/cfg/osshare/osshare.toml");
        assert!(touches(&e, target));
        let e = event(EventKind::Create(CreateKind::File), "/cfg/osshare/osshare.toml");
        assert!(touches(&e, target));
    }

    #[test]
    fn sibling_files_and_removals_are_ignored() {
        let target = Path::new("/cfg/osshare/osshare.toml");
        let e = event(EventKind::Modify(ModifyKind::Any), "/cfg/osshare/osshare.toml.swp");
        assert!(!touches(&e, target));
        let e = event(EventKind::Remove(RemoveKind::File), "/cfg/osshare/osshare.toml");
        assert!(!touches(&e, target));
    }

    #[test]
    fn bare_file_name_resolves_to_working_directory() {
        let (file, dir) = watch_target(Path::new("osshare.toml")).unwrap();
        let cwd = std::env::current_dir().unwrap();

        assert!(file.is_absolute());
        assert_eq!(file, cwd.join("osshare.toml"));
        assert_eq!(dir, cwd);
        assert!(dir.is_dir());
    }

    #[test]
    fn absolute_path_is_kept() {
        let (file, dir) = watch_target(Path::new("/cfg/osshare/osshare.toml")).unwrap();
        assert_eq!(file, Path::new("/cfg/osshare/osshare.toml"));
        assert_eq!(dir, Path::new("/cfg/osshare"));
    }

    #[tokio::test]
    async fn relative_config_write_is_reported() {
        let dir = tempfile::Builder::new().prefix("watch").tempdir_in(".").unwrap();
        let name = dir.path().file_name().unwrap();
        let file = Path::new(name).join("osshare.toml");
        assert!(file.is_relative());
        std::fs::write(&file, "").unwrap();

        let (_watcher, mut rx) = ConfigWatcher::spawn(&file);
        tokio::time::sleep(std::time::Duration::from_millis(300)).await;
        std::fs::write(&file, "[view]\nchart_type = \"bar\"\n").unwrap();

        let fired = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv()).await;
        assert_eq!(fired.ok().flatten(), Some(()));
    }
}
