use std::collections::HashMap;
use tokio::task::JoinHandle;

/// Keyed background tasks. Spawning under a taken key aborts the previous task, and
/// dropping the manager aborts everything it still owns.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn(&mut self, key: &str, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(key.to_string(), task) {
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks
            .get(key)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn abort(&mut self, key: &str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::oneshot;

    use super::*;

    /// A task that never finishes on its own; the receiver resolves once it is dropped.
    fn pending() -> (JoinHandle<()>, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let _tx = tx;
            tokio::time::sleep(Duration::from_secs(3600)).await;
        });
        (handle, rx)
    }

    #[tokio::test]
    async fn test_spawn_replaces_and_aborts_previous() {
        let mut tasks = TaskManager::new();
        let (first, first_done) = pending();
        let (second, _second_done) = pending();

        tasks.spawn("dispatch", first);
        tasks.spawn("dispatch", second);

        assert!(first_done.await.is_err());
        assert!(tasks.is_running("dispatch"));
    }

    #[tokio::test]
    async fn test_abort_and_drop() {
        let mut tasks = TaskManager::new();
        let (probe, probe_done) = pending();
        let (other, other_done) = pending();

        tasks.spawn("health_probe", probe);
        tasks.spawn("other", other);

        tasks.abort("health_probe");
        assert!(!tasks.is_running("health_probe"));
        assert!(probe_done.await.is_err());

        drop(tasks);
        assert!(other_done.await.is_err());
    }
}
