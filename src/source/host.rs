use {
    super::{Lookup, MetricsSource},
    crate::error::{LookupError, SampleError},
    ::sysinfo::{Disks, Pid, Process, ProcessRefreshKind, ProcessesToUpdate, System, ThreadKind},
    std::path::Path,
};

/// host metrics backed by the [`sysinfo`](::sysinfo) crate.
pub struct SysinfoSource {
    system: System,
    disks: Disks,
}

// === impl SysinfoSource ===

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoSource {
    pub fn new() -> Self {
        let mut system = System::new();
        // cpu usage is computed against the previous refresh, so take a baseline now.
        system.refresh_cpu_usage();
        let disks = Disks::new_with_refreshed_list();

        Self { system, disks }
    }

    /// refreshes the process table, and returns the processes in it.
    ///
    /// userland threads are not processes, and are left out. no per-process statistics are
    /// gathered, since only names are needed.
    fn processes(&mut self) -> impl Iterator<Item = (&Pid, &Process)> {
        let Self { system, .. } = self;

        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );

        system
            .processes()
            .iter()
            .filter(|(_, process)| process.thread_kind() != Some(ThreadKind::Userland))
    }
}

impl MetricsSource for SysinfoSource {
    fn cpu_percent(&mut self) -> Result<f64, SampleError> {
        let Self { system, .. } = self;

        system.refresh_cpu_usage();
        if system.cpus().is_empty() {
            return Err(SampleError::NoCpus);
        }

        Ok(f64::from(system.global_cpu_usage()))
    }

    fn memory_percent(&mut self) -> Result<f64, SampleError> {
        let Self { system, .. } = self;

        system.refresh_memory();
        let total = system.total_memory();
        let available = system.available_memory();

        used_percent(total, available).ok_or(SampleError::NoMemory)
    }

    fn disk_percent(&mut self, path: &Path) -> Result<f64, SampleError> {
        let Self { disks, .. } = self;

        disks.refresh(true);
        let disk = disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == path)
            .ok_or_else(|| SampleError::NoFilesystem(path.to_owned()))?;

        // blocks reserved for root count as used, since they are not available to the user.
        used_percent(disk.total_space(), disk.available_space())
            .ok_or_else(|| SampleError::EmptyFilesystem(path.to_owned()))
    }

    fn process_names(&mut self) -> Result<Vec<Lookup>, SampleError> {
        if !::sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(SampleError::Unsupported);
        }

        let names = self
            .processes()
            .map(|(pid, process)| {
                process
                    .name()
                    .to_str()
                    .map(str::to_owned)
                    .ok_or(LookupError::NotUtf8 { pid: pid.as_u32() })
            })
            .collect();

        Ok(names)
    }
}

/// returns the share of `total` that is not `available`, as a percentage.
///
/// returns `None` if `total` is zero.
fn used_percent(total: u64, available: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }

    let used = total.saturating_sub(available);
    Some((used as f64 / total as f64) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_percent_of_empty_total() {
        assert_eq!(used_percent(0, 0), None);
    }

    #[test]
    fn used_percent_half() {
        assert_eq!(used_percent(200, 100), Some(50.0));
    }

    #[test]
    fn used_percent_full() {
        assert_eq!(used_percent(512, 0), Some(100.0));
    }

    #[test]
    fn used_percent_counts_reserved_space() {
        // 40 of 100 blocks used, 5 reserved for root, 55 available to the user.
        assert_eq!(used_percent(100, 55), Some(45.0));
    }

    #[test]
    fn used_percent_saturates() {
        // some filesystems report more available space than their total.
        assert_eq!(used_percent(100, 150), Some(0.0));
    }

    /// every listed pid is a top-level entry of `/proc`, which lists processes but not threads.
    #[cfg(target_os = "linux")]
    #[test]
    fn threads_are_not_listed() {
        use std::{collections::HashSet, sync::mpsc};

        // keep a few threads of our own alive while the process table is read.
        let (tx, rx) = mpsc::channel::<()>();
        let rx = std::sync::Arc::new(std::sync::Mutex::new(rx));
        let threads = (0..4)
            .map(|_| {
                let rx = rx.clone();
                std::thread::spawn(move || {
                    let _ = rx.lock().map(|rx| rx.recv());
                })
            })
            .collect::<Vec<_>>();

        let mut source = SysinfoSource::new();
        let listed = source
            .processes()
            .map(|(pid, _)| pid.as_u32())
            .collect::<Vec<_>>();

        drop(tx);
        for thread in threads {
            thread.join().unwrap();
        }

        let proc = std::fs::read_dir("/proc")
            .unwrap()
            .filter_map(|entry| entry.ok()?.file_name().to_str()?.parse::<u32>().ok())
            .collect::<HashSet<_>>();

        assert!(listed.contains(&std::process::id()));
        let threads = listed
            .iter()
            .filter(|pid| !proc.contains(*pid))
            .collect::<Vec<_>>();
        assert!(threads.is_empty(), "threads listed as processes: {threads:?}");
    }
}
