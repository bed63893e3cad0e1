use {
    super::{Lookup, MetricsSource},
    crate::error::SampleError,
    std::{
        collections::VecDeque,
        path::{Path, PathBuf},
    },
};

/// a mock metrics source, which hands out scripted samples and records each call made to it.
#[derive(Debug, Default)]
pub struct MockSource {
    cpu: VecDeque<Result<f64, SampleError>>,
    memory: VecDeque<Result<f64, SampleError>>,
    disk: VecDeque<Result<f64, SampleError>>,
    processes: VecDeque<Result<Vec<Lookup>, SampleError>>,
    calls: Vec<Call>,
}

/// a call made to a [`MockSource`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    Cpu,
    Memory,
    Disk(PathBuf),
    Processes,
}

// === impl MockSource ===

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// scripts a complete, successful tick.
    pub fn tick(self, cpu: f64, memory: f64, disk: f64, processes: &[&str]) -> Self {
        let processes = processes.iter().map(|name| Ok((*name).to_owned())).collect();
        self.cpu(Ok(cpu))
            .memory(Ok(memory))
            .disk(Ok(disk))
            .processes(Ok(processes))
    }

    pub fn cpu(mut self, sample: Result<f64, SampleError>) -> Self {
        self.cpu.push_back(sample);
        self
    }

    pub fn memory(mut self, sample: Result<f64, SampleError>) -> Self {
        self.memory.push_back(sample);
        self
    }

    pub fn disk(mut self, sample: Result<f64, SampleError>) -> Self {
        self.disk.push_back(sample);
        self
    }

    pub fn processes(mut self, sample: Result<Vec<Lookup>, SampleError>) -> Self {
        self.processes.push_back(sample);
        self
    }

    /// returns the calls made so far, in order.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    fn next<T>(queue: &mut VecDeque<T>, call: &Call) -> T {
        queue
            .pop_front()
            .unwrap_or_else(|| panic!("mock source has no sample scripted for {call:?}"))
    }
}

impl MetricsSource for MockSource {
    fn cpu_percent(&mut self) -> Result<f64, SampleError> {
        let Self { cpu, calls, .. } = self;
        calls.push(Call::Cpu);
        Self::next(cpu, &Call::Cpu)
    }

    fn memory_percent(&mut self) -> Result<f64, SampleError> {
        let Self { memory, calls, .. } = self;
        calls.push(Call::Memory);
        Self::next(memory, &Call::Memory)
    }

    fn disk_percent(&mut self, path: &Path) -> Result<f64, SampleError> {
        let Self { disk, calls, .. } = self;
        let call = Call::Disk(path.to_owned());
        calls.push(call.clone());
        Self::next(disk, &call)
    }

    fn process_names(&mut self) -> Result<Vec<Lookup>, SampleError> {
        let Self {
            processes, calls, ..
        } = self;
        calls.push(Call::Processes);
        Self::next(processes, &Call::Processes)
    }
}
