//! renders the dashboard as text.

use crate::{dashboard::State, snapshot::Snapshot};


/// renders a frame of the dashboard.
///
/// this is a pure function of its inputs.
pub fn render(state: &State, snapshot: &Snapshot) -> String {
    match state {
        State::Errored(error) => format!("Error: {error}"),
        State::Quit => "Quitting...\n".to_owned(),
        State::Running => metrics(snapshot),
    }
}

fn metrics(
    Snapshot {
        cpu,
        ram,
        disk,
        processes,
        taken: _,
    }: &Snapshot,
) -> String {
    let mut tasks = String::new();
    for name in processes {
        tasks.push_str(name);
        tasks.push('\n');
    }

    format!(
        "CPU Usage: {cpu}\nRAM Usage: {ram}\nDisk Usage: {disk}\n\nRunning Tasks:\n{tasks}\nPress q to quit."
    )
}
