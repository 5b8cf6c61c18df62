use crate::commands::{CmdResult, LexisPaths};
use crate::store::{DataStore, Slot};

/// Where each slot (and the config file) lives on disk.
pub fn run<S: DataStore>(store: &S, paths: &LexisPaths) -> CmdResult {
    let mut listed: Vec<_> = Slot::all()
        .iter()
        .filter_map(|slot| store.slot_path(*slot))
        .collect();
    listed.push(paths.data_dir.join("config.json"));
    CmdResult::default().with_paths(listed)
}
