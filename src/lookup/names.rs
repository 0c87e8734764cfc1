use crate::lookup::collation::compare_names;
use crate::models::{HeroRecord, NameEntry};

/// Project the dataset into `{name, image}` pairs sorted by name.
///
/// Heroes without a name or an image are dropped.
pub fn list_names(heroes: &[HeroRecord]) -> Vec<NameEntry> {
    let mut entries: Vec<NameEntry> = heroes.iter().filter_map(HeroRecord::name_entry).collect();
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
    entries
}
