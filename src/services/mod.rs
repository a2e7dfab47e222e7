pub mod account_service;
pub mod activite_service;

// Identifiants dédoublonnés, ordre de première apparition conservé
pub(crate) fn dedup_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(id) {
            seen.push(*id);
        }
    }
    seen
}
