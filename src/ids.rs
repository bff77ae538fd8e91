use uuid::Uuid;

/// Generate a single random identifier in canonical hyphenated UUID form.
///
/// Identifiers carry no structure beyond equality; v4 gives 122 random bits,
/// so independent calls collide only with negligible probability.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate `count` random identifiers.
///
/// Pre-allocates the full vector capacity and fills it in a tight loop. The
/// batch has no ordering semantics, and two batches are disjoint with
/// overwhelming probability.
pub fn generate_id_batch(count: usize) -> Vec<String> {
    let mut ids: Vec<String> = Vec::with_capacity(count);
    for _ in 0..count {
        ids.push(generate_id());
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn batch_generates_correct_count_and_unique_ids() {
        let n = 1024;
        let ids = generate_id_batch(n);
        assert_eq!(ids.len(), n);
        let mut set: HashSet<String> = HashSet::with_capacity(n);
        for id in ids {
            assert!(set.insert(id), "duplicate id generated in batch");
        }
    }

    #[test]
    fn empty_batch_is_allowed() {
        assert!(generate_id_batch(0).is_empty());
    }

    #[test]
    fn ids_are_canonical_uuid_text() {
        let id = generate_id();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
