// Affricate cluster collapse: consonant clusters that assimilate to a
// single sound in spoken Russian are deleted outright.

/// Cluster shapes deleted by the collapse stage, longest first: an optional
/// С followed by Т, or a bare С, immediately followed by Ч. A closed set,
/// so a fixed enumeration replaces any general pattern matching.
const AFFRICATE_CLUSTERS: &[&[char]] = &[&['С', 'Т', 'Ч'], &['Т', 'Ч'], &['С', 'Ч']];

/// Delete every non-overlapping affricate cluster in one left-to-right pass.
///
/// A single pass suffices: deleting a cluster never creates a new match,
/// because no cluster ends in С or Т and none starts with Ч.
pub fn collapse_affricates(word: Vec<char>) -> Vec<char> {
    let mut out = Vec::with_capacity(word.len());
    let mut i = 0;
    while i < word.len() {
        match cluster_len_at(&word, i) {
            Some(len) => i += len,
            None => {
                out.push(word[i]);
                i += 1;
            }
        }
    }
    out
}

/// Length of the affricate cluster starting at position `i`, if any.
fn cluster_len_at(word: &[char], i: usize) -> Option<usize> {
    AFFRICATE_CLUSTERS
        .iter()
        .find(|cluster| word[i..].starts_with(cluster))
        .map(|cluster| cluster.len())
}
