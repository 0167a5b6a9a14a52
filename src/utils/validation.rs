//! Centralized validation and helper functions.

/// Maximum number of contigs allowed in a single file (DOS protection)
pub const MAX_CONTIGS: usize = 100_000;

/// Check if adding another contig would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new contig.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_contig_limit(contigs.len()).is_some() {
///     return Err(...);
/// }
/// contigs.push(new_contig); // Safe to add
/// ```
#[must_use]
pub fn check_contig_limit(count: usize) -> Option<String> {
    if count >= MAX_CONTIGS {
        Some(format!(
            "Too many contigs: adding another would exceed maximum of {MAX_CONTIGS}"
        ))
    } else {
        None
    }
}

/// Whether a byte may appear in a sequence line.
///
/// Accepts IUPAC letters in either case, `*` (stop) and `-` (gap).
#[must_use]
pub fn is_valid_residue(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'*' || byte == b'-'
}

/// Find the first byte that is not a valid residue, with its offset.
///
/// # Examples
///
/// ```
/// use contig_overlap::utils::validation::find_invalid_residue;
///
/// assert_eq!(find_invalid_residue(b"ACGTN"), None);
/// assert_eq!(find_invalid_residue(b"AC1T"), Some((2, b'1')));
/// ```
#[must_use]
pub fn find_invalid_residue(sequence: &[u8]) -> Option<(usize, u8)> {
    sequence
        .iter()
        .copied()
        .enumerate()
        .find(|&(_, byte)| !is_valid_residue(byte))
}
