use memchr::memmem;

/// Locates a duplicated terminal segment left behind by circular assembly.
///
/// Takes the first `min_length` bases as a seed and finds its rightmost
/// occurrence. When that occurrence lies in the back half of the sequence
/// and everything from it to the end equals a prefix of the same length
/// (ignoring case), its position is returned: `sequence[..position]` is the
/// sequence with the repeat removed.
#[must_use]
pub fn find_terminal_repeat(sequence: &[u8], min_length: usize) -> Option<usize> {
    if sequence.is_empty() || min_length == 0 {
        return None;
    }

    let folded = sequence.to_ascii_lowercase();
    let seed = &folded[..min_length.min(folded.len())];
    let position = memmem::rfind(&folded, seed)?;

    if position * 2 < folded.len() {
        return None;
    }

    let suffix = &folded[position..];
    (folded[..suffix.len()] == *suffix).then_some(position)
}

/// Removes a terminal repeat, if any.
///
/// Returns the possibly shortened sequence together with the number of
/// bases removed.
///
/// # Examples
///
/// ```rust
/// use reorient_core::algorithms::terminal_repeat::remove_terminal_repeat;
///
/// let sequence = b"ACGTTGCAAGGCTTACCGATGCCATTAGGCACGTTGCAAGG";
/// let (trimmed, removed) = remove_terminal_repeat(sequence, 8);
/// assert_eq!(removed, Some(11));
/// assert_eq!(trimmed, &sequence[..30]);
/// ```
#[must_use]
pub fn remove_terminal_repeat(sequence: &[u8], min_length: usize) -> (&[u8], Option<usize>) {
    match find_terminal_repeat(sequence, min_length) {
        Some(position) => (&sequence[..position], Some(sequence.len() - position)),
        None => (sequence, None),
    }
}
