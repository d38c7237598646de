/// Count the consecutive equal characters of `a[start_a..]` and `b[start_b..]`.
///
/// Stops at the first mismatch or when either slice runs out. Offsets past
/// the end of a slice yield 0.
///
/// # Example
/// ```
/// use libradix_core::common_prefix_length;
///
/// let a: Vec<char> = "bear".chars().collect();
/// let b: Vec<char> = "bell".chars().collect();
/// assert_eq!(common_prefix_length(&a, 0, &b, 0), 2);
/// assert_eq!(common_prefix_length(&a, 2, &b, 2), 0);
/// ```
pub fn common_prefix_length(a: &[char], start_a: usize, b: &[char], start_b: usize) -> usize {
    let a = a.get(start_a..).unwrap_or_default();
    let b = b.get(start_b..).unwrap_or_default();
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
