/// Build a mapping closure from `transform`.
///
/// The returned closure applies the transform to every element, preserving
/// length and order, and allocates a fresh `Vec` on every call. It holds no
/// state between calls.
pub fn map<F>(transform: F) -> impl Fn(&[i64]) -> Vec<i64>
where
    F: Fn(i64) -> i64,
{
    move |items: &[i64]| items.iter().map(|&v| transform(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transforms_every_element() {
        let double = map(|a| 2 * a);
        assert_eq!(double(&[1, 2, 3]), vec![2, 4, 6]);
        assert_eq!(double(&[4, 5, 6]), vec![8, 10, 12]);
    }

    #[test]
    fn test_output_length_matches_input_length() {
        let square = map(|a| a * a);
        assert_eq!(square(&[3, -4, 0, 7]).len(), 4);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let negate = map(|a| -a);
        assert_eq!(negate(&[]), Vec::<i64>::new());
    }
}
