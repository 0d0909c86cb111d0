/// Build a fused transform-and-fold closure.
///
/// Same persistent-accumulator semantics as [`reduce`](super::reduce): the
/// returned closure owns the accumulator and carries it across calls. Each
/// element is passed through `transform` before `combine` folds it in, in
/// input order.
pub fn map_reduce<M, F>(initial: i64, transform: M, mut combine: F) -> impl FnMut(&[i64]) -> i64
where
    M: Fn(i64) -> i64,
    F: FnMut(i64, i64) -> i64,
{
    let mut acc = initial;
    move |items: &[i64]| {
        for &item in items {
            acc = combine(acc, transform(item));
        }
        acc
    }
}
