//! Manual loop unrolling for a fixed number of iterations. LLVM does not always unroll the
//! per-byte lookups of the table strategy, so we spell the iterations out.

/// Repeat the statement `$s` `N` times. The counter `$i` starts at `$e` and is advanced by `$inc`
/// between repetitions (not after the last one).
macro_rules! unroll {
    (1, |$i:ident = {$e:expr}| $s:stmt, $inc:expr) => { let mut $i: usize = $e; $s };
    (2, |$i:ident = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(1, |$i = {$e}| $s, $inc); $inc; $s };
    (3, |$i:ident = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(2, |$i = {$e}| $s, $inc); $inc; $s };
    (4, |$i:ident = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(3, |$i = {$e}| $s, $inc); $inc; $s };
    (5, |$i:ident = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(4, |$i = {$e}| $s, $inc); $inc; $s };
    (6, |$i:ident = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(5, |$i = {$e}| $s, $inc); $inc; $s };
    (7, |$i:ident = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(6, |$i = {$e}| $s, $inc); $inc; $s };
    (8, |$i:ident = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(7, |$i = {$e}| $s, $inc); $inc; $s };
}

pub(crate) use unroll;

#[cfg(test)]
mod tests {
    #[test]
    fn test_unroll_visits_each_index() {
        let mut visited = Vec::new();
        unroll!(8, |i = {0}| {
                visited.push(i);
            },
            i += 1);
        assert_eq!(visited, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_unroll_custom_start_and_step() {
        let mut visited = Vec::new();
        unroll!(3, |i = {32}| {
                visited.push(i);
            },
            i /= 2);
        assert_eq!(visited, vec![32, 16, 8]);
    }
}
