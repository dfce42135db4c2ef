fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit sum of `n` until a single digit remains.
pub fn digital_root(n: u64) -> u64 {
    let mut root = n;
    while root > 9 {
        root = digit_sum(root);
    }
    root
}
