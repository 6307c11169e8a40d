//! Integer sampling helpers for the maze generator.
use rand::Rng;

/// Uniform in `[0, max)`, or 0 if `max <= 0`.
pub fn rand_up_to<R: Rng + ?Sized>(rng: &mut R, max: i32) -> i32 {
    if max <= 0 {
        0
    } else {
        rng.gen_range(0..max)
    }
}

/// Uniform in `[min, max]`.
pub fn rand_between<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max, "empty range {min}..={max}");
    rng.gen_range(min..=max)
}

/// Uniform over the even integers in `[min, max]`. `None` if there are none, which happens when
/// `min == max` is odd or the range is empty.
pub fn even_rand_between<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> Option<i32> {
    parity_rand_between(rng, min, max, 0)
}

/// Uniform over the odd integers in `[min, max]`. `None` if there are none.
pub fn odd_rand_between<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> Option<i32> {
    parity_rand_between(rng, min, max, 1)
}

fn parity_rand_between<R: Rng + ?Sized>(
    rng: &mut R,
    min: i32,
    max: i32,
    parity: i32,
) -> Option<i32> {
    let first = if min.rem_euclid(2) == parity { min } else { min + 1 };
    if first > max {
        return None;
    }
    Some(first + 2 * rand_between(rng, 0, (max - first) / 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn single_value_ranges() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(even_rand_between(&mut rng, 3, 3), None);
        assert_eq!(even_rand_between(&mut rng, 2, 2), Some(2));
        assert_eq!(odd_rand_between(&mut rng, 2, 2), None);
        assert_eq!(odd_rand_between(&mut rng, 3, 3), Some(3));
        assert_eq!(even_rand_between(&mut rng, 5, 4), None);
    }

    #[test]
    fn parity_and_bounds_hold() {
        let mut rng = StdRng::seed_from_u64(7);
        for min in -3..6 {
            for max in min + 1..min + 9 {
                for _ in 0..20 {
                    let e = even_rand_between(&mut rng, min, max).unwrap();
                    assert!(e % 2 == 0 && (min..=max).contains(&e));
                    let o = odd_rand_between(&mut rng, min, max).unwrap();
                    assert!(o.rem_euclid(2) == 1 && (min..=max).contains(&o));
                }
            }
        }
    }

    #[test]
    fn every_even_value_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 11];
        for _ in 0..500 {
            seen[even_rand_between(&mut rng, 1, 10).unwrap() as usize] = true;
        }
        assert_eq!(
            (0..11).filter(|&i| seen[i]).collect::<Vec<_>>(),
            vec![2, 4, 6, 8, 10]
        );
    }

    #[test]
    fn plain_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!((0..4).contains(&rand_up_to(&mut rng, 4)));
            assert!((2..=5).contains(&rand_between(&mut rng, 2, 5)));
        }
        assert_eq!(rand_up_to(&mut rng, 0), 0);
        assert_eq!(rand_between(&mut rng, 7, 7), 7);
    }
}
