//! Small numeric helpers shared by the imputer and the outlier filter.
//!
//! Summation and interpolation follow numpy's order of operations, so the
//! written floats round the same way in the last bit.

/// Values per unrolled block before the sum splits in half.
const PAIRWISE_BLOCK: usize = 128;

/// Pairwise summation in numpy's `pairwise_sum` order: plain loop under 8
/// values, eight running partials up to one block, recursive halves beyond.
pub fn pairwise_sum(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 8 {
        return values.iter().fold(0.0, |acc, v| acc + v);
    }
    if n <= PAIRWISE_BLOCK {
        let mut r = [0.0f64; 8];
        r.copy_from_slice(&values[..8]);
        let blocked = n - n % 8;
        for chunk in values[8..blocked].chunks_exact(8) {
            for (acc, v) in r.iter_mut().zip(chunk) {
                *acc += v;
            }
        }
        let mut res = ((r[0] + r[1]) + (r[2] + r[3])) + ((r[4] + r[5]) + (r[6] + r[7]));
        for v in &values[blocked..] {
            res += v;
        }
        return res;
    }
    let mut half = n / 2;
    half -= half % 8;
    pairwise_sum(&values[..half]) + pairwise_sum(&values[half..])
}

/// Mean of the present cells of a masked column.
///
/// Absent cells count as zero in the sum and are left out of the divisor,
/// the same as a masked-array mean. `None` when nothing is present.
pub fn masked_mean(cells: &[Option<f64>]) -> Option<f64> {
    let count = cells.iter().flatten().count();
    if count == 0 {
        return None;
    }
    let filled: Vec<f64> = cells.iter().map(|c| c.unwrap_or(0.0)).collect();
    Some(pairwise_sum(&filled) / count as f64)
}

/// Quantile `q` (0..=1) of already sorted data, linearly interpolated
/// between the two closest ranks at position `(n - 1) * q`.
///
/// Past the midpoint the value is taken back from the upper rank, which
/// keeps the result exact when `t` reaches 1.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let pos = last as f64 * q.clamp(0.0, 1.0);
    let lower = pos.floor() as usize;
    let upper = (lower + 1).min(last);
    let t = pos - lower as f64;

    let a = *sorted.get(lower)?;
    let b = *sorted.get(upper)?;
    let diff = b - a;
    Some(if t >= 0.5 { b - diff * (1.0 - t) } else { a + diff * t })
}

/// Median of sorted data; the two middle values are averaged for even counts.
pub fn median_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let hi = *sorted.get(n / 2)?;
    if n % 2 == 1 {
        return Some(hi);
    }
    let lo = *sorted.get(n / 2 - 1)?;
    Some((lo + hi) / 2.0)
}

/// Sort a copy of the data in ascending order.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
