//! Top-k / bottom-k selection over an externally owned mapping.
//!
//! The mapping goes from a key to a fixed-width record of numeric fields
//! (`Vec<f64>`, `[i64; 3]`, ...). Selection ranks keys by the field at `axis`
//! and returns the keys and the field values as two parallel vectors of
//! length `min(n, mapping.len())`. Nothing is retained between calls.
//!
//! Both directions break ties on the field by ascending key, so results are
//! deterministic regardless of the mapping's iteration order.
//!
//! ```
//! use std::collections::HashMap;
//! use rank_core::select::top_n;
//!
//! let data = HashMap::from([("A", [15, 300]), ("B", [15, 200]), ("C", [1, 3000])]);
//! let (keys, values) = top_n(2, data.iter(), 1).unwrap();
//! assert_eq!(keys, vec!["C", "A"]);
//! assert_eq!(values, vec![3000, 300]);
//! ```

use std::cmp::{Ordering, Reverse};

use crate::error::RankError;
use crate::heap::RankedHeap;

/// Parallel key / value vectors produced by a selection.
pub type Selection<K, V> = (Vec<K>, Vec<V>);

/// A numeric record field with a total order.
///
/// Floats compare with `total_cmp`, so `NaN` sorts above every number instead
/// of poisoning the ranking.
pub trait FieldValue: Copy {
    fn field_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_field_value_for_ord {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                #[inline]
                fn field_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_field_value_for_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FieldValue for f32 {
    #[inline]
    fn field_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl FieldValue for f64 {
    #[inline]
    fn field_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

/// Ranks by field ascending, then key ascending.
struct Low<'a, K, V> {
    value: V,
    key: &'a K,
}

/// Ranks by field ascending, then key descending, so that the largest entry
/// is the highest field with the smallest key.
struct High<'a, K, V> {
    value: V,
    key: &'a K,
}

impl<K: Ord, V: FieldValue> Ord for Low<'_, K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .field_cmp(&other.value)
            .then_with(|| self.key.cmp(other.key))
    }
}

impl<K: Ord, V: FieldValue> Ord for High<'_, K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .field_cmp(&other.value)
            .then_with(|| other.key.cmp(self.key))
    }
}

macro_rules! impl_partial_via_ord {
    ($($name:ident),*) => {
        $(
            impl<K: Ord, V: FieldValue> PartialOrd for $name<'_, K, V> {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl<K: Ord, V: FieldValue> PartialEq for $name<'_, K, V> {
                fn eq(&self, other: &Self) -> bool {
                    self.cmp(other) == Ordering::Equal
                }
            }

            impl<K: Ord, V: FieldValue> Eq for $name<'_, K, V> {}
        )*
    };
}

impl_partial_via_ord!(Low, High);

#[inline]
fn field_at<R, V>(record: &R, axis: usize) -> Result<V, RankError>
where
    R: AsRef<[V]> + ?Sized,
    V: FieldValue,
{
    let fields = record.as_ref();
    fields
        .get(axis)
        .copied()
        .ok_or(RankError::AxisOutOfRange {
            axis,
            len: fields.len(),
        })
}

/// Returns the `n` keys with the largest value at `axis`, largest first.
///
/// # Errors
///
/// [`RankError::AxisOutOfRange`] if any record is shorter than `axis + 1`.
pub fn top_n<'a, K, R, V, M>(n: usize, mapping: M, axis: usize) -> Result<Selection<K, V>, RankError>
where
    M: IntoIterator<Item = (&'a K, &'a R)>,
    K: Ord + Clone + 'a,
    R: AsRef<[V]> + ?Sized + 'a,
    V: FieldValue,
{
    let mut heap = RankedHeap::new(n);
    for (key, record) in mapping {
        let value = field_at(record, axis)?;
        heap.push(High { value, key });
    }

    let ranked = heap.into_sorted_vec();
    Ok(ranked
        .into_iter()
        .rev()
        .map(|e| (e.key.clone(), e.value))
        .unzip())
}

/// Returns the `n` keys with the smallest value at `axis`, smallest first.
///
/// # Errors
///
/// [`RankError::AxisOutOfRange`] if any record is shorter than `axis + 1`.
pub fn bottom_n<'a, K, R, V, M>(
    n: usize,
    mapping: M,
    axis: usize,
) -> Result<Selection<K, V>, RankError>
where
    M: IntoIterator<Item = (&'a K, &'a R)>,
    K: Ord + Clone + 'a,
    R: AsRef<[V]> + ?Sized + 'a,
    V: FieldValue,
{
    let mut heap = RankedHeap::new(n);
    for (key, record) in mapping {
        let value = field_at(record, axis)?;
        heap.push(Reverse(Low { value, key }));
    }

    // Ascending in `Reverse` means descending in the entries.
    let ranked = heap.into_sorted_vec();
    Ok(ranked
        .into_iter()
        .rev()
        .map(|Reverse(e)| (e.key.clone(), e.value))
        .unzip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn sample() -> HashMap<&'static str, [i32; 2]> {
        HashMap::from([("A", [15, 300]), ("B", [15, 200]), ("C", [1, 3000])])
    }

    #[test]
    fn top_n_by_first_field() {
        let data = sample();
        let (keys, values) = top_n(2, data.iter(), 0).unwrap();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(values, vec![15, 15]);
    }

    #[test]
    fn top_n_by_second_field() {
        let data = sample();
        let (keys, values) = top_n(2, data.iter(), 1).unwrap();
        assert_eq!(keys, vec!["C", "A"]);
        assert_eq!(values, vec![3000, 300]);
    }

    #[test]
    fn bottom_n_breaks_ties_by_key() {
        let data = sample();
        let (keys, values) = bottom_n(2, data.iter(), 0).unwrap();
        assert_eq!(keys, vec!["C", "A"]);
        assert_eq!(values, vec![1, 15]);

        let (keys, values) = bottom_n(3, data.iter(), 1).unwrap();
        assert_eq!(keys, vec!["B", "A", "C"]);
        assert_eq!(values, vec![200, 300, 3000]);
    }

    #[test]
    fn n_larger_than_mapping() {
        let data = sample();
        let (keys, values) = top_n(10, data.iter(), 1).unwrap();
        assert_eq!(keys.len(), 3);
        assert_eq!(values, vec![3000, 300, 200]);
    }

    #[test]
    fn zero_n_is_empty() {
        let data = sample();
        let (keys, values) = bottom_n(0, data.iter(), 0).unwrap();
        assert!(keys.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn empty_mapping() {
        let data: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        let (keys, values) = top_n(3, data.iter(), 0).unwrap();
        assert!(keys.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn axis_out_of_range() {
        let data = sample();
        let err = top_n(1, data.iter(), 2).unwrap_err();
        assert!(matches!(err, RankError::AxisOutOfRange { axis: 2, len: 2 }));
    }

    #[test]
    fn float_fields_and_nan() {
        let mut data: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        data.insert("x".into(), vec![0.5]);
        data.insert("y".into(), vec![-2.0]);
        data.insert("z".into(), vec![f64::NAN]);
        data.insert("w".into(), vec![3.25]);

        let (keys, values) = bottom_n(2, data.iter(), 0).unwrap();
        assert_eq!(keys, vec!["y".to_string(), "x".to_string()]);
        assert_eq!(values, vec![-2.0, 0.5]);

        let (keys, _) = top_n(2, data.iter(), 0).unwrap();
        assert_eq!(keys, vec!["z".to_string(), "w".to_string()]);
    }

    #[test]
    fn works_with_ahash_map() {
        let mut data: ahash::AHashMap<u32, Vec<u64>> = ahash::AHashMap::new();
        for k in 0..50u32 {
            data.insert(k, vec![u64::from(k % 10), u64::from(k)]);
        }
        let (keys, values) = top_n(3, data.iter(), 0).unwrap();
        assert_eq!(keys, vec![9, 19, 29]);
        assert_eq!(values, vec![9, 9, 9]);
    }
}
