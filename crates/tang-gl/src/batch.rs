//! Bulk iteration over vectors packed in a flat scalar buffer.

use crate::{Quat, Scalar, Vec2, Vec3, Vec4};

/// A value stored as `LEN` consecutive scalars.
pub trait Packed<S: Scalar>: Copy {
    const LEN: usize;

    /// Read from the first `LEN` elements of `src`.
    fn read(src: &[S]) -> Self;

    /// Write into the first `LEN` elements of `dst`.
    fn write(self, dst: &mut [S]);
}

macro_rules! impl_packed {
    ($($t:ident => $n:expr),*) => {
        $(
            impl<S: Scalar> Packed<S> for $t<S> {
                const LEN: usize = $n;

                #[inline]
                fn read(src: &[S]) -> Self {
                    Self::from_slice(src)
                }

                #[inline]
                fn write(self, dst: &mut [S]) {
                    dst[..$n].copy_from_slice(&self.to_array());
                }
            }
        )*
    };
}

impl_packed!(Vec2 => 2, Vec3 => 3, Vec4 => 4, Quat => 4);

/// Apply `f` in place to each `V` packed in `buf`, in order.
///
/// Element `k` starts at `offset + k * stride`. A `stride` of 0 means tightly
/// packed (`V::LEN`); a `count` of 0 means until the buffer runs out. A
/// trailing vector that would run past the end of `buf` is skipped.
///
/// Returns the number of vectors visited.
pub fn for_each<S, V, F>(buf: &mut [S], stride: usize, offset: usize, count: usize, mut f: F) -> usize
where
    S: Scalar,
    V: Packed<S>,
    F: FnMut(&mut V),
{
    let stride = if stride == 0 { V::LEN } else { stride };
    let end = if count == 0 {
        buf.len()
    } else {
        count.saturating_mul(stride).saturating_add(offset).min(buf.len())
    };

    let mut visited = 0;
    let mut i = offset;
    while i < end {
        let Some(slot) = buf.get_mut(i..i + V::LEN) else {
            trace!(index = i, len = V::LEN, buf_len = buf.len(), "partial vector at end of buffer");
            break;
        };
        let mut v = V::read(slot);
        f(&mut v);
        v.write(slot);
        visited += 1;
        i += stride;
    }
    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn tightly_packed() {
        let mut buf = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let n = for_each(&mut buf, 0, 0, 0, |v: &mut Vec2<f64>| *v = *v * 2.0);
        assert_eq!(n, 3);
        assert_eq!(buf, [2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn stride_and_offset_skip_padding() {
        // [pad, x, y, z, pad] twice
        let mut buf = [9.0, 1.0, 2.0, 3.0, 9.0, 9.0, 4.0, 5.0, 6.0, 9.0];
        let n = for_each(&mut buf, 5, 1, 0, |v: &mut Vec3<f64>| *v = -*v);
        assert_eq!(n, 2);
        assert_eq!(buf, [9.0, -1.0, -2.0, -3.0, 9.0, 9.0, -4.0, -5.0, -6.0, 9.0]);
    }

    #[test]
    fn count_limits_visits() {
        let mut buf = [0.0_f32; 12];
        let n = for_each(&mut buf, 0, 0, 2, |v: &mut Vec4<f32>| v.w = 1.0);
        assert_eq!(n, 2);
        assert_eq!(buf[3], 1.0);
        assert_eq!(buf[7], 1.0);
        assert_eq!(buf[11], 0.0);
    }

    #[test]
    fn visits_in_order() {
        let mut buf = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let mut next = 0.0;
        for_each(&mut buf, 0, 0, 0, |v: &mut Vec2<f64>| {
            v.x = next;
            next += 1.0;
        });
        assert_eq!(buf, [0.0, 0.0, 1.0, 0.0, 2.0, 0.0]);
    }

    #[test]
    fn partial_trailing_vector_is_skipped() {
        let mut buf = [1.0, 1.0, 1.0, 2.0, 2.0];
        let n = for_each(&mut buf, 0, 0, 0, |v: &mut Vec3<f64>| *v = Vec3::zero());
        assert_eq!(n, 1);
        assert_eq!(buf, [0.0, 0.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn offset_past_end_visits_nothing() {
        let mut buf = [1.0, 2.0];
        assert_eq!(for_each(&mut buf, 0, 4, 0, |_: &mut Vec2<f64>| {}), 0);
    }

    #[test]
    fn normalizes_quats_in_place() {
        let mut buf = [0.0, 0.0, 0.0, 2.0, 0.0, 3.0, 0.0, 0.0];
        for_each(&mut buf, 0, 0, 0, |q: &mut Quat<f64>| *q = q.normalize());
        assert_approx_eq!(Quat::from_slice(&buf[0..4]), Quat::identity());
        assert_approx_eq!(Quat::from_slice(&buf[4..8]), Quat::new(0.0, 1.0, 0.0, 0.0));
    }
}
