use num_traits::{FromPrimitive, Num, Signed, ToPrimitive};
use std::fmt::Debug;

pub trait Number: Num + Copy + PartialOrd + FromPrimitive + ToPrimitive + Signed + Debug {
    fn min_num(self, other: Self) -> Self;
    fn max_num(self, other: Self) -> Self;

    /// Signed area of a flat `[x0, y0, x1, y1, ...]` buffer.
    fn polygon_area(points: &[Self]) -> f64;
}

macro_rules! impl_integer_number {
    ($t:ty) => {
        impl Number for $t {
            #[inline(always)]
            fn min_num(self, other: Self) -> Self {
                self.min(other)
            }
            #[inline(always)]
            fn max_num(self, other: Self) -> Self {
                self.max(other)
            }

            fn polygon_area(points: &[Self]) -> f64 {
                let len = points.len();

                if len < 6 || len & 1 != 0 {
                    return 0.0;
                }

                let mut acc = 0i128;

                for base in (0..len).step_by(2) {
                    let next = (base + 2) % len;
                    let x0 = points[base] as i128;
                    let y0 = points[base + 1] as i128;
                    let x1 = points[next] as i128;
                    let y1 = points[next + 1] as i128;

                    acc += x0 * y1 - y0 * x1;
                }

                0.5 * acc as f64
            }
        }
    };
}

impl_integer_number!(i32);
impl_integer_number!(i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_area_i32() {
        let square = [0, 0, 10, 0, 10, 10, 0, 10];
        assert_eq!(i32::polygon_area(&square), 100.0);

        let reversed = [0, 10, 10, 10, 10, 0, 0, 0];
        assert_eq!(i32::polygon_area(&reversed), -100.0);
    }

    #[test]
    fn test_polygon_area_degenerate() {
        assert_eq!(i64::polygon_area(&[0, 0, 1, 1]), 0.0);
        assert_eq!(i64::polygon_area(&[0, 0, 1, 1, 2]), 0.0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(3i64.min_num(-2), -2);
        assert_eq!(3i64.max_num(-2), 3);
    }
}
