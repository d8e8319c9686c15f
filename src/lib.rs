use wasm_bindgen::prelude::*;
use web_sys::js_sys::Int32Array;

pub mod clipper;
pub mod geometry;
pub mod utils;

use crate::clipper::enums::{ClipType, PolyFillType};
use crate::clipper::error::{ClipperError, ClipperResult};
use crate::clipper::utils as clipper_utils;
use crate::geometry::point::{IntPoint, Path, Paths};
use crate::utils::number::Number;
use crate::utils::wasm_logger::{init_logger, level_from_u8};

#[wasm_bindgen]
pub fn polygon_area_i32(points: &[i32]) -> f64 {
    Number::polygon_area(points)
}

#[wasm_bindgen]
pub fn init_logger_wasm(level: u8) {
    init_logger(level_from_u8(level));
}

fn to_i32(value: i64) -> ClipperResult<i32> {
    i32::try_from(value).map_err(|_| ClipperError::CoordinateOutOfRange(value))
}

/// Packs paths as `[count, offset_0 .. offset_{count-1}, x0, y0, x1, y1, ...]`.
/// Offsets are relative to the start of the coordinate section. Fails if a
/// coordinate, offset or count does not fit in an `i32`.
pub fn pack_paths_to_i32(paths: &[Path]) -> ClipperResult<Vec<i32>> {
    let count = paths.len();
    let total_points: usize = paths.iter().map(|path| path.len()).sum();
    let header_len = 1 + count;
    let total_len = header_len + total_points * 2;

    let mut out = Vec::with_capacity(total_len);
    out.push(to_i32(count as i64)?);

    let mut running: usize = 0;
    for path in paths {
        out.push(to_i32(running as i64)?);
        running += path.len() * 2;
    }

    for path in paths {
        for point in path {
            out.push(to_i32(point.x)?);
            out.push(to_i32(point.y)?);
        }
    }

    debug_assert_eq!(out.len(), total_len);
    Ok(out)
}

fn malformed(reason: &'static str, buff: &[i32]) -> ClipperError {
    ClipperError::MalformedBuffer {
        reason,
        len: buff.len(),
    }
}

/// Inverse of [`pack_paths_to_i32`].
pub fn unpack_paths_from_i32(buff: &[i32]) -> ClipperResult<Paths> {
    let count = *buff.first().ok_or_else(|| malformed("missing path count", buff))?;

    if count < 0 {
        return Err(malformed("negative path count", buff));
    }

    let count = count as usize;
    let header_len = 1 + count;

    if buff.len() < header_len {
        return Err(malformed("truncated header", buff));
    }

    let data = &buff[header_len..];

    if data.len() % 2 != 0 {
        return Err(malformed("odd coordinate count", buff));
    }

    let mut result = Vec::with_capacity(count);

    for i in 0..count {
        let start = buff[1 + i];
        let end = if i + 1 < count {
            buff[2 + i]
        } else {
            data.len() as i32
        };

        if start < 0 || end < start || end as usize > data.len() || start % 2 != 0 || end % 2 != 0 {
            return Err(malformed("invalid path offset", buff));
        }

        let path: Path = data[start as usize..end as usize]
            .chunks_exact(2)
            .map(|chunk| IntPoint::new(chunk[0] as i64, chunk[1] as i64))
            .collect();

        result.push(path);
    }

    Ok(result)
}

/// Decodes the options and both packed buffers, then runs one boolean
/// operation on closed paths.
pub fn boolean_op_inner(clip_type: u8, fill_rule: u8, subject: &[i32], clip: &[i32]) -> ClipperResult<Paths> {
    let clip_type = ClipType::try_from(clip_type)?;
    let fill_rule = PolyFillType::try_from(fill_rule)?;
    let subject = unpack_paths_from_i32(subject)?;
    let clip = unpack_paths_from_i32(clip)?;

    Ok(clipper_utils::boolean_op(clip_type, fill_rule, &subject, &clip))
}

#[wasm_bindgen]
pub fn boolean_op_wasm(clip_type: u8, fill_rule: u8, subject: &[i32], clip: &[i32]) -> Result<Int32Array, JsError> {
    let packed = boolean_op_inner(clip_type, fill_rule, subject, clip)
        .and_then(|solution| pack_paths_to_i32(&solution))
        .map_err(|err| JsError::new(&err.to_string()))?;
    let out = Int32Array::new_with_length(packed.len() as u32);

    out.copy_from(&packed);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(left: i64, top: i64, size: i64) -> Path {
        vec![
            IntPoint::new(left, top),
            IntPoint::new(left + size, top),
            IntPoint::new(left + size, top + size),
            IntPoint::new(left, top + size),
        ]
    }

    #[test]
    fn test_pack_layout() {
        let packed = pack_paths_to_i32(&[square(0, 0, 10), square(20, 20, 5)]).unwrap();

        assert_eq!(packed[0], 2);
        assert_eq!(packed[1], 0);
        assert_eq!(packed[2], 8);
        assert_eq!(packed.len(), 3 + 16);
        assert_eq!(&packed[3..5], &[0, 0]);
        assert_eq!(&packed[11..13], &[20, 20]);
    }

    #[test]
    fn test_pack_rejects_out_of_range_coordinates() {
        let too_far = i32::MAX as i64 + 1;

        assert_eq!(
            pack_paths_to_i32(&[square(too_far - 10, 0, 10)]),
            Err(ClipperError::CoordinateOutOfRange(too_far))
        );
        assert_eq!(
            pack_paths_to_i32(&[vec![IntPoint::new(0, i32::MIN as i64 - 1)]]),
            Err(ClipperError::CoordinateOutOfRange(i32::MIN as i64 - 1))
        );
        assert!(pack_paths_to_i32(&[square(i32::MAX as i64 - 10, i32::MIN as i64, 10)]).is_ok());
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let paths = vec![square(0, 0, 10), Vec::new(), square(-5, -5, 3)];
        let unpacked = unpack_paths_from_i32(&pack_paths_to_i32(&paths).unwrap()).unwrap();

        assert_eq!(unpacked, paths);
    }

    #[test]
    fn test_unpack_rejects_malformed_buffers() {
        assert!(matches!(
            unpack_paths_from_i32(&[]),
            Err(ClipperError::MalformedBuffer { len: 0, .. })
        ));
        assert!(unpack_paths_from_i32(&[-1]).is_err());
        assert!(unpack_paths_from_i32(&[2, 0]).is_err());
        assert!(unpack_paths_from_i32(&[1, 0, 5]).is_err());
        assert!(unpack_paths_from_i32(&[1, 4, 0, 0]).is_err());
        assert_eq!(unpack_paths_from_i32(&[0]).unwrap(), Vec::<Path>::new());
    }

    #[test]
    fn test_boolean_op_inner() {
        let subject = pack_paths_to_i32(&[square(0, 0, 10)]).unwrap();
        let clip = pack_paths_to_i32(&[square(5, 5, 10)]).unwrap();

        let solution = boolean_op_inner(0, 1, &subject, &clip).unwrap();

        assert_eq!(solution.len(), 1);
        assert_eq!(polygon_area_i32(&pack_paths_to_i32(&solution).unwrap()[2..]), 25.0);
    }

    #[test]
    fn test_boolean_op_inner_rejects_options() {
        let subject = pack_paths_to_i32(&[square(0, 0, 10)]).unwrap();

        assert_eq!(
            boolean_op_inner(9, 1, &subject, &[0]),
            Err(ClipperError::InvalidClipType(9))
        );
        assert_eq!(
            boolean_op_inner(1, 7, &subject, &[0]),
            Err(ClipperError::InvalidFillRule(7))
        );
    }

    #[test]
    fn test_polygon_area_i32() {
        assert_eq!(polygon_area_i32(&[0, 0, 10, 0, 10, 10, 0, 10]), 100.0);
        assert_eq!(polygon_area_i32(&[0, 0, 10, 0]), 0.0);
    }
}
