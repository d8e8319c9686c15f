use crate::clipper::error::ClipperError;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyFillType {
    EvenOdd = 0,
    NonZero = 1,
    Positive = 2,
    Negative = 3,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyType {
    Subject = 0,
    Clip = 1,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum ClipType {
    Intersection = 0,
    Union = 1,
    Difference = 2,
    Xor = 3,
}

/// Pending merge of a hot edge with its AEL neighbour at a shared vertex.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum JoinWith {
    NoJoin = 0,
    Left = 1,
    Right = 2,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PointInPolygonResult {
    IsOn = 0,
    IsInside = 1,
    IsOutside = 2,
}

impl TryFrom<u8> for PolyFillType {
    type Error = ClipperError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PolyFillType::EvenOdd),
            1 => Ok(PolyFillType::NonZero),
            2 => Ok(PolyFillType::Positive),
            3 => Ok(PolyFillType::Negative),
            _ => Err(ClipperError::InvalidFillRule(value)),
        }
    }
}

impl TryFrom<u8> for PolyType {
    type Error = ClipperError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PolyType::Subject),
            1 => Ok(PolyType::Clip),
            _ => Err(ClipperError::InvalidPolyType(value)),
        }
    }
}

impl TryFrom<u8> for ClipType {
    type Error = ClipperError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ClipType::Intersection),
            1 => Ok(ClipType::Union),
            2 => Ok(ClipType::Difference),
            3 => Ok(ClipType::Xor),
            _ => Err(ClipperError::InvalidClipType(value)),
        }
    }
}
