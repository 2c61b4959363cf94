//! Affine curve points.

use super::{
    CURVE_EQUATION_A, CURVE_EQUATION_B, GENERATOR, ProjectivePoint, field::FieldElement,
    scalar::Scalar, util,
};
use crate::{EncodedPoint, Error, Result, StarkCurve};
use core::ops::Neg;
use elliptic_curve::group::Group;
use elliptic_curve::sec1::{Coordinates, FromEncodedPoint, ToEncodedPoint};
use ff::PrimeField;
use subtle::ConditionallySelectable;

/// Point on the STARK curve in affine coordinates, or the point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffinePoint {
    /// The point at infinity, the identity of the group.
    Infinity,

    /// A point `(x, y)` satisfying `y² = x³ + αx + β`.
    Finite {
        /// x-coordinate
        x: FieldElement,

        /// y-coordinate
        y: FieldElement,
    },
}

impl AffinePoint {
    /// Additive identity of the group.
    pub const IDENTITY: Self = Self::Infinity;

    /// Base point of the curve.
    pub const GENERATOR: Self = Self::Finite {
        x: GENERATOR.0,
        y: GENERATOR.1,
    };

    /// Creates a point from its coordinates, checking that it lies on the curve.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = Self::Finite { x, y };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// Recovers the point with the given x-coordinate and an even y-coordinate.
    ///
    /// Returns [`Error::PointNotOnCurve`] if `x³ + αx + β` is not a square.
    pub fn from_x(x: &FieldElement) -> Result<Self> {
        let rhs = curve_rhs(x);
        let root: FieldElement = Option::from(rhs.sqrt()).ok_or(Error::PointNotOnCurve)?;
        let y = FieldElement::conditional_select(&root, &-root, root.is_odd());
        Ok(Self::Finite { x: *x, y })
    }

    /// The x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<FieldElement> {
        match self {
            Self::Infinity => None,
            Self::Finite { x, .. } => Some(*x),
        }
    }

    /// The y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<FieldElement> {
        match self {
            Self::Infinity => None,
            Self::Finite { y, .. } => Some(*y),
        }
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Does this point satisfy the curve equation?
    ///
    /// The point at infinity is always considered on the curve.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Infinity => true,
            Self::Finite { x, y } => y.square() == curve_rhs(x),
        }
    }

    /// Returns the projective representation of this point.
    ///
    /// Fails with [`Error::PointNotOnCurve`] if the coordinates do not
    /// satisfy the curve equation.
    pub fn to_projective(&self) -> Result<ProjectivePoint> {
        match self {
            Self::Infinity => Ok(ProjectivePoint::IDENTITY),
            Self::Finite { x, y } => {
                let encoded = EncodedPoint::from_affine_coordinates(&x.to_repr(), &y.to_repr(), false);
                Option::<primeorder::AffinePoint<StarkCurve>>::from(primeorder::AffinePoint::<StarkCurve>::from_encoded_point(&encoded))
                    .map(|p| ProjectivePoint::from(p))
                    .ok_or(Error::PointNotOnCurve)
            }
        }
    }

    /// Returns `self + other`.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        Ok((self.to_projective()? + other.to_projective()?).into())
    }

    /// Returns `self - other`.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.try_add(&-other)
    }

    /// Returns `self + self`.
    pub fn try_double(&self) -> Result<Self> {
        Ok(self.to_projective()?.double().into())
    }

    /// Returns `[k] self`.
    pub fn try_mul(&self, k: &Scalar) -> Result<Self> {
        Ok((self.to_projective()? * k).into())
    }
}

/// x³ + αx + β
fn curve_rhs(x: &FieldElement) -> FieldElement {
    x.square() * x + CURVE_EQUATION_A * x + CURVE_EQUATION_B
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Neg for AffinePoint {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Infinity => Self::Infinity,
            Self::Finite { x, y } => Self::Finite { x, y: -y },
        }
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        -*self
    }
}

impl TryFrom<AffinePoint> for ProjectivePoint {
    type Error = Error;

    fn try_from(point: AffinePoint) -> Result<ProjectivePoint> {
        point.to_projective()
    }
}

impl From<ProjectivePoint> for AffinePoint {
    fn from(point: ProjectivePoint) -> AffinePoint {
        AffinePoint::from(&point)
    }
}

impl From<&ProjectivePoint> for AffinePoint {
    fn from(point: &ProjectivePoint) -> AffinePoint {
        let encoded = point.to_affine().to_encoded_point(false);
        match encoded.coordinates() {
            Coordinates::Uncompressed { x, y } => AffinePoint::Finite {
                x: FieldElement::from_canonical(&util::from_be_bytes(&(*x).into())),
                y: FieldElement::from_canonical(&util::from_be_bytes(&(*y).into())),
            },
            _ => AffinePoint::Infinity,
        }
    }
}
